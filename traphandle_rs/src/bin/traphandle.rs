//! `traphandle` - static build tooling for traphandle.com
//!
//! ```bash
//! traphandle build --template landing/dist/index.html --out landing/dist
//! traphandle manifest public/colors > public/colors/manifest.json
//! traphandle head
//! traphandle sitemap
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use traphandle::config::{BuildConfig, CONFIG_FILE};
use traphandle::content::TRAP_HANDLE;
use traphandle::emit::{build_site, head_for};
use traphandle::manifest::ColorManifest;
use traphandle::sitemap::Sitemap;

#[derive(Parser, Debug)]
#[command(name = "traphandle")]
#[command(about = "Build tooling for the Trap Handle site")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// Config file (default: ./traphandle.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Public origin, overrides `site_url` from the config file
    #[arg(long, global = true)]
    site_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write index.html, sitemap.xml and (optionally) colors/manifest.json
    Build {
        /// Output directory
        #[arg(long)]
        out: Option<PathBuf>,
        /// HTML template containing `<!-- traphandle:head -->`
        #[arg(long)]
        template: Option<PathBuf>,
        /// Directory of color images to index into a manifest
        #[arg(long)]
        colors: Option<PathBuf>,
    },
    /// Print the rendered head fragment
    Head,
    /// Print sitemap.xml
    Sitemap,
    /// Print a color manifest for the images in DIR
    Manifest {
        dir: PathBuf,
    },
}

fn load_config(args: &Args) -> Result<BuildConfig> {
    let mut config = match &args.config {
        Some(path) => BuildConfig::try_load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => BuildConfig::load(&std::env::current_dir().context("no working directory")?),
    };
    if let Some(site_url) = &args.site_url {
        config.site_url = site_url.clone();
    }
    debug!(?config, default_file = CONFIG_FILE, "resolved config");
    Ok(config)
}

fn run(args: Args) -> Result<()> {
    let mut config = load_config(&args)?;

    match args.command {
        Command::Build {
            out,
            template,
            colors,
        } => {
            if let Some(out) = out {
                config.out_dir = out;
            }
            if template.is_some() {
                config.index_template = template;
            }
            if colors.is_some() {
                config.colors_dir = colors;
            }
            let report = build_site(&config, Utc::now())
                .with_context(|| format!("build into {} failed", config.out_dir.display()))?;
            info!(
                files = report.written.len(),
                out = %config.out_dir.display(),
                "build complete"
            );
            for path in report.written {
                println!("{}", path.display());
            }
        }
        Command::Head => {
            println!("{}", head_for(&TRAP_HANDLE, &config.site_url));
        }
        Command::Sitemap => {
            print!("{}", Sitemap::for_site(&config.site_url, Utc::now()).to_xml());
        }
        Command::Manifest { dir } => {
            let manifest = ColorManifest::from_dir(&dir)
                .with_context(|| format!("failed to index colors in {}", dir.display()))?;
            println!("{}", manifest.to_json_pretty()?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
