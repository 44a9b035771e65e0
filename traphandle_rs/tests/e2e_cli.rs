//! End-to-end CLI tests for the `traphandle` build tool.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn traphandle() -> Command {
    cargo_bin_cmd!("traphandle")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        traphandle()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("manifest"));
    }

    #[test]
    fn shows_version() {
        traphandle()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod artifacts {
    use super::*;

    #[test]
    fn head_prints_metadata_and_json_ld() {
        traphandle()
            .arg("head")
            .assert()
            .success()
            .stdout(predicate::str::contains("<title>Trap Handle — Tall Kiteboard Handle</title>"))
            .stdout(predicate::str::contains("application/ld+json"))
            .stdout(predicate::str::contains("https://www.traphandle.com/opengraph-image.png"));
    }

    #[test]
    fn site_url_flag_overrides_origin() {
        traphandle()
            .args(["--site-url", "https://staging.traphandle.com", "sitemap"])
            .assert()
            .success()
            .stdout(predicate::str::contains("<loc>https://staging.traphandle.com/</loc>"))
            .stdout(predicate::str::contains("<changefreq>weekly</changefreq>"));
    }

    #[test]
    fn manifest_lists_images() {
        let tmp = TempDir::new().expect("failed to create temp dir for manifest cli test");
        for name in ["green.png", "Black.PNG", "readme.md"] {
            std::fs::write(tmp.path().join(name), b"x").unwrap();
        }
        traphandle()
            .arg("manifest")
            .arg(tmp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("\"Black.PNG\""))
            .stdout(predicate::str::contains("\"green.png\""))
            .stdout(predicate::str::contains("readme").not());
    }

    #[test]
    fn manifest_of_empty_dir_fails() {
        let tmp = TempDir::new().expect("failed to create temp dir for empty manifest cli test");
        traphandle()
            .arg("manifest")
            .arg(tmp.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("color variant list is empty"));
    }
}

mod build {
    use super::*;

    #[test]
    fn build_writes_all_artifacts() {
        let tmp = TempDir::new().expect("failed to create temp dir for build cli test");
        let colors = tmp.path().join("colors");
        std::fs::create_dir(&colors).unwrap();
        std::fs::write(colors.join("orange.png"), b"x").unwrap();
        let template = tmp.path().join("index.html");
        std::fs::write(
            &template,
            "<html><head><!-- traphandle:head --></head><body></body></html>",
        )
        .unwrap();
        let out = tmp.path().join("dist");

        traphandle()
            .current_dir(tmp.path())
            .arg("build")
            .arg("--out")
            .arg(&out)
            .arg("--template")
            .arg(&template)
            .arg("--colors")
            .arg(&colors)
            .assert()
            .success()
            .stdout(predicate::str::contains("sitemap.xml"));

        let index = std::fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.contains("rel=\"canonical\""));
        assert!(!index.contains("traphandle:head"));
        assert!(out.join("sitemap.xml").exists());
        let manifest = std::fs::read_to_string(out.join("colors/manifest.json")).unwrap();
        assert!(manifest.contains("orange.png"));
    }

    #[test]
    fn build_reads_config_file() {
        let tmp = TempDir::new().expect("failed to create temp dir for config cli test");
        std::fs::write(
            tmp.path().join("traphandle.toml"),
            "site_url = \"https://preview.traphandle.com\"\nout_dir = \"public-out\"\n",
        )
        .unwrap();

        traphandle()
            .current_dir(tmp.path())
            .arg("build")
            .assert()
            .success();

        let sitemap = std::fs::read_to_string(tmp.path().join("public-out/sitemap.xml")).unwrap();
        assert!(sitemap.contains("https://preview.traphandle.com/"));
    }

    #[test]
    fn template_without_marker_fails() {
        let tmp = TempDir::new().expect("failed to create temp dir for marker cli test");
        let template = tmp.path().join("index.html");
        std::fs::write(&template, "<html></html>").unwrap();

        traphandle()
            .current_dir(tmp.path())
            .arg("build")
            .arg("--template")
            .arg(&template)
            .assert()
            .failure()
            .stderr(predicate::str::contains("traphandle:head"));
    }

    #[test]
    fn explicit_bad_config_fails() {
        let tmp = TempDir::new().expect("failed to create temp dir for bad config cli test");
        let config = tmp.path().join("broken.toml");
        std::fs::write(&config, "out_dir = [").unwrap();

        traphandle()
            .current_dir(tmp.path())
            .arg("--config")
            .arg(&config)
            .arg("head")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load config"));
    }
}
