use leptos::prelude::*;
use traphandle::content::{EMBED_ALLOW, TRAP_HANDLE, VideoEmbed};

use super::{ButtonVariant, LinkButton};

#[component]
pub fn Featured() -> impl IntoView {
    let site = TRAP_HANDLE;
    view! {
        <section id="featured" class="section container">
            <div class="panel">
                <div class="panel-body">
                    <div class="section-header">
                        <div class="badge">"Featured"</div>
                        <h2 class="section-title">{site.featured_headline}</h2>
                        <p class="section-description">{site.featured_copy}</p>
                    </div>
                    <div class="featured-grid">
                        {site
                            .videos
                            .iter()
                            .copied()
                            .map(|video| view! { <VideoCard video=video /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn VideoCard(video: VideoEmbed) -> impl IntoView {
    view! {
        <div class="card">
            <div class="video-card-header">
                <div>
                    <div class="card-title">{video.heading}</div>
                    <p class="card-body">{video.blurb}</p>
                </div>
                <LinkButton href=video.watch_url() label="Watch" variant=ButtonVariant::Ghost />
            </div>
            <div class="video-frame">
                <iframe
                    src=video.embed_url()
                    title=video.title
                    allow=EMBED_ALLOW
                    allowfullscreen=""
                ></iframe>
            </div>
            {video.disclaimer.map(|note| view! { <p class="video-note">{note}</p> })}
        </div>
    }
}
