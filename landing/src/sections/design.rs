use leptos::prelude::*;
use traphandle::content::{DesignPoint, TRAP_HANDLE};

use super::{ColorCarousel, LoopingVideo};

#[component]
pub fn Design() -> impl IntoView {
    let site = TRAP_HANDLE;
    view! {
        <section id="design" class="section container">
            <div class="panel">
                <div class="panel-backdrop">
                    <LoopingVideo video=site.design_background class="panel-video" />
                    <div class="panel-shade"></div>
                </div>
                <div class="panel-body">
                    <div class="section-header">
                        <div class="badge">{site.design_badge}</div>
                        <h2 class="section-title">{site.design_headline}</h2>
                        <p class="section-description">{site.design_copy}</p>
                    </div>
                    <div class="design-grid">
                        {site
                            .design_points
                            .iter()
                            .copied()
                            .map(|point| view! { <DesignCard point=point /> })
                            .collect_view()}
                    </div>
                    <div class="design-colors">
                        <div class="card-title">"Colors"</div>
                        <ColorCarousel />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn DesignCard(point: DesignPoint) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-title">{point.title}</div>
            <p class="card-body">{point.body}</p>
        </div>
    }
}
