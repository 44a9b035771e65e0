use leptos::prelude::*;
use traphandle::content::TRAP_HANDLE;

use super::{ButtonVariant, ExternalButton};

#[component]
pub fn Hero() -> impl IntoView {
    let site = TRAP_HANDLE;
    view! {
        <section class="hero container">
            <div class="panel panel-hero fade-up">
                <div class="hero-mark" aria-hidden="true">
                    <img src="/hero-logo.png" alt="Trap Handle mark" />
                </div>
                <div class="panel-body">
                    <div class="hero-content">
                        <div class="badge">{site.hero_badge}</div>
                        <h1 class="hero-title">
                            {site.hero_headline}
                            " "
                            <span class="hero-title-accent">{site.hero_highlight}</span>
                            "."
                        </h1>
                        <p class="hero-description">{site.hero_copy}</p>
                        <div class="hero-actions">
                            <ExternalButton link=site.buy />
                            <ExternalButton link=site.watch variant=ButtonVariant::Ghost />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
