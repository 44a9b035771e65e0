use leptos::prelude::*;
use traphandle::content::TRAP_HANDLE;

#[component]
pub fn Nav() -> impl IntoView {
    let site = TRAP_HANDLE;
    view! {
        <header class="nav-wrap container">
            <nav class="nav">
                <div class="nav-brand">
                    <div class="nav-title">{site.product.brand.to_uppercase()}</div>
                    <div class="nav-tagline">{site.tagline}</div>
                </div>
                <div class="nav-links">
                    {site
                        .nav
                        .iter()
                        .map(|anchor| {
                            view! {
                                <a href=anchor.href class="nav-link">
                                    {anchor.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </nav>
        </header>
    }
}
