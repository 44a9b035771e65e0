// Trap Handle landing page, Leptos 0.8 CSR
// Developed by the Trap Handle team (c)2025

mod browser;
mod sections;

use leptos::prelude::*;
use sections::*;
use traphandle::content::TRAP_HANDLE;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page-background" aria-hidden="true">
                <LoopingVideo video=TRAP_HANDLE.global_background class="page-video" />
                <div class="page-shade"></div>
                <div class="page-energy"></div>
            </div>
            <Nav />
            <main class="page-main">
                <Hero />
                <Design />
                <Featured />
                <Reviews />
                <Footer />
            </main>
        </div>
    }
}
