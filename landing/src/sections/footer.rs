use leptos::prelude::*;
use traphandle::content::TRAP_HANDLE;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year() as i32;
    view! {
        <footer class="footer container">
            <div class="footer-line">
                <p class="footer-copyright">{TRAP_HANDLE.copyright(year)}</p>
            </div>
        </footer>
    }
}
