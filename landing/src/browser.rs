// Browser bindings for the carousel driver: timers, signal store, manifest fetch
// Developed by the Trap Handle team (c)2025

use std::time::Duration;

use leptos::prelude::*;
use traphandle::carousel::{Carousel, CarouselStore};
use traphandle::lifecycle::Scheduler;
use traphandle::manifest::{ManifestError, ManifestOutcome, evaluate_response};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, HtmlMediaElement, RequestCache, RequestInit, Response};

/// Give up on the manifest after this long; the fallback is already showing.
pub const MANIFEST_TIMEOUT: Duration = Duration::from_secs(5);

/// `setInterval` through Leptos' helpers.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Option<IntervalHandle>;

    fn schedule_repeating(&mut self, period: Duration, callback: Box<dyn Fn()>) -> Self::Handle {
        match set_interval_with_handle(move || callback(), period) {
            Ok(handle) => Some(handle),
            Err(err) => {
                web_sys::console::warn_2(&JsValue::from_str("carousel timer not started:"), &err);
                None
            }
        }
    }

    fn cancel(&mut self, handle: Self::Handle) {
        if let Some(handle) = handle {
            handle.clear();
        }
    }
}

/// Carousel state held in a signal so every mutation re-renders the view.
#[derive(Clone, Copy, Debug)]
pub struct SignalStore(pub RwSignal<Carousel>);

impl CarouselStore for SignalStore {
    fn modify(&self, f: impl FnOnce(&mut Carousel)) {
        self.0.update(f);
    }

    fn observe<R>(&self, f: impl FnOnce(&Carousel) -> R) -> R {
        self.0.with(f)
    }
}

fn network_error(err: JsValue) -> ManifestError {
    ManifestError::Network(
        err.as_string()
            .unwrap_or_else(|| format!("{err:?}")),
    )
}

async fn request_manifest(path: &str, timeout: Duration) -> Result<(u16, String), ManifestError> {
    let window = web_sys::window().ok_or_else(|| ManifestError::Network("no window".into()))?;

    let controller = AbortController::new().map_err(network_error)?;
    let init = RequestInit::new();
    init.set_method("GET");
    init.set_cache(RequestCache::NoStore);
    init.set_signal(Some(&controller.signal()));

    let aborter = controller.clone();
    let on_timeout = Closure::once_into_js(move || aborter.abort());
    let timer = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            on_timeout.unchecked_ref(),
            timeout.as_millis() as i32,
        )
        .map_err(network_error)?;

    let fetched = JsFuture::from(window.fetch_with_str_and_init(path, &init)).await;
    window.clear_timeout_with_handle(timer);

    let response: Response = match fetched {
        Ok(value) => value.dyn_into().map_err(network_error)?,
        Err(_) if controller.signal().aborted() => return Err(ManifestError::Timeout),
        Err(err) => return Err(network_error(err)),
    };

    let status = response.status();
    if !response.ok() {
        return Ok((status, String::new()));
    }
    let body = JsFuture::from(response.text().map_err(network_error)?)
        .await
        .map_err(network_error)?;
    Ok((status, body.as_string().unwrap_or_default()))
}

/// One best-effort fetch of the color manifest. Never fails; problems become
/// [`ManifestOutcome::Rejected`].
pub async fn fetch_manifest(path: &str, timeout: Duration) -> ManifestOutcome {
    match request_manifest(path, timeout).await {
        Ok((status, body)) => evaluate_response(status, &body),
        Err(err) => ManifestOutcome::from(Err::<Vec<String>, _>(err)),
    }
}

/// Start playback and wait for the `play()` promise. Returns false when the
/// browser refused; the rejection is consumed here instead of surfacing as
/// an unhandled promise error.
pub async fn settle_playback(media: &HtmlMediaElement) -> bool {
    match media.play() {
        Ok(promise) => JsFuture::from(promise).await.is_ok(),
        Err(_) => false,
    }
}
