//! Color carousel: one product color at a time, auto-advancing.
//!
//! State lives in a signal behind [`SignalStore`]; timing and the manifest
//! guard live in the shared [`CarouselDriver`]. The fallback list shows
//! immediately and is swapped out only if `/colors/manifest.json` delivers
//! a usable list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use traphandle::carousel::{Carousel, CarouselDriver};
use traphandle::content::{CAROUSEL_INTERVAL, MANIFEST_PATH, TRAP_HANDLE};

use crate::browser::{BrowserScheduler, MANIFEST_TIMEOUT, SignalStore, fetch_manifest};

#[component]
pub fn ColorCarousel() -> impl IntoView {
    let state = RwSignal::new(Carousel::with_fallback(&TRAP_HANDLE));
    let driver = StoredValue::new_local(CarouselDriver::new(
        SignalStore(state),
        BrowserScheduler,
        CAROUSEL_INTERVAL,
    ));

    driver.update_value(|d| d.start());

    let liveness = driver.with_value(|d| d.liveness());
    spawn_local(async move {
        let outcome = fetch_manifest(MANIFEST_PATH, MANIFEST_TIMEOUT).await;
        if !liveness.is_alive() {
            return;
        }
        driver.try_update_value(|d| d.apply_manifest(outcome));
    });

    on_cleanup(move || {
        driver.try_update_value(|d| d.stop());
    });

    let previous = move |_| driver.with_value(|d| d.previous());
    let next = move |_| driver.with_value(|d| d.next());

    view! {
        <div class="carousel">
            <div class="carousel-stage">
                // Re-created on every change so the fade-in animation replays.
                {move || {
                    state
                        .with(|c| {
                            let alt = format!("{} Trap Handle", c.label());
                            view! { <img class="carousel-image" src=c.image_src() alt=alt /> }
                        })
                }}
                <div class="carousel-label">
                    <span class="carousel-label-dot"></span>
                    {move || state.with(Carousel::label)}
                </div>
                <div class="carousel-controls">
                    <button
                        type="button"
                        class="carousel-arrow"
                        aria-label="Previous color"
                        on:click=previous
                    >
                        "←"
                    </button>
                    <div class="carousel-dots">
                        {move || {
                            state
                                .with(|c| {
                                    c.indicators()
                                        .map(|dot| {
                                            let index = dot.index;
                                            view! {
                                                <button
                                                    type="button"
                                                    class="carousel-dot"
                                                    class:active=dot.active
                                                    aria-label=format!("Show {}", dot.file)
                                                    on:click=move |_| driver.with_value(|d| d.select(index))
                                                ></button>
                                            }
                                        })
                                        .collect_view()
                                })
                        }}
                    </div>
                    <button
                        type="button"
                        class="carousel-arrow"
                        aria-label="Next color"
                        on:click=next
                    >
                        "→"
                    </button>
                </div>
                <div class="carousel-glow"></div>
            </div>
        </div>
    }
}
