use leptos::prelude::*;
use leptos::task::spawn_local;
use traphandle::content::BackgroundVideo;

use crate::browser::settle_playback;

/// Muted, looping background clip.
///
/// Safari/iOS sometimes refuses autoplay even with the attributes set, so
/// once mounted the element gets its flags forced and `play()` is called.
#[component]
pub fn LoopingVideo(video: BackgroundVideo, class: &'static str) -> impl IntoView {
    let video_ref = NodeRef::<leptos::html::Video>::new();

    Effect::new(move || {
        if let Some(el) = video_ref.get() {
            el.set_muted(true);
            el.set_loop(true);
            let _ = el.set_attribute("playsinline", "");
            let media: web_sys::HtmlMediaElement = el.into();
            spawn_local(async move {
                // Refusal means a user gesture is required; nothing to do.
                settle_playback(&media).await;
            });
        }
    });

    view! {
        <video node_ref=video_ref class=class autoplay="" muted="" playsinline="" preload="auto">
            <source src=video.mp4 type="video/mp4" />
            <source src=video.mov type="video/quicktime" />
        </video>
    }
}
