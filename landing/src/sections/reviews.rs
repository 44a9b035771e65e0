use leptos::prelude::*;
use traphandle::content::{Rating, Review, TRAP_HANDLE};

#[component]
pub fn Reviews() -> impl IntoView {
    let site = TRAP_HANDLE;
    view! {
        <section id="reviews" class="section container">
            <div class="panel">
                <div class="panel-body">
                    <div class="section-header">
                        <div class="badge">"Rider feedback"</div>
                        <h2 class="section-title">{site.reviews_headline}</h2>
                        <p class="section-description">{site.reviews_copy}</p>
                    </div>
                    <div class="reviews-grid">
                        {site
                            .visible_reviews()
                            .iter()
                            .copied()
                            .map(|review| view! { <ReviewCard review=review /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-title">
                <Stars rating=review.rating />
            </div>
            <p class="review-quote">"“" {review.quote} "”"</p>
            <div class="review-byline">{review.byline()}</div>
            {review.meta.map(|meta| view! { <div class="review-meta">{meta}</div> })}
        </div>
    }
}

#[component]
fn Stars(rating: Rating) -> impl IntoView {
    view! {
        <span class="stars" aria-label=rating.aria_label()>
            {rating
                .stars()
                .into_iter()
                .map(|filled| {
                    let class = if filled { "star" } else { "star star-empty" };
                    view! { <span class=class>"★"</span> }
                })
                .collect_view()}
        </span>
    }
}
