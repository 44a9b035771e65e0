use leptos::prelude::*;
use traphandle::content::ExternalLink;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
}

/// Outbound pill button; always opens a new browsing context.
#[component]
pub fn LinkButton(
    #[prop(into)] href: String,
    label: &'static str,
    #[prop(optional)] variant: ButtonVariant,
) -> impl IntoView {
    let class = match variant {
        ButtonVariant::Primary => "btn btn-primary",
        ButtonVariant::Ghost => "btn btn-ghost",
    };
    view! {
        <a href=href target="_blank" rel="noreferrer noopener" class=class>
            {label}
        </a>
    }
}

/// [`LinkButton`] for one of the site's fixed outbound links.
#[component]
pub fn ExternalButton(link: ExternalLink, #[prop(optional)] variant: ButtonVariant) -> impl IntoView {
    view! { <LinkButton href=link.url label=link.label variant=variant /> }
}
