//! Call-to-action anchor.

#[cfg(test)]
#[path = "cta_link_test.rs"]
mod cta_link_test;

use leptos::prelude::*;

use crate::pages::landing::NavLink;

/// Renders a single navigation affordance as a styled anchor.
///
/// `rel="external"` keeps the in-app router from claiming the click, so the
/// browser performs a full navigation to the account views.
#[component]
pub fn CtaLink(link: NavLink) -> impl IntoView {
    view! {
        <a href=link.href class=link.style.class() rel="external">
            {link.label}
        </a>
    }
}
