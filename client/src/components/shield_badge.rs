//! Circular badge holding the shield-check mark shown beside the product name.

use leptos::prelude::*;

const SHIELD_CHECK_PATH: &str = "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z";

#[component]
pub fn ShieldBadge() -> impl IntoView {
    view! {
        <div class="bg-white bg-opacity-20 rounded-full p-4 inline-block mb-6">
            <svg class="h-16 w-16 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=SHIELD_CHECK_PATH/>
            </svg>
        </div>
    }
}
