//! Public landing page.
//!
//! DESIGN
//! ======
//! The page is a pure view with no inputs. Everything it shows is declared
//! as constants in this module, and the two call-to-action anchors come from
//! `NAV_LINKS` so the rendered destinations and their order are fixed in one
//! place. Navigation itself is a plain `href`; the router owning `/signup`
//! and `/login` handles the transition.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::components::cta_link::CtaLink;
use crate::components::shield_badge::ShieldBadge;

pub const PRODUCT_NAME: &str = "AuthentiScan";
pub const TAGLINE: &str = "AI Image Authenticity Detector";

pub const SIGNUP_PATH: &str = "/signup";
pub const LOGIN_PATH: &str = "/login";

const EYEBROW: &str = "Combat Misinformation";
const HEADLINE: &str = "Distinguish Between AI-Generated and Real Images";
const INTRO: &str = "In an era where artificial intelligence can create incredibly realistic images, \
    it's becoming increasingly difficult to distinguish between what's real and what's generated. \
    AuthentiScan uses advanced deep learning techniques to analyze images and determine their authenticity.";
const MODEL_BLURB: &str = "Our cutting-edge DenseNet-121 model, enhanced with transfer learning, \
    provides highly accurate detection capabilities to help you verify the origin of any image.";
const FOOTER: &str = "Powered by Deep Learning • Built with TensorFlow & Leptos";

/// Visual weight of a call-to-action anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaStyle {
    /// Filled indigo button.
    Primary,
    /// Outlined white button.
    Secondary,
}

impl CtaStyle {
    /// Tailwind classes for this style.
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => {
                "px-6 py-3 border border-transparent text-base font-medium rounded-md text-white \
                 bg-indigo-600 hover:bg-indigo-700 transition duration-300 text-center"
            }
            Self::Secondary => {
                "px-6 py-3 border border-gray-300 text-base font-medium rounded-md text-indigo-700 \
                 bg-white hover:bg-gray-50 transition duration-300 text-center"
            }
        }
    }
}

/// A navigation affordance: label, route target, and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub style: CtaStyle,
}

/// Call-to-action anchors, in render order.
pub const NAV_LINKS: [NavLink; 2] = [
    NavLink { label: "Get Started", href: SIGNUP_PATH, style: CtaStyle::Primary },
    NavLink { label: "Sign In", href: LOGIN_PATH, style: CtaStyle::Secondary },
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let actions = NAV_LINKS.iter().map(|link| view! { <CtaLink link=*link/> }).collect_view();

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 flex flex-col items-center justify-center p-4">
            <div class="max-w-4xl w-full bg-white rounded-2xl shadow-xl overflow-hidden">
                <div class="md:flex">
                    // Brand panel
                    <div class="md:flex-shrink-0 md:w-1/2 bg-gradient-to-r from-blue-600 to-indigo-700 flex items-center justify-center p-12">
                        <div class="text-center">
                            <h1 class="text-4xl font-extrabold text-white mb-4">{PRODUCT_NAME}</h1>
                            <ShieldBadge/>
                            <p class="text-xl text-blue-100">{TAGLINE}</p>
                        </div>
                    </div>

                    // Pitch
                    <div class="p-8 md:w-1/2">
                        <div class="uppercase tracking-wide text-sm text-indigo-500 font-semibold">{EYEBROW}</div>
                        <h2 class="mt-2 text-3xl leading-8 font-extrabold tracking-tight text-gray-900 sm:text-4xl">
                            {HEADLINE}
                        </h2>
                        <p class="mt-4 text-lg text-gray-600">{INTRO}</p>
                        <p class="mt-4 text-lg text-gray-600">{MODEL_BLURB}</p>
                        <div class="mt-8 flex flex-col sm:flex-row gap-4">{actions}</div>
                    </div>
                </div>
            </div>
            <div class="mt-8 text-center text-gray-600">
                <p>{FOOTER}</p>
            </div>
        </div>
    }
}
