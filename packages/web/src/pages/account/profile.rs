//! Account pages backed by the external auth service

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::LoadingSpinner;
use crate::pages::public::ComingSoon;
use crate::routes::Route;

/// Signed-in visitor's profile
#[component]
pub fn Profile() -> Element {
    let auth = use_auth();

    if (auth.loading)() {
        return rsx! { LoadingSpinner {} };
    }

    let session = auth.session.read().clone();

    match session {
        Some(session) => rsx! {
            div {
                class: "flex flex-col items-center gap-4 py-16",
                img {
                    src: "{session.avatar()}",
                    alt: "User Avatar",
                    width: "96",
                    height: "96",
                    class: "rounded-full"
                }
                h1 { class: "text-2xl font-semibold text-gray-800", "{session.name}" }
            }
        },
        None => rsx! {
            div {
                class: "flex flex-col items-center gap-4 py-24 text-gray-600",
                p { "You are not signed in." }
                Link {
                    to: Route::SignIn {},
                    class: "text-blue-600 hover:underline",
                    "Sign In"
                }
            }
        },
    }
}

/// Sign-in is handled by the auth service; this page only holds the route
#[component]
pub fn SignIn() -> Element {
    rsx! {
        ComingSoon { title: "Sign In" }
    }
}

#[component]
pub fn Register() -> Element {
    rsx! {
        ComingSoon { title: "Sign Up" }
    }
}
