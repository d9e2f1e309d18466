//! Shared page chrome

use dioxus::prelude::*;

use super::{Footer, Navbar};
use crate::auth::{use_auth, use_sign_out};
use crate::routes::Route;
use crate::state::SignOut;

/// Navbar, routed page, footer
#[component]
pub fn SiteLayout() -> Element {
    let auth = use_auth();
    let signer = use_sign_out();
    let session = auth.session.read().clone();

    rsx! {
        div {
            class: "min-h-screen flex flex-col bg-white",
            Navbar {
                session,
                on_sign_out: move |_| signer.sign_out()
            }

            // Offset for the fixed navbar
            main {
                class: "flex-1 pt-24 container mx-auto px-4 md:px-8 max-w-screen-xl",
                Outlet::<Route> {}
            }

            Footer {}
        }
    }
}
