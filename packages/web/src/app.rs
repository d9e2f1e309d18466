//! Root application component

use dioxus::prelude::*;
use tracing::error;

use crate::api::ApiClient;
use crate::auth::AuthProvider;
use crate::catalog::Catalog;
use crate::components::ToastProvider;
use crate::config::config;
use crate::routes::Route;

/// Root application component
#[component]
pub fn App() -> Element {
    // Shared collaborators for every page
    use_context_provider(|| ApiClient::new(config().api_base_url.clone()));
    use_context_provider(|| {
        Catalog::seed().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load the doctor roster");
            Catalog::default()
        })
    });

    rsx! {
        // Global styles
        document::Stylesheet { href: "/assets/tailwind.css" }

        ToastProvider {
            // Auth context provider wraps the entire app
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}
