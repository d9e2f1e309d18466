//! Session context provider

use dioxus::prelude::*;
use tracing::warn;

use crate::api::ApiClient;
use crate::state::SignOut;
use crate::types::Session;

/// Session state shared with the layout
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current signed-in user (if any)
    pub session: Signal<Option<Session>>,
    /// Whether the session is still loading
    pub loading: Signal<bool>,
}

impl AuthContext {
    /// Check if the user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    /// Refresh the session from the auth service
    pub async fn refresh(mut self, client: &ApiClient) {
        match client.fetch_session().await {
            Ok(session) => {
                self.session.set(session);
            }
            Err(e) => {
                warn!(error = %e, "Failed to load session");
                self.session.set(None);
            }
        }
        self.loading.set(false);
    }

    /// End the session and reload whatever the auth service reports next
    pub async fn sign_out(self, client: ApiClient) {
        if let Err(e) = client.sign_out().await {
            warn!(error = %e, "Sign-out request failed");
        }
        self.refresh(&client).await;
    }
}

/// Fire-and-forget sign-out handed to the navigation bar
#[derive(Clone)]
pub struct SessionSignOut {
    auth: AuthContext,
    client: ApiClient,
}

impl SignOut for SessionSignOut {
    fn sign_out(&self) {
        let auth = self.auth;
        let client = self.client.clone();
        spawn(async move {
            auth.sign_out(client).await;
        });
    }
}

/// Auth provider component that wraps the app
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_context::<ApiClient>();

    // Create session signals
    let session = use_signal(|| None::<Session>);
    let loading = use_signal(|| true);

    // Provide to children
    let auth = use_context_provider(|| AuthContext { session, loading });

    // Load initial session
    use_effect(move || {
        let client = client.clone();
        spawn(async move {
            auth.refresh(&client).await;
        });
    });

    children
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

/// Hook returning the sign-out collaborator for the current session
pub fn use_sign_out() -> SessionSignOut {
    SessionSignOut {
        auth: use_auth(),
        client: use_context::<ApiClient>(),
    }
}
