//! In-process HTTP stub for exercising the API client.
//!
//! Each test binds its own axum router to an ephemeral port on localhost,
//! so tests can run in parallel without sharing state.

use anyhow::{Context, Result};
use axum::Router;
use clinic_web::api::ApiClient;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub struct StubServer {
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl StubServer {
    /// Serve `router` until the stub is dropped
    pub async fn start(router: Router) -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("Failed to bind stub server")?;
        let addr = listener.local_addr().context("Stub server has no address")?;

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self {
            base_url: format!("http://{addr}"),
            handle,
        })
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.base_url.clone())
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A base URL nothing is listening on
pub async fn unreachable_base_url() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}
