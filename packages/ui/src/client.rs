//! Shared API client for all pages.
//!
//! Returns an [`api::ApiClient`] backed by the appropriate [`store::TokenStore`]:
//! - **Web** (WASM + `web` feature): browser local storage via `store::LocalStore`
//! - **Everything else**: in-memory via [`store::MemoryStore`]

use api::{ApiClient, ReqwestTransport};
use dioxus::prelude::*;
use store::DiaryConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

pub type DiaryClient = ApiClient<ReqwestTransport, PlatformStore>;

/// Create a client for the configured API origin.
pub fn make_client(config: &DiaryConfig) -> DiaryClient {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    let tokens = store::LocalStore;
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    let tokens = store::MemoryStore::new();

    ApiClient::new(config.api.base_url.clone(), ReqwestTransport::new(), tokens)
}

/// Get the shared API client.
pub fn use_client() -> DiaryClient {
    use_context::<DiaryClient>()
}

pub fn use_config() -> DiaryConfig {
    use_context::<DiaryConfig>()
}

/// Provides the configuration and a client built from it.
#[component]
pub fn ClientProvider(config: DiaryConfig, children: Element) -> Element {
    use_context_provider(|| {
        let client = make_client(&config);
        tracing::info!("Using diary API at {}", client.base_url());
        client
    });
    use_context_provider(|| config);

    rsx! {
        {children}
    }
}
