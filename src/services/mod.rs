pub mod bills_loader;
pub mod store;

#[cfg(target_arch = "wasm32")]
pub mod api_client;

pub use bills_loader::*;
pub use store::*;

#[cfg(target_arch = "wasm32")]
pub use api_client::ApiClient;
