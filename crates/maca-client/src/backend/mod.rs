pub(crate) mod account_backend;
pub(crate) mod error;
pub(crate) mod http_backend;
pub(crate) mod wire;

pub use account_backend::AccountBackend;
pub use error::{BackendError, Result as BackendResult};
pub use http_backend::HttpBackend;
pub use wire::{AuthResponse, Credentials, RegistrationRequest};
