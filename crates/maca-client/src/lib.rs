//! HTTP clients for the account backend and the generative provider.
//!
//! Both sit behind traits so the studio can run against in-memory doubles.

pub mod backend;
pub mod provider;

#[cfg(test)]
mod tests;

pub use backend::{
    AccountBackend, AuthResponse, BackendError, BackendResult, Credentials, HttpBackend,
    RegistrationRequest,
};
pub use provider::{
    ClassificationRequest, GeminiProvider, GeneratedImage, GenerativeProvider, ProviderError,
    ProviderResult, TextRequest, VideoJob, VideoJobStatus,
};
