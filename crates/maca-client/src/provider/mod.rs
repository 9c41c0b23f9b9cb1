pub(crate) mod error;
pub(crate) mod gemini;
pub(crate) mod generative_provider;

pub use error::{ProviderError, Result as ProviderResult};
pub use gemini::GeminiProvider;
pub use generative_provider::{
    ClassificationRequest, GeneratedImage, GenerativeProvider, TextRequest, VideoJob,
    VideoJobStatus,
};
