pub mod chat_message;
pub mod conversation;
pub mod generation_mode;
pub mod generation_request;
pub mod generation_result;
pub mod inline_image;
pub mod payment;
pub mod session;
pub mod user_profile;
