mod client;
mod errors;
mod types;

pub use client::AdminApiClient;
pub use errors::ApiError;
pub use types::{LoginRequest, LoginResponse};
