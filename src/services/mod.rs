pub mod api_client;
pub mod auth_service;
pub mod plan_service;

pub use api_client::{ApiClient, ApiError};
pub use auth_service::*;
pub use plan_service::*;
