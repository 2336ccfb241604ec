pub mod handlers;
pub mod mapper;
pub mod models;
pub mod repository;
pub mod router;
pub mod services;

pub use models::*;
pub use services::*;
