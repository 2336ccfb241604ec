pub mod handlers;
pub mod router;
pub mod models;
pub mod mapper;
pub mod repository;
pub mod services;

pub use models::*;
pub use services::*;
