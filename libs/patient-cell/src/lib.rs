pub mod models;
pub mod mapper;
pub mod repository;
pub mod handlers;
pub mod router;
pub mod services;

pub use models::*;
pub use router::*;
pub use services::PatientService;
