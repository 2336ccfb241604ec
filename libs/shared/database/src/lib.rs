pub mod database;
pub mod error;
pub mod state;

pub use database::{Database, WriteTransaction};
pub use error::StoreError;
pub use state::AppState;
