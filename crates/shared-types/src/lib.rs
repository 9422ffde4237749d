pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod notice;
pub mod requests;

pub use auth::*;
pub use config::*;
pub use error::*;
pub use models::*;
pub use notice::*;
pub use requests::*;
