pub mod calculations;
pub mod db;
pub mod models;

pub use db::repository::{RepositoryError, SolarRepository};
pub use models::*;
