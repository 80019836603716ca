pub mod config;
pub mod db;
pub mod engine;
pub mod error;
pub mod model;
pub mod report;
pub mod roster;
pub mod shell;
pub mod store;
pub mod sync;

pub use config::Config;
pub use engine::Outcome;
pub use error::{AppError, Result};
pub use store::Store;
