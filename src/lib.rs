pub mod analytics;
pub mod config;
pub mod error;
pub mod health;
pub mod http;
pub mod inspect;
pub mod models;
pub mod notion;
pub mod report;
pub mod social;
pub mod weather;

pub use error::{FetchError, Result};
pub use report::Report;
