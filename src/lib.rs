pub mod catalog;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod seed;
pub mod store;

pub use error::{AppError, Result};
