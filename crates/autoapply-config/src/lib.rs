//! # AutoApply Config
//!
//! Configuration management for the AutoApply service.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{
    ConfigValidator, ValidationError, ValidationResult, ValidationWarning, MAX_TOKEN_TTL_SECONDS,
};
