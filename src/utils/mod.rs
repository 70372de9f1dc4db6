//! Shared utilities: code generation and URL validation.

pub mod code_generator;
pub mod url_validator;

pub use code_generator::{CodeGenerator, CodePolicy};
pub use url_validator::{MAX_TARGET_URL_LENGTH, validate_target_url};
