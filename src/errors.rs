//! Error Types
//!
//! This module defines the error types used throughout the generator.
//!
//! # Overview
//!
//! Shader synthesis is pure text formatting, so very little can fail:
//! - A malformed shading-language version string (recovered internally,
//!   the profile falls back to a default version and logs the error)
//! - A caller-supplied stage configuration the dialect layer cannot express
//! - Host capability configuration that does not deserialize
//!
//! # Usage
//!
//! All fallible APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, ShaderGenError>`.
//!
//! ```rust,ignore
//! use shadergen::errors::{ShaderGenError, Result};
//!
//! fn build() -> Result<String> {
//!     // Operations that may fail return Result
//!     Ok(String::new())
//! }
//! ```

use thiserror::Error;

/// The main error type for shader generation.
#[derive(Error, Debug)]
pub enum ShaderGenError {
    // ========================================================================
    // Capability Errors
    // ========================================================================
    /// The shading-language version reported by the driver could not be parsed.
    ///
    /// Never surfaces from profile resolution, which falls back to a default
    /// version instead.
    #[error("Invalid GLSL version string: '{raw}'")]
    InvalidVersionString {
        /// The raw string as reported by the host
        raw: String,
    },

    // ========================================================================
    // Caller Contract Errors
    // ========================================================================
    /// The requested stage interface cannot be represented by the binding
    /// scheme of the selected dialect.
    ///
    /// This is a programming error in the caller, not a runtime condition.
    #[error("Invalid shader configuration: {0}")]
    InvalidConfiguration(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// JSON parsing error while loading host capabilities.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, ShaderGenError>`.
pub type Result<T> = std::result::Result<T, ShaderGenError>;
