//! Core library components.
//!
//! Value resolution, secret generation, expression evaluation, and the
//! file-format collaborators they depend on.

pub mod config;
pub mod constants;
pub mod env;
pub mod expr;
pub mod processor;
pub mod range;
pub mod registry;
pub mod resolve;
pub mod secret;
pub mod source;
