//! Constants used throughout genvy.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name, searched for walking up from the working
/// directory.
pub const CONFIG_FILE: &str = "genvy.json";

/// Secret registry file name, kept next to the configuration file.
pub const SECRETS_FILE: &str = ".genvy.secrets";
