//! Genvy - declarative .env file generation with reproducible secrets.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── generate      # The generation run
//! │   └── output        # Styled terminal output
//! └── core/             # Core library components
//!     ├── config        # genvy.json discovery and validation
//!     ├── range         # Range token parsing
//!     ├── expr          # Restricted arithmetic expressions
//!     ├── secret        # Weighted-range secret generation
//!     ├── registry      # Persisted secret registry
//!     ├── resolve       # Recursive value resolution
//!     ├── source        # Source block loading
//!     ├── env           # .env output writing
//!     └── processor     # Run orchestration
//! ```
//!
//! # Features
//!
//! - One `genvy.json` drives any number of `.env` outputs
//! - Literals, named values, per-environment branches, arithmetic
//!   expressions, and generated secrets
//! - Generated secrets persist in `.genvy.secrets`, so re-runs never
//!   rotate a value that is already in use

pub mod cli;
pub mod core;
pub mod error;
