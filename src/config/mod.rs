//! Configuration system
//!
//! All tunables live in a single TOML file in the application data directory
//! (override with `--config <path>`). Every field has a default, so a partial
//! file or no file at all still yields a working configuration. The file is
//! generated on first run.

pub mod macros;
pub mod schemas;
pub mod utils;

pub use schemas::*;
pub use utils::*;
