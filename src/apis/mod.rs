//! External API clients
//!
//! Each client owns its rate limiters and returns `Result<T, String>`; the
//! pipeline decides what a failure means for the cycle.

pub mod client;
pub mod dexscreener;
pub mod gemini;
