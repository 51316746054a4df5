//! Token screener: discovery pipeline, shared state and the polling loop

pub mod monitor;
pub mod pipeline;
pub mod prefs;
pub mod queries;
pub mod state;
pub mod token;

pub use pipeline::fetch_trending_tokens;
pub use token::Token;
