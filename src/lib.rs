pub mod apis;
pub mod arguments;
pub mod config;
pub mod logger;
pub mod paths;
pub mod screener;
pub mod utils;
