//! Command implementations.

pub mod config;
pub mod count;
pub mod extract;

pub use self::config::execute_config;
pub use self::count::execute_count;
pub use self::extract::{execute_extract, load_bundle, read_corpus};
