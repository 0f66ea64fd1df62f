//! Command implementations for gitcfg-cli

pub mod get;
pub mod list;
pub mod locate;

pub use get::{run_get, run_get_all};
pub use list::run_list;
pub use locate::{run_locate, run_sources};
