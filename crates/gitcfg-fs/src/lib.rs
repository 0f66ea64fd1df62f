//! Environment and path primitives for gitcfg
//!
//! Provides the injected [`Environment`] used by discovery and the
//! home/tilde/absolute path helpers built on top of it.

pub mod env;
pub mod error;
pub mod path;

pub use env::{Environment, MapEnv, ProcessEnv, vars};
pub use error::{Error, Result};
pub use path::{
    absolute, absolute_join, clean, expand_home, resolve_home, resolve_xdg_config_home,
};
