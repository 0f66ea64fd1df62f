//! Scope-tracking configuration store for git-style configuration
//!
//! A [`ConfigStore`] maps normalized `section.key` names to every value seen
//! for them, each tagged with the [`Scope`] it came from. Scalar reads take
//! the last value, so merging sources in system, global, local order gives
//! git's precedence while keeping every value visible.

pub mod error;
pub mod key;
pub mod parser;
pub mod scope;
pub mod store;
pub mod value;

pub use error::{Error, Result, SyntaxErrorKind};
pub use key::to_section_key;
pub use parser::{Entry, Parsed, parse};
pub use scope::Scope;
pub use store::ConfigStore;
pub use value::{ConfigValue, parse_bool};
