//! Single-key lookups: `get` and `get-all`

use gitcfg_core::{ConfigResolver, ConfigStore, ConfigValue};
use gitcfg_fs::Environment;
use gitcfg_store::to_section_key;

use crate::cli::ValueType;
use crate::error::{CliError, Result};

/// Run the get command
pub fn run_get<E: Environment>(
    resolver: &ConfigResolver<E>,
    key: &str,
    value_type: Option<ValueType>,
) -> Result<()> {
    check_key(key)?;
    let resolved = resolver.resolve()?;
    println!("{}", typed_value(&resolved.store, key, value_type)?);
    Ok(())
}

/// Run the get-all command
pub fn run_get_all<E: Environment>(
    resolver: &ConfigResolver<E>,
    key: &str,
    show_scope: bool,
) -> Result<()> {
    check_key(key)?;
    let resolved = resolver.resolve()?;
    let values = resolved.store.get_raw(key).ok_or_else(|| not_found(key))?;
    for value in values {
        println!("{}", format_value(value, show_scope));
    }
    Ok(())
}

/// Render the effective value of `key`, converted through the typed
/// accessor for `value_type`.
pub(crate) fn typed_value(
    store: &ConfigStore,
    key: &str,
    value_type: Option<ValueType>,
) -> Result<String> {
    if store.get_raw(key).is_none() {
        return Err(not_found(key));
    }

    Ok(match value_type {
        None => store.get(key).to_string(),
        Some(ValueType::Bool) => store.get_bool(key, false)?.to_string(),
        Some(ValueType::Int) => store.get_int64(key, 0)?.to_string(),
    })
}

pub(crate) fn format_value(value: &ConfigValue, show_scope: bool) -> String {
    if show_scope {
        format!("{}\t{}", value.scope(), value.value())
    } else {
        value.value().to_string()
    }
}

/// Reject names that can never address a value, like git does.
fn check_key(key: &str) -> Result<()> {
    let (section, name) = to_section_key(key);
    if section.is_empty() || name.is_empty() {
        return Err(CliError::user(format!("Key does not contain a section: {key}")));
    }
    Ok(())
}

fn not_found(key: &str) -> CliError {
    CliError::KeyNotFound {
        key: key.to_string(),
    }
}
