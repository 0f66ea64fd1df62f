//! The list command

use std::collections::BTreeMap;

use gitcfg_core::{ConfigResolver, ConfigStore, ConfigValue, Scope};
use gitcfg_fs::Environment;

use crate::error::Result;

/// Run the list command
pub fn run_list<E: Environment>(
    resolver: &ConfigResolver<E>,
    show_scope: bool,
    json: bool,
    filter: Scope,
) -> Result<()> {
    let resolved = resolver.resolve()?;

    if json {
        let output = list_json(&resolved.store, filter);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for line in list_lines(&resolved.store, filter, show_scope) {
        println!("{line}");
    }
    Ok(())
}

/// `key=value` lines sorted by key, each key's values lowest precedence first.
pub(crate) fn list_lines(store: &ConfigStore, filter: Scope, show_scope: bool) -> Vec<String> {
    let mut lines = Vec::new();
    for key in store.keys() {
        for value in store.get_in_scope(&key, filter).unwrap_or_default() {
            if show_scope {
                lines.push(format!("{}\t{key}={}", value.scope(), value.value()));
            } else {
                lines.push(format!("{key}={}", value.value()));
            }
        }
    }
    lines
}

/// Map of key to its values with their scopes.
pub(crate) fn list_json(store: &ConfigStore, filter: Scope) -> BTreeMap<String, Vec<&ConfigValue>> {
    store
        .keys()
        .into_iter()
        .filter_map(|key| {
            let values = store.get_in_scope(&key, filter)?;
            Some((key, values))
        })
        .collect()
}
