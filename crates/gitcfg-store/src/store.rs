//! The layered configuration store

use std::collections::HashMap;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::value::parse_bool;
use crate::{ConfigValue, Error, Result, Scope, to_section_key};

type Keys = HashMap<String, Vec<ConfigValue>>;

/// Configuration values keyed by normalized section and key.
///
/// Section and key names are always stored lower-cased. Each key holds
/// every value seen for it in encounter order; the last one wins for scalar
/// reads. A key that exists always has at least one value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    sections: HashMap<String, Keys>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no key has been set.
    pub fn is_empty(&self) -> bool {
        self.sections.values().all(|keys| keys.is_empty())
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.sections.values().map(|keys| keys.len()).sum()
    }

    /// Drop every value.
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// Append `value` to `key`.
    ///
    /// Keys without both a section and a key part (`"name"`, `"core."`) are
    /// ignored; validating user supplied names is up to the caller.
    pub fn add(&mut self, key: &str, value: impl Into<String>) {
        let (section, name) = to_section_key(key);
        if section.is_empty() || name.is_empty() {
            tracing::trace!(key, "Ignoring config key without section or name");
            return;
        }
        self.insert(section, name, ConfigValue::new(Scope::NONE, value));
    }

    /// Append a value under an already normalized section and key, as
    /// produced by the parser. No normalization or validation is applied.
    pub fn insert(&mut self, section: String, key: String, value: ConfigValue) {
        self.sections
            .entry(section)
            .or_default()
            .entry(key)
            .or_default()
            .push(value);
    }

    /// The effective (last) value of `key`, or `""` when unset.
    ///
    /// An unset key and a key set to the empty string look the same here;
    /// use [`ConfigStore::get_all`] to tell them apart.
    pub fn get(&self, key: &str) -> &str {
        self.get_raw(key)
            .and_then(|values| values.last())
            .map(ConfigValue::value)
            .unwrap_or("")
    }

    /// Every value of `key` in append order, or `None` if it was never set.
    pub fn get_all(&self, key: &str) -> Option<Vec<&str>> {
        self.get_raw(key)
            .map(|values| values.iter().map(ConfigValue::value).collect())
    }

    /// Every value of `key` with its scope, or `None` if it was never set.
    pub fn get_raw(&self, key: &str) -> Option<&[ConfigValue]> {
        let (section, name) = to_section_key(key);
        self.sections
            .get(&section)?
            .get(&name)
            .map(Vec::as_slice)
    }

    /// Mutable access to the values of `key` for programmatic overrides.
    pub fn get_raw_mut(&mut self, key: &str) -> Option<&mut [ConfigValue]> {
        let (section, name) = to_section_key(key);
        self.sections
            .get_mut(&section)?
            .get_mut(&name)
            .map(Vec::as_mut_slice)
    }

    /// Values of `key` whose scope intersects `scope`.
    ///
    /// [`Scope::ALL`] returns every value, including ones that were never
    /// merged from a source. Returns `None` when nothing matches.
    pub fn get_in_scope(&self, key: &str, scope: Scope) -> Option<Vec<&ConfigValue>> {
        let matched: Vec<_> = self
            .get_raw(key)?
            .iter()
            .filter(|value| scope == Scope::ALL || value.scope().intersects(scope))
            .collect();
        (!matched.is_empty()).then_some(matched)
    }

    /// Boolean value of `key`.
    ///
    /// `yes`, `true`, `on` and `no`, `false`, `off` are accepted in any case.
    /// Returns `default` when the effective value is empty.
    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        let value = self.get(key);
        if value.is_empty() {
            return Ok(default);
        }

        parse_bool(value).ok_or_else(|| Error::NotBoolValue {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    /// Integer value of `key`, or `default` when the effective value is empty.
    pub fn get_int(&self, key: &str, default: i32) -> Result<i32> {
        self.get_parsed(key, default)
    }

    /// 64-bit integer value of `key`, or `default` when the effective value is empty.
    pub fn get_int64(&self, key: &str, default: i64) -> Result<i64> {
        self.get_parsed(key, default)
    }

    /// Unsigned 64-bit integer value of `key`, or `default` when the effective value is empty.
    pub fn get_uint64(&self, key: &str, default: u64) -> Result<u64> {
        self.get_parsed(key, default)
    }

    fn get_parsed<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr<Err = ParseIntError>,
    {
        let value = self.get(key);
        if value.is_empty() {
            return Ok(default);
        }

        value.parse().map_err(|source| Error::InvalidInteger {
            key: key.to_string(),
            value: value.to_string(),
            source,
        })
    }

    /// All `section.key` names, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .sections
            .iter()
            .flat_map(|(section, keys)| keys.keys().map(move |key| format!("{section}.{key}")))
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }

    /// Every key with its values, sorted by name.
    pub fn entries(&self) -> Vec<(String, &[ConfigValue])> {
        let mut entries: Vec<_> = self
            .sections
            .iter()
            .flat_map(|(section, keys)| {
                keys.iter()
                    .map(move |(key, values)| (format!("{section}.{key}"), values.as_slice()))
            })
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Append every value of `other`, re-tagged with `scope`.
    ///
    /// The include modifier of incoming values is kept; their base scope is
    /// replaced. Merging system, global and local stores in that order makes
    /// later sources win for scalar reads.
    pub fn merge(&mut self, other: &ConfigStore, scope: Scope) -> &mut Self {
        for (section, keys) in &other.sections {
            for (key, values) in keys {
                if values.is_empty() {
                    continue;
                }
                let target = self
                    .sections
                    .entry(section.clone())
                    .or_default()
                    .entry(key.clone())
                    .or_default();
                target.extend(values.iter().map(|value| {
                    ConfigValue::new((value.scope() & Scope::INCLUDE) | scope, value.value())
                }));
            }
        }
        self
    }
}
