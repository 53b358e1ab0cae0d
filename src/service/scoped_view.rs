// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin-scoped configuration view.
//!
//! A `ScopedConfigView` binds a shared [`ConfigStore`] to one plugin's
//! namespace, `pluginsConfig['<id>'].`, and classifies the values it reads
//! into [`CoercedValue`]s.

use crate::domain::{CoercedValue, ConfigKey, PluginConfig};
use crate::ports::ConfigStore;
use crate::service::SilenceGuard;

/// Name of the table that holds every plugin's configuration.
pub const PLUGINS_TABLE: &str = "pluginsConfig";

/// A read-only view of one plugin's configuration.
///
/// The view borrows the store; the store must outlive every view built over
/// it. The namespace prefix is fixed at construction.
///
/// # Examples
///
/// ```rust
/// use scopedcfg::adapters::YamlConfigStore;
/// use scopedcfg::domain::CoercedValue;
/// use scopedcfg::service::ScopedConfigView;
///
/// let store = YamlConfigStore::from_yaml_str(r#"
/// pluginsConfig:
///   MyPlugin:
///     verbose: true
///     limit: 42
///     names: ["a", "b"]
/// "#).unwrap();
///
/// let view = ScopedConfigView::new(&store, "MyPlugin");
/// assert_eq!(view.get("verbose"), CoercedValue::Bool(true));
/// assert_eq!(view.get("limit"), CoercedValue::Int(42));
/// assert_eq!(view.get("missing"), CoercedValue::Absent);
/// assert_eq!(view.keys("pluginsConfig"), Some(vec!["MyPlugin".to_string()]));
/// ```
#[derive(Debug)]
pub struct ScopedConfigView<'a, S: ConfigStore + ?Sized> {
    store: &'a S,
    prefix: String,
}

impl<'a, S: ConfigStore + ?Sized> ScopedConfigView<'a, S> {
    /// Creates a view over `store` for the plugin identified by `namespace_id`.
    ///
    /// The identifier is used verbatim and is expected to be a valid plugin
    /// configuration key.
    pub fn new(store: &'a S, namespace_id: &str) -> Self {
        Self {
            store,
            prefix: format!("{}['{}'].", PLUGINS_TABLE, namespace_id),
        }
    }

    /// Returns the namespace prefix, e.g. `pluginsConfig['MyPlugin'].`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the full store key for `name` in this view's namespace.
    pub fn scoped_key(&self, name: &str) -> ConfigKey {
        ConfigKey::scoped(&self.prefix, name)
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &'a S {
        self.store
    }

    /// Reads `name` from this view's namespace.
    ///
    /// The value is probed as boolean, integer, float, string, string list
    /// and integer list, in that order; the first lookup that succeeds wins.
    /// If none succeeds the result is `CoercedValue::Absent`. Store
    /// diagnostics are suppressed while probing and restored afterwards.
    pub fn get(&self, name: &str) -> CoercedValue {
        let key = self.scoped_key(name);
        let _silence = SilenceGuard::new(self.store);

        let value = probe(self.store, &key);
        if value.is_absent() {
            tracing::debug!("No value for '{}' in store '{}'", key, self.store.name());
        } else {
            tracing::trace!("'{}' read as {}", key, value.type_name());
        }
        value
    }

    /// Returns the string keys of the table at the full path `table`.
    ///
    /// `table` is not prefixed with the view's namespace. Returns `None` when
    /// it does not resolve to a table. Diagnostics are left untouched.
    pub fn keys(&self, table: &str) -> Option<Vec<String>> {
        self.store.lookup_table_keys(&ConfigKey::from(table)).ok()
    }
}

/// Runs the ordered type probe against `key`.
///
/// Scalars come before lists so a scalar is never reported as a one-element
/// list, and integers come before floats so `42` stays an integer.
fn probe<S: ConfigStore + ?Sized>(store: &S, key: &ConfigKey) -> CoercedValue {
    store
        .lookup_bool(key)
        .map(CoercedValue::Bool)
        .or_else(|_| store.lookup_int(key).map(CoercedValue::Int))
        .or_else(|_| store.lookup_float(key).map(CoercedValue::Float))
        .or_else(|_| store.lookup_string(key).map(CoercedValue::String))
        .or_else(|_| store.lookup_string_list(key).map(CoercedValue::StringList))
        .or_else(|_| store.lookup_int_list(key).map(CoercedValue::IntList))
        .unwrap_or(CoercedValue::Absent)
}

impl<S: ConfigStore + ?Sized> PluginConfig for ScopedConfigView<'_, S> {
    fn get(&self, name: &str) -> CoercedValue {
        ScopedConfigView::get(self, name)
    }

    fn keys(&self, table: &str) -> Option<Vec<String>> {
        ScopedConfigView::keys(self, table)
    }
}
