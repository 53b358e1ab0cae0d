// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration store trait definition.
//!
//! This module defines the `ConfigStore` trait, the port through which scoped
//! views read configuration. A store owns the parsed configuration, answers
//! typed lookups, and emits diagnostics for failed lookups unless they have
//! been suppressed.

use crate::domain::{ConfigKey, Result};

/// A typed, read-only configuration store.
///
/// Every lookup either produces a value of the requested type or an error
/// describing why it could not. A failed lookup is expected to report a
/// diagnostic (for example a `tracing::warn!`) unless
/// [`diagnostics_suppressed`](ConfigStore::diagnostics_suppressed) is true.
///
/// Callers that want the "value or default" form write
/// `store.lookup_int(&key).unwrap_or(default)`.
///
/// # Threading
///
/// The suppression flag is toggled through `&self`, so implementations use
/// interior mutability. The trait does not require `Sync`: a save, toggle and
/// restore of the flag is not atomic, and a store shared between threads must
/// be serialized by the caller.
///
/// # Examples
///
/// ```rust
/// use scopedcfg::domain::{ConfigError, ConfigKey, Result};
/// use scopedcfg::ports::ConfigStore;
/// use std::cell::Cell;
///
/// struct Empty {
///     silent: Cell<bool>,
/// }
///
/// impl Empty {
///     fn missing<T>(&self, key: &ConfigKey) -> Result<T> {
///         Err(ConfigError::ConfigKeyNotFound { key: key.to_string() })
///     }
/// }
///
/// impl ConfigStore for Empty {
///     fn name(&self) -> &str { "empty" }
///     fn lookup_bool(&self, key: &ConfigKey) -> Result<bool> { self.missing(key) }
///     fn lookup_int(&self, key: &ConfigKey) -> Result<i64> { self.missing(key) }
///     fn lookup_float(&self, key: &ConfigKey) -> Result<f64> { self.missing(key) }
///     fn lookup_string(&self, key: &ConfigKey) -> Result<String> { self.missing(key) }
///     fn lookup_string_list(&self, key: &ConfigKey) -> Result<Vec<String>> { self.missing(key) }
///     fn lookup_int_list(&self, key: &ConfigKey) -> Result<Vec<i64>> { self.missing(key) }
///     fn lookup_table_keys(&self, table: &ConfigKey) -> Result<Vec<String>> { self.missing(table) }
///     fn diagnostics_suppressed(&self) -> bool { self.silent.get() }
///     fn set_diagnostics_suppressed(&self, suppressed: bool) { self.silent.set(suppressed) }
/// }
///
/// let store = Empty { silent: Cell::new(false) };
/// assert_eq!(store.lookup_int(&ConfigKey::from("a.b")).unwrap_or(7), 7);
/// ```
pub trait ConfigStore {
    /// Returns the name of this store, used in diagnostics.
    fn name(&self) -> &str;

    /// Looks up a boolean.
    fn lookup_bool(&self, key: &ConfigKey) -> Result<bool>;

    /// Looks up a 64-bit signed integer.
    fn lookup_int(&self, key: &ConfigKey) -> Result<i64>;

    /// Looks up a double-precision float.
    fn lookup_float(&self, key: &ConfigKey) -> Result<f64>;

    /// Looks up a string.
    fn lookup_string(&self, key: &ConfigKey) -> Result<String>;

    /// Looks up a list whose every element is a string.
    fn lookup_string_list(&self, key: &ConfigKey) -> Result<Vec<String>>;

    /// Looks up a list whose every element is an integer.
    fn lookup_int_list(&self, key: &ConfigKey) -> Result<Vec<i64>>;

    /// Returns the string keys of the table at `table`, in the store's
    /// enumeration order.
    fn lookup_table_keys(&self, table: &ConfigKey) -> Result<Vec<String>>;

    /// Returns true while diagnostics for failed lookups are suppressed.
    fn diagnostics_suppressed(&self) -> bool;

    /// Enables or disables diagnostics for failed lookups.
    fn set_diagnostics_suppressed(&self, suppressed: bool);
}

impl<S: ConfigStore + ?Sized> ConfigStore for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn lookup_bool(&self, key: &ConfigKey) -> Result<bool> {
        (**self).lookup_bool(key)
    }

    fn lookup_int(&self, key: &ConfigKey) -> Result<i64> {
        (**self).lookup_int(key)
    }

    fn lookup_float(&self, key: &ConfigKey) -> Result<f64> {
        (**self).lookup_float(key)
    }

    fn lookup_string(&self, key: &ConfigKey) -> Result<String> {
        (**self).lookup_string(key)
    }

    fn lookup_string_list(&self, key: &ConfigKey) -> Result<Vec<String>> {
        (**self).lookup_string_list(key)
    }

    fn lookup_int_list(&self, key: &ConfigKey) -> Result<Vec<i64>> {
        (**self).lookup_int_list(key)
    }

    fn lookup_table_keys(&self, table: &ConfigKey) -> Result<Vec<String>> {
        (**self).lookup_table_keys(table)
    }

    fn diagnostics_suppressed(&self) -> bool {
        (**self).diagnostics_suppressed()
    }

    fn set_diagnostics_suppressed(&self, suppressed: bool) {
        (**self).set_diagnostics_suppressed(suppressed)
    }
}
