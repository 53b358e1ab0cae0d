// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host-facing configuration trait.
//!
//! `PluginConfig` is what a scripting or plugin host sees: a read-only,
//! dynamically typed view of one consumer's configuration. It never fails;
//! missing or unreadable values are reported as [`CoercedValue::Absent`].

use crate::domain::CoercedValue;

/// A read-only, per-consumer view of configuration.
///
/// # Examples
///
/// ```rust
/// use scopedcfg::domain::{CoercedValue, PluginConfig};
///
/// struct Fixed;
///
/// impl PluginConfig for Fixed {
///     fn get(&self, name: &str) -> CoercedValue {
///         match name {
///             "verbose" => CoercedValue::Bool(true),
///             _ => CoercedValue::Absent,
///         }
///     }
///
///     fn keys(&self, _table: &str) -> Option<Vec<String>> {
///         None
///     }
/// }
///
/// let config = Fixed;
/// assert!(config.has("verbose"));
/// assert!(!config.has("quiet"));
/// ```
pub trait PluginConfig {
    /// Returns the value stored under `name` in this consumer's namespace.
    ///
    /// The value is classified as the first of boolean, integer, float,
    /// string, string list, or integer list that fits; otherwise `Absent`.
    fn get(&self, name: &str) -> CoercedValue;

    /// Returns the string keys of the table at the full path `table`.
    ///
    /// The path is not scoped to the consumer's namespace. Returns `None` if
    /// `table` does not name a table.
    fn keys(&self, table: &str) -> Option<Vec<String>>;

    /// Returns true if `get(name)` would produce a value.
    fn has(&self, name: &str) -> bool {
        !self.get(name).is_absent()
    }

    /// Returns the value under `name`, or `default` when it is absent.
    fn get_or(&self, name: &str, default: CoercedValue) -> CoercedValue {
        match self.get(name) {
            CoercedValue::Absent => default,
            value => value,
        }
    }
}
