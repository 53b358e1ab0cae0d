// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared test doubles for integration tests.

use scopedcfg::domain::{ConfigError, ConfigKey, Result};
use scopedcfg::ports::ConfigStore;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// One lookup made against a `MockStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub struct Call {
    /// Which lookup was made, e.g. "int"
    pub kind: &'static str,
    /// The full key
    pub key: String,
    /// Whether diagnostics were suppressed at the time
    pub silenced: bool,
}

/// A configuration store whose answers are set per type.
///
/// A key may be registered under several types at once, which lets tests
/// check which lookup wins. Every lookup is recorded.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct MockStore {
    bools: HashMap<String, bool>,
    ints: HashMap<String, i64>,
    floats: HashMap<String, f64>,
    strings: HashMap<String, String>,
    string_lists: HashMap<String, Vec<String>>,
    int_lists: HashMap<String, Vec<i64>>,
    tables: HashMap<String, Vec<String>>,
    silent: Cell<bool>,
    calls: RefCell<Vec<Call>>,
    flag_writes: Cell<usize>,
}

#[allow(dead_code)]
impl MockStore {
    /// Creates an empty mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers boolean lookups of `key`.
    pub fn with_bool(mut self, key: &str, value: bool) -> Self {
        self.bools.insert(key.to_string(), value);
        self
    }

    /// Answers integer lookups of `key`.
    pub fn with_int(mut self, key: &str, value: i64) -> Self {
        self.ints.insert(key.to_string(), value);
        self
    }

    /// Answers float lookups of `key`.
    pub fn with_float(mut self, key: &str, value: f64) -> Self {
        self.floats.insert(key.to_string(), value);
        self
    }

    /// Answers string lookups of `key`.
    pub fn with_string(mut self, key: &str, value: &str) -> Self {
        self.strings.insert(key.to_string(), value.to_string());
        self
    }

    /// Answers string list lookups of `key`.
    pub fn with_string_list(mut self, key: &str, value: &[&str]) -> Self {
        self.string_lists.insert(
            key.to_string(),
            value.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    /// Answers integer list lookups of `key`.
    pub fn with_int_list(mut self, key: &str, value: &[i64]) -> Self {
        self.int_lists.insert(key.to_string(), value.to_vec());
        self
    }

    /// Answers table key lookups of `key`.
    pub fn with_table(mut self, key: &str, keys: &[&str]) -> Self {
        self.tables
            .insert(key.to_string(), keys.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Returns every lookup made so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Returns the lookup kinds made so far, in order.
    pub fn call_kinds(&self) -> Vec<&'static str> {
        self.calls.borrow().iter().map(|c| c.kind).collect()
    }

    /// Returns how many times the suppression flag was written.
    pub fn flag_writes(&self) -> usize {
        self.flag_writes.get()
    }

    /// Forgets recorded calls and flag writes.
    pub fn reset(&self) {
        self.calls.borrow_mut().clear();
        self.flag_writes.set(0);
    }

    fn answer<T: Clone>(
        &self,
        kind: &'static str,
        map: &HashMap<String, T>,
        key: &ConfigKey,
    ) -> Result<T> {
        self.calls.borrow_mut().push(Call {
            kind,
            key: key.to_string(),
            silenced: self.silent.get(),
        });
        map.get(key.as_str())
            .cloned()
            .ok_or_else(|| ConfigError::ConfigKeyNotFound {
                key: key.to_string(),
            })
    }
}

impl ConfigStore for MockStore {
    fn name(&self) -> &str {
        "mock"
    }

    fn lookup_bool(&self, key: &ConfigKey) -> Result<bool> {
        self.answer("bool", &self.bools, key)
    }

    fn lookup_int(&self, key: &ConfigKey) -> Result<i64> {
        self.answer("int", &self.ints, key)
    }

    fn lookup_float(&self, key: &ConfigKey) -> Result<f64> {
        self.answer("float", &self.floats, key)
    }

    fn lookup_string(&self, key: &ConfigKey) -> Result<String> {
        self.answer("string", &self.strings, key)
    }

    fn lookup_string_list(&self, key: &ConfigKey) -> Result<Vec<String>> {
        self.answer("string_list", &self.string_lists, key)
    }

    fn lookup_int_list(&self, key: &ConfigKey) -> Result<Vec<i64>> {
        self.answer("int_list", &self.int_lists, key)
    }

    fn lookup_table_keys(&self, table: &ConfigKey) -> Result<Vec<String>> {
        self.answer("table_keys", &self.tables, table)
    }

    fn diagnostics_suppressed(&self) -> bool {
        self.silent.get()
    }

    fn set_diagnostics_suppressed(&self, suppressed: bool) {
        self.flag_writes.set(self.flag_writes.get() + 1);
        self.silent.set(suppressed);
    }
}
