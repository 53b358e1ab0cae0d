// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scoped suppression of store diagnostics.

use crate::ports::ConfigStore;

/// Suppresses a store's diagnostics until dropped.
///
/// On creation the guard records the store's current setting and turns
/// diagnostics off; on drop it restores the recorded setting. Restoration
/// happens on every exit path, including early returns and unwinding.
///
/// # Examples
///
/// ```rust
/// use scopedcfg::adapters::YamlConfigStore;
/// use scopedcfg::ports::ConfigStore;
/// use scopedcfg::service::SilenceGuard;
///
/// let store = YamlConfigStore::from_yaml_str("a: 1").unwrap();
/// {
///     let _silence = SilenceGuard::new(&store);
///     assert!(store.diagnostics_suppressed());
/// }
/// assert!(!store.diagnostics_suppressed());
/// ```
#[must_use = "diagnostics are restored as soon as the guard is dropped"]
pub struct SilenceGuard<'a, S: ConfigStore + ?Sized> {
    store: &'a S,
    previous: bool,
}

impl<'a, S: ConfigStore + ?Sized> SilenceGuard<'a, S> {
    /// Suppresses diagnostics on `store` for the lifetime of the guard.
    pub fn new(store: &'a S) -> Self {
        let previous = store.diagnostics_suppressed();
        store.set_diagnostics_suppressed(true);
        Self { store, previous }
    }

    /// Returns the setting that will be restored on drop.
    pub fn previous(&self) -> bool {
        self.previous
    }
}

impl<S: ConfigStore + ?Sized> Drop for SilenceGuard<'_, S> {
    fn drop(&mut self) {
        self.store.set_diagnostics_suppressed(self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConfigError, ConfigKey, Result};
    use std::cell::{Cell, RefCell};

    // Records every write to the suppression flag
    #[derive(Default)]
    struct FlagStore {
        silent: Cell<bool>,
        writes: RefCell<Vec<bool>>,
    }

    impl FlagStore {
        fn fail<T>(&self, key: &ConfigKey) -> Result<T> {
            Err(ConfigError::ConfigKeyNotFound {
                key: key.to_string(),
            })
        }
    }

    impl ConfigStore for FlagStore {
        fn name(&self) -> &str {
            "flag-store"
        }

        fn lookup_bool(&self, key: &ConfigKey) -> Result<bool> {
            self.fail(key)
        }

        fn lookup_int(&self, key: &ConfigKey) -> Result<i64> {
            self.fail(key)
        }

        fn lookup_float(&self, key: &ConfigKey) -> Result<f64> {
            self.fail(key)
        }

        fn lookup_string(&self, key: &ConfigKey) -> Result<String> {
            self.fail(key)
        }

        fn lookup_string_list(&self, key: &ConfigKey) -> Result<Vec<String>> {
            self.fail(key)
        }

        fn lookup_int_list(&self, key: &ConfigKey) -> Result<Vec<i64>> {
            self.fail(key)
        }

        fn lookup_table_keys(&self, table: &ConfigKey) -> Result<Vec<String>> {
            self.fail(table)
        }

        fn diagnostics_suppressed(&self) -> bool {
            self.silent.get()
        }

        fn set_diagnostics_suppressed(&self, suppressed: bool) {
            self.writes.borrow_mut().push(suppressed);
            self.silent.set(suppressed);
        }
    }

    #[test]
    fn test_guard_restores_unsuppressed() {
        let store = FlagStore::default();
        {
            let guard = SilenceGuard::new(&store);
            assert!(!guard.previous());
            assert!(store.diagnostics_suppressed());
        }
        assert!(!store.diagnostics_suppressed());
        assert_eq!(*store.writes.borrow(), vec![true, false]);
    }

    #[test]
    fn test_guard_restores_already_suppressed() {
        let store = FlagStore::default();
        store.set_diagnostics_suppressed(true);
        {
            let guard = SilenceGuard::new(&store);
            assert!(guard.previous());
        }
        assert!(store.diagnostics_suppressed());
    }

    #[test]
    fn test_nested_guards() {
        let store = FlagStore::default();
        {
            let _outer = SilenceGuard::new(&store);
            {
                let _inner = SilenceGuard::new(&store);
            }
            assert!(store.diagnostics_suppressed());
        }
        assert!(!store.diagnostics_suppressed());
    }

    #[test]
    fn test_guard_restores_on_early_return() {
        fn probe(store: &FlagStore) -> Option<i64> {
            let _silence = SilenceGuard::new(store);
            let value = store.lookup_int(&ConfigKey::from("x")).ok()?;
            Some(value)
        }

        let store = FlagStore::default();
        assert_eq!(probe(&store), None);
        assert!(!store.diagnostics_suppressed());
    }

    #[test]
    fn test_guard_restores_on_panic() {
        let store = FlagStore::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _silence = SilenceGuard::new(&store);
            panic!("probe failed");
        }));
        assert!(result.is_err());
        assert!(!store.diagnostics_suppressed());
    }

    #[test]
    fn test_guard_over_trait_object() {
        let store: Box<dyn ConfigStore> = Box::new(FlagStore::default());
        {
            let _silence = SilenceGuard::new(store.as_ref());
            assert!(store.diagnostics_suppressed());
        }
        assert!(!store.diagnostics_suppressed());
    }
}
