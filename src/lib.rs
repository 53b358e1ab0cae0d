// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin-scoped, read-only views over a shared configuration store.
//!
//! A host that loads plugins typically keeps one configuration document with a
//! `pluginsConfig` table holding each plugin's settings. This crate gives every
//! plugin (or the scripting layer acting for it) a view bound to its own
//! `pluginsConfig['<id>'].` namespace, and reads values without the caller
//! having to know their type in advance.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: key paths, the `CoercedValue` result type, errors, and
//!   the host-facing `PluginConfig` trait
//! - **Ports**: the `ConfigStore` trait a store implements
//! - **Adapters**: `YamlConfigStore`, a store over a YAML document
//! - **Service**: `ScopedConfigView` and the `SilenceGuard` it uses
//!
//! # Type probing
//!
//! `ScopedConfigView::get` tries boolean, integer, float, string, string list
//! and integer list, in that order, and returns the first that succeeds. A value
//! that fits none of them, or a missing key, is `CoercedValue::Absent`; `get`
//! never fails. The store's diagnostics are silenced while probing, since each
//! failed attempt is expected, and restored afterwards.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable the YAML store (default)
//!
//! # Quick Start
//!
//! ```rust
//! use scopedcfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let store = YamlConfigStore::from_yaml_str(r#"
//! pluginsConfig:
//!   MyPlugin:
//!     verbose: true
//!     limit: 42
//! "#)?;
//!
//! let view = ScopedConfigView::new(&store, "MyPlugin");
//! assert_eq!(view.get("limit"), CoercedValue::Int(42));
//! assert!(view.get("missing").is_absent());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{CoercedValue, ConfigError, ConfigKey, PluginConfig, Result};
    pub use crate::ports::ConfigStore;
    pub use crate::service::{ScopedConfigView, SilenceGuard, PLUGINS_TABLE};

    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlConfigStore;
}
