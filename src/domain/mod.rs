// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! Key paths, the coerced value type, errors, and the host-facing
//! `PluginConfig` trait live here. Nothing in this layer knows about a
//! concrete configuration store.

pub mod coerced_value;
pub mod config_key;
pub mod errors;
pub mod service;

// Re-export commonly used types
pub use coerced_value::CoercedValue;
pub use config_key::{ConfigKey, KeySegment};
pub use errors::{ConfigError, Result};
pub use service::PluginConfig;
