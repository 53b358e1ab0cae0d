// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing configuration store implementations.
//!
//! Each adapter implements the `ConfigStore` port over a concrete document
//! format.

#[cfg(feature = "yaml")]
pub mod yaml_store;

#[cfg(feature = "yaml")]
pub use yaml_store::YamlConfigStore;
