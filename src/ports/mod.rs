// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! The `ConfigStore` trait is the interface scoped views consume. Concrete
//! stores live in the adapters layer.

pub mod store;

pub use store::ConfigStore;
