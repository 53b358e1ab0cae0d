// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer.
//!
//! Provides the plugin-scoped view over a configuration store and the guard
//! that keeps store diagnostics quiet while a value's type is probed.

pub mod scoped_view;
pub mod silence;

pub use scoped_view::{ScopedConfigView, PLUGINS_TABLE};
pub use silence::SilenceGuard;
