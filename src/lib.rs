//! Scoped Feature Flags
//!
//! Named boolean switches with scope-bounded activation: a flag flips on
//! for the duration of a closure and reverts to its prior value on every
//! exit path, panics included.
//!
//! # Features
//!
//! - 🚩 **Named Flags** - a closed, compile-time set of switches
//! - ⏱️ **Scoped Activation** - a flag is active exactly for a closure's duration
//! - 🧹 **Guaranteed Restore** - prior state returns on normal exit and on panic
//! - 🪆 **Nesting** - inner scopes restore the outer scope's value, not `false`
//!
//! # Quick Start
//!
//! ```
//! use flagscope::{FeatureFlags, Flag};
//!
//! let flags = FeatureFlags::new();
//! assert!(!flags.is_active(Flag::ExampleFeature));
//!
//! flags.activate_in(Flag::ExampleFeature, || {
//!     // Optional behavior gated on the flag runs here.
//!     assert!(flags.is_active(Flag::ExampleFeature));
//! });
//!
//! assert!(!flags.is_active(Flag::ExampleFeature));
//! ```
//!
//! # Guard Form
//!
//! ```
//! use flagscope::{FeatureFlags, Flag};
//!
//! let flags = FeatureFlags::new();
//! let guard = flags.activate(Flag::MergeSingletonClasses);
//! assert!(flags.is_active(Flag::MergeSingletonClasses));
//! drop(guard);
//! assert!(!flags.is_active(Flag::MergeSingletonClasses));
//! ```
//!
//! # Threading
//!
//! A [`FeatureFlags`] registry carries no internal synchronization and is
//! not `Sync`: keep it on one thread, or put it behind the host's own
//! synchronization. Create one registry per process and pass it by
//! reference to the code that needs it.

pub mod error;
pub mod flag;
pub mod registry;

pub use error::{FlagError, Result};
pub use flag::Flag;
pub use registry::{ActivationGuard, FeatureFlags};
