//! Flag State Registry
//!
//! One boolean per flag name, with scope-bounded activation and
//! guaranteed restoration of the prior value.

use std::cell::Cell;

use crate::flag::Flag;

/// State registry for every [`Flag`].
///
/// The host creates one registry at startup and passes it by reference to
/// the code that needs to observe or scope flags. All flags start
/// inactive, and outside of an [`activate`](FeatureFlags::activate) scope
/// they stay inactive.
///
/// The registry carries no internal synchronization and is not `Sync`:
/// keep it on one thread, or behind the host's own synchronization.
/// Scopes on the same thread nest correctly.
#[derive(Debug, Default)]
pub struct FeatureFlags {
    states: [Cell<bool>; Flag::ALL.len()],
}

impl FeatureFlags {
    /// Create a registry with every flag inactive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of `flag`.
    pub fn is_active(&self, flag: Flag) -> bool {
        self.state(flag).get()
    }

    /// Activate `flag` until the returned guard is dropped.
    ///
    /// The guard restores the state that held before this call, so a
    /// nested activation hands back the outer scope's value rather than
    /// `false`.
    #[must_use = "the flag deactivates as soon as the guard is dropped"]
    pub fn activate(&self, flag: Flag) -> ActivationGuard<'_> {
        let previous = self.state(flag).replace(true);
        tracing::trace!("Flag {} activated (was {})", flag, previous);
        ActivationGuard {
            flags: self,
            flag,
            previous,
        }
    }

    /// Run `f` with `flag` active, restoring the prior state afterward.
    ///
    /// Restoration happens on every exit path: when `f` returns, its
    /// value (or error) passes through unchanged; when `f` panics, the
    /// flag is restored during unwinding and the panic continues to the
    /// caller.
    pub fn activate_in<R>(&self, flag: Flag, f: impl FnOnce() -> R) -> R {
        let _guard = self.activate(flag);
        f()
    }

    fn state(&self, flag: Flag) -> &Cell<bool> {
        &self.states[flag.index()]
    }
}

/// Restores a flag's prior state when dropped.
///
/// Created by [`FeatureFlags::activate`].
#[derive(Debug)]
pub struct ActivationGuard<'a> {
    flags: &'a FeatureFlags,
    flag: Flag,
    previous: bool,
}

impl Drop for ActivationGuard<'_> {
    fn drop(&mut self) {
        self.flags.state(self.flag).set(self.previous);
        tracing::trace!("Flag {} restored to {}", self.flag, self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[test]
    fn test_inactive_by_default() {
        let flags = FeatureFlags::new();
        for flag in Flag::ALL {
            assert!(!flags.is_active(flag));
        }
    }

    #[test]
    fn test_active_inside_scope() {
        let flags = FeatureFlags::new();
        flags.activate_in(Flag::ExampleFeature, || {
            assert!(flags.is_active(Flag::ExampleFeature));
        });
        assert!(!flags.is_active(Flag::ExampleFeature));
    }

    #[test]
    fn test_return_value_passes_through() {
        let flags = FeatureFlags::new();
        let n = flags.activate_in(Flag::ExampleFeature, || 42);
        assert_eq!(n, 42);
    }

    #[test]
    fn test_error_passes_through_after_restore() {
        let flags = FeatureFlags::new();
        let result: Result<(), &str> = flags.activate_in(Flag::ExampleFeature, || Err("nope"));
        assert_eq!(result, Err("nope"));
        assert!(!flags.is_active(Flag::ExampleFeature));
    }

    #[test]
    fn test_restored_after_panic() {
        let flags = FeatureFlags::new();
        let panicked = catch_unwind(AssertUnwindSafe(|| {
            flags.activate_in(Flag::ExampleFeature, || panic!("callback failed"));
        }));
        let payload = panicked.unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"callback failed"));
        assert!(!flags.is_active(Flag::ExampleFeature));
    }

    #[test]
    fn test_nested_scopes_keep_outer_value() {
        let flags = FeatureFlags::new();
        flags.activate_in(Flag::ExampleFeature, || {
            flags.activate_in(Flag::ExampleFeature, || {
                assert!(flags.is_active(Flag::ExampleFeature));
            });
            // Inner scope exited; the outer activation still holds.
            assert!(flags.is_active(Flag::ExampleFeature));
        });
        assert!(!flags.is_active(Flag::ExampleFeature));
    }

    #[test]
    fn test_flags_are_independent() {
        let flags = FeatureFlags::new();
        flags.activate_in(Flag::ExampleFeature, || {
            assert!(!flags.is_active(Flag::MergeSingletonClasses));
        });
        assert!(!flags.is_active(Flag::MergeSingletonClasses));
    }

    #[test]
    fn test_guard_restores_on_drop() {
        let flags = FeatureFlags::new();
        let guard = flags.activate(Flag::MergeSingletonClasses);
        assert!(flags.is_active(Flag::MergeSingletonClasses));
        drop(guard);
        assert!(!flags.is_active(Flag::MergeSingletonClasses));
    }
}
