//! # Conditional observers for `match` guards.
//!
//! Wraps a side effect (usually logging) into a boolean so it can run inside a
//! `match` guard, where the failing value is still intact and has not been
//! handed to any arm yet.
//!
//! - [`observe_and_continue`] runs the action and returns `false`: the guarded arm
//!   never matches, so the value falls through to the next arm (typically the one
//!   that propagates it).
//! - [`observe_and_stop`] runs the action and returns `true`: the guarded arm
//!   matches and handles the value there.
//!
//! ## Example
//! ```text
//! match result {
//!     Ok(v) => Ok(v),
//!     Err(e) if observe_and_continue(|| log(&e)) => unreachable!(),
//!     Err(e) => Err(e),       // same value that was logged
//! }
//! ```
//!
//! ## Rules
//! - The action runs **exactly once**, synchronously, before the guard yields.
//! - A panic inside the action is not caught; it replaces whatever was being matched.
//! - No state is kept between calls.

/// Runs `action`, then returns `true`.
///
/// # Example
/// ```
/// use taskwarden::observer::observe_and_stop;
///
/// let mut seen = Vec::new();
/// let res: Result<u8, &str> = Err("ignorable");
/// let handled = match res {
///     Ok(v) => Some(v),
///     Err(e) if observe_and_stop(|| seen.push(e)) => None,
///     Err(_) => unreachable!(),
/// };
/// assert_eq!(handled, None);
/// assert_eq!(seen, ["ignorable"]);
/// ```
#[inline]
pub fn observe_and_stop<F: FnOnce()>(action: F) -> bool {
    action();
    true
}

/// Runs `action`, then returns `false`.
///
/// # Example
/// ```
/// use taskwarden::observer::observe_and_continue;
///
/// let mut seen = Vec::new();
/// let res: Result<u8, &str> = Err("disk full");
/// let out = match res {
///     Err(e) if observe_and_continue(|| seen.push(e)) => unreachable!(),
///     other => other,
/// };
/// assert_eq!(out, Err("disk full"));
/// assert_eq!(seen, ["disk full"]);
/// ```
#[inline]
pub fn observe_and_continue<F: FnOnce()>(action: F) -> bool {
    action();
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_continue_runs_action_before_fallthrough() {
        let trace = RefCell::new(Vec::new());
        let res: Result<(), String> = Err("boom".into());

        let out = match res {
            Err(e) if observe_and_continue(|| trace.borrow_mut().push(format!("log {e}"))) => {
                unreachable!()
            }
            Err(e) => {
                trace.borrow_mut().push(format!("propagate {e}"));
                Err(e)
            }
            Ok(()) => Ok(()),
        };

        assert_eq!(out, Err("boom".to_string()));
        assert_eq!(*trace.borrow(), ["log boom", "propagate boom"]);
    }

    #[test]
    fn test_stop_handles_in_guarded_arm() {
        let calls = RefCell::new(0);
        let res: Result<(), &str> = Err("ignorable");

        let handled = match res {
            Err(_) if observe_and_stop(|| *calls.borrow_mut() += 1) => true,
            _ => false,
        };

        assert!(handled);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_guard_not_evaluated_for_other_patterns() {
        let calls = RefCell::new(0);
        let res: Result<u8, &str> = Ok(7);

        let out = match res {
            Err(_) if observe_and_continue(|| *calls.borrow_mut() += 1) => unreachable!(),
            other => other,
        };

        assert_eq!(out, Ok(7));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    #[should_panic(expected = "logger down")]
    fn test_action_panic_is_not_suppressed() {
        let res: Result<(), &str> = Err("original");
        let _ = match res {
            Err(_) if observe_and_continue(|| panic!("logger down")) => unreachable!(),
            other => other,
        };
    }
}
