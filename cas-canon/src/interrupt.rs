//! Cooperative cancellation of long-running comparisons and sorts.
//!
//! Comparing or sorting a large tree can take a while. Every recursive entry point of this crate
//! accepts a `&dyn Interrupt` and checks it before doing any work, so that an outside event (such
//! as the user pressing a key) can stop the work early. Interruption has no rollback: a sort that
//! is interrupted may leave its children partially sorted, but always reports the interruption to
//! its caller with [`Interrupted`].

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// A source of cooperative interruption.
///
/// [`Interrupt`] is also implemented for the unit type `()`, which never interrupts.
pub trait Interrupt {
    /// Returns true if the current operation should stop as soon as possible.
    fn should_stop(&self) -> bool;
}

impl Interrupt for () {
    #[inline]
    fn should_stop(&self) -> bool {
        false
    }
}

/// A cloneable cancellation flag. All clones share the same flag, so one clone can be handed to
/// whatever decides to cancel the work (another thread, or a UI callback) while another is passed
/// to the operation.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a new token that has not been cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals cancellation to every clone of this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Returns true if [`CancelToken::cancel`] was called on any clone of this token.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Clears the flag, so the token can be reused for a new operation.
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::Relaxed);
    }
}

impl Interrupt for CancelToken {
    #[inline]
    fn should_stop(&self) -> bool {
        self.is_cancelled()
    }
}

/// Error returned by an operation that stopped early because its [`Interrupt`] fired.
///
/// The tree is left in a consistent, but possibly not canonical, state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupted;

impl std::fmt::Display for Interrupted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "the operation was interrupted before it could finish")
    }
}

impl std::error::Error for Interrupted {}
