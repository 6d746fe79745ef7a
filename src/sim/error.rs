//! Typed simulation faults
//!
//! The domain has no I/O, so every fault here is a broken programming
//! invariant. Faults are fatal to the session: the host loop inspects the
//! tick result and stops instead of continuing with partially-applied
//! mutations.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SimError {
    /// A public operation was handed an amount outside its contract.
    /// Clamping is reserved for designed bounds (health, difficulty);
    /// everything else fails fast.
    #[error("{op} amount must be non-negative and finite, got {amount}")]
    InvalidAmount { op: &'static str, amount: f32 },

    /// A mid-tick invariant check found non-finite state. Entity
    /// collections may be inconsistent; the run cannot continue.
    #[error("simulation state corrupted: {0}")]
    CorruptState(&'static str),
}
