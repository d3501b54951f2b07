//! External validation of a produced partition against a reference.
//!
//! Both scores are pure functions of two [`Partition`]s covering the same
//! entity universe; neither touches the pattern store.
//!
//! [`Partition`]: crate::clustering::Partition

mod scores;

pub use scores::{nmi, purity};
