//! Value types shared by the engine and its consumers.
//!
//! Everything here is immutable once built: inputs are validated on construction,
//! results are produced wholesale by the engine and never mutated afterwards.

pub mod amortization;
pub mod loan;
pub mod money;
pub mod ports;
