//! Application layer containing the amortization engine.
//!
//! The engine is a set of pure functions over [`LoanInputs`](crate::domain::loan::LoanInputs):
//! callers re-invoke it whenever inputs change and replace any previous result wholesale.

pub mod engine;
