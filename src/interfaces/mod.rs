//! Adapters between the engine and the outside world: raw input cleanup,
//! batch ingestion, and the output formats implementing
//! [`ReportWriter`](crate::domain::ports::ReportWriter).

pub mod csv;
pub mod input;
pub mod json;
pub mod text;
