//! Map construction pipeline and session state for Maplab.
//!
//! This crate owns the business logic: the step-by-step builder with
//! its variant table, the director that sequences the steps, and the
//! session holding the current original map plus its clone history.
//! It depends only on `maplab-types` -- no I/O, no terminal code.

pub mod builder;
pub mod director;
pub mod session;
