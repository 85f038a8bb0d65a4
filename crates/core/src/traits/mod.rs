//! Core traits for the importer
//!
//! Components that touch the environment go through a trait so they can be
//! swapped for deterministic implementations in tests:
//!
//! ```text
//! Time:
//!   - Clock: source of "now" for the scheduler
//! ```

mod clock;

pub use clock::{Clock, FixedClock, SystemClock};
