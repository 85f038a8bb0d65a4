//! Core types and traits for the transport dispatch importer
//!
//! This crate provides the foundational types shared by the other crates:
//! - Customer types (raw spans, extracted fields, routed records)
//! - Region tags used to route a customer to a driver
//! - Scheduling types (slots, imported customers, per-span outcomes)
//! - Error types
//! - The clock abstraction used by the scheduler

pub mod customer;
pub mod error;
pub mod outcome;
pub mod traits;

pub use customer::{CustomerRecord, ExtractedFields, RawSpan, RegionTag};
pub use error::{Error, ExtractionFailure, Result};
pub use outcome::{ImportedCustomer, ScheduledSlot, SpanOutcome};
pub use traits::{Clock, FixedClock, SystemClock};
