//! Text processing for the transport dispatch importer
//!
//! Turns one free-text message listing several customers into routed,
//! scheduled customer records:
//! - **Segmentation**: split the message into one span per customer
//! - **Field extraction**: phone, preferred time, name, destination, insurer, address
//! - **Region routing**: pick the driver region from destination and address
//! - **Scheduling**: place each customer on a later working day
//! - **Rosters**: render the per-driver customer list
//!
//! # Example
//!
//! ```
//! use transporte_text_processing::ImportPipeline;
//!
//! let pipeline = ImportPipeline::default();
//! let report = pipeline.process_batch(
//!     "João Silva 14:00 Hospital São José seguro fidelidade Rua das Flores 12 912345678",
//! );
//! assert_eq!(report.imported().count(), 1);
//! ```

pub mod extraction;
pub mod pipeline;
pub mod region;
pub mod roster;
pub mod scheduling;
pub mod segmenter;

pub use extraction::{FieldExtractor, ADDRESS_ANCHORS, INSURER_MARKER};
pub use pipeline::{BatchReport, ImportPipeline};
pub use region::{MatchTier, RegionClassifier, RegionMatch};
pub use roster::roster_message;
pub use scheduling::Scheduler;
pub use segmenter::{segment, DELIMITERS};
