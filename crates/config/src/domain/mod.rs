//! Domain data
//!
//! Static tables the importer routes customers with. Unlike settings these
//! are part of the build, not of the deployment.

pub mod regions;

pub use regions::{
    knowledge_base, ProximityEntry, RegionKnowledgeBase, RegionProfile, CENTRAL_CLINIC_REGION,
    CENTRAL_MARKER,
};
