//! Region routing
//!
//! Picks the driver region for a customer from destination and address.
//! Signals are tried from most to least specific and the first hit wins:
//!
//! | tier | signal |
//! |------|--------|
//! | 1 | point of interest |
//! | 2 | hospital |
//! | 3 | transport hub |
//! | 4 | neighbourhood / locality |
//! | 5 | postal code prefix (raw substring) |
//! | 6 | proximity hint |
//! | 7 | generic healthcare word together with "central" |
//!
//! Within a tier, regions are tried in knowledge-base order and keywords in
//! list order. When nothing matches the customer is left unassigned
//! ("Geral") and goes to the dispatcher.

use serde::{Deserialize, Serialize};
use transporte_config::{
    knowledge_base, RegionKnowledgeBase, RegionProfile, CENTRAL_CLINIC_REGION, CENTRAL_MARKER,
};
use transporte_core::RegionTag;

/// Which kind of signal decided the region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    PointOfInterest,
    Hospital,
    Transport,
    Locality,
    PostalCode,
    Proximity,
    GenericHealthcare,
}

type KeywordList = fn(&RegionProfile) -> &'static [&'static str];

/// Tiers answered by the per-region keyword lists, in priority order
const REGION_TIERS: [(MatchTier, KeywordList); 5] = [
    (MatchTier::PointOfInterest, |r| r.points_of_interest),
    (MatchTier::Hospital, |r| r.hospitals),
    (MatchTier::Transport, |r| r.transports),
    (MatchTier::Locality, |r| r.localities),
    (MatchTier::PostalCode, |r| r.postal_codes),
];

/// Routing decision with the evidence behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionMatch {
    pub region: RegionTag,
    /// `None` when unassigned
    pub tier: Option<MatchTier>,
    /// Keyword that matched, `None` when unassigned
    pub keyword: Option<String>,
}

impl RegionMatch {
    fn unassigned() -> Self {
        Self {
            region: RegionTag::UNASSIGNED,
            tier: None,
            keyword: None,
        }
    }

    fn hit(region: &'static str, tier: MatchTier, keyword: &str) -> Self {
        Self {
            region: RegionTag::from_static(region),
            tier: Some(tier),
            keyword: Some(keyword.to_string()),
        }
    }
}

/// Keyword classifier over a region knowledge base
#[derive(Debug, Clone, Copy)]
pub struct RegionClassifier<'kb> {
    kb: &'kb RegionKnowledgeBase,
}

impl Default for RegionClassifier<'static> {
    fn default() -> Self {
        Self::new(knowledge_base())
    }
}

impl<'kb> RegionClassifier<'kb> {
    pub fn new(kb: &'kb RegionKnowledgeBase) -> Self {
        Self { kb }
    }

    /// Region tag for a destination and address
    pub fn classify(&self, address: &str, destination: &str) -> RegionTag {
        self.classify_with_tier(address, destination).region
    }

    /// Region tag plus the tier and keyword that produced it
    pub fn classify_with_tier(&self, address: &str, destination: &str) -> RegionMatch {
        let text = format!("{} {}", destination, address).to_lowercase();
        let text = text.trim();

        if text.is_empty() {
            return RegionMatch::unassigned();
        }

        for (tier, keywords) in REGION_TIERS {
            for region in self.kb.regions() {
                if let Some(keyword) = first_contained(text, keywords(region)) {
                    tracing::debug!(region = region.name, ?tier, keyword, "Region matched");
                    return RegionMatch::hit(region.name, tier, keyword);
                }
            }
        }

        for entry in self.kb.proximity() {
            if let Some(keyword) = first_contained(text, entry.keywords) {
                tracing::debug!(region = entry.region, keyword, "Region matched by proximity");
                return RegionMatch::hit(entry.region, MatchTier::Proximity, keyword);
            }
        }

        if text.contains(CENTRAL_MARKER) {
            if let Some(keyword) = first_contained(text, self.kb.generic_healthcare()) {
                tracing::debug!(keyword, "Central clinic assumed");
                return RegionMatch::hit(
                    CENTRAL_CLINIC_REGION,
                    MatchTier::GenericHealthcare,
                    keyword,
                );
            }
        }

        tracing::debug!(text, "No region matched");
        RegionMatch::unassigned()
    }
}

fn first_contained<'w>(text: &str, keywords: &[&'w str]) -> Option<&'w str> {
    keywords.iter().copied().find(|keyword| text.contains(keyword))
}
