//! Customer types produced by segmentation, extraction and routing

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// One customer's text as written in the original message.
///
/// Always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawSpan(String);

impl RawSpan {
    /// Build a span from a message fragment. Returns `None` when the
    /// fragment is blank once trimmed.
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for RawSpan {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Label of the driver region a customer is routed to
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionTag(Cow<'static, str>);

impl RegionTag {
    /// Default tag for customers no region could be inferred for.
    /// These go to the dispatcher rather than a specific driver.
    pub const UNASSIGNED: RegionTag = RegionTag(Cow::Borrowed("Geral"));

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unassigned(&self) -> bool {
        *self == Self::UNASSIGNED
    }
}

impl fmt::Display for RegionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fields pulled out of a span, before region routing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub name: String,
    /// Raw matched token, e.g. "14:00", "9h", "9h30"
    pub time_token: String,
    pub destination: String,
    /// Empty when the insurer marker is absent
    pub insurer_name: String,
    pub address: String,
    /// 9 to 15 digits, always the suffix of the span
    pub phone: String,
    pub original_text: RawSpan,
}

impl ExtractedFields {
    /// Attach the routing decision, completing the record
    pub fn with_region(self, region: RegionTag) -> CustomerRecord {
        CustomerRecord {
            name: self.name,
            time_token: self.time_token,
            destination: self.destination,
            insurer_name: self.insurer_name,
            address: self.address,
            phone: self.phone,
            region,
            original_text: self.original_text,
        }
    }
}

/// A fully extracted and routed customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub name: String,
    pub time_token: String,
    pub destination: String,
    pub insurer_name: String,
    pub address: String,
    pub phone: String,
    pub region: RegionTag,
    pub original_text: RawSpan,
}

impl CustomerRecord {
    pub fn has_insurer(&self) -> bool {
        !self.insurer_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_span_trims_and_rejects_blank() {
        assert_eq!(RawSpan::new("  Ana 10h  ").unwrap().as_str(), "Ana 10h");
        assert!(RawSpan::new("   ").is_none());
        assert!(RawSpan::new("").is_none());
    }

    #[test]
    fn test_region_tag_unassigned() {
        assert_eq!(RegionTag::UNASSIGNED.as_str(), "Geral");
        assert!(RegionTag::new("Geral").is_unassigned());
        assert!(!RegionTag::from_static("Porto").is_unassigned());
    }

    #[test]
    fn test_with_region_keeps_fields() {
        let fields = ExtractedFields {
            name: "Ana".to_string(),
            time_token: "10h".to_string(),
            destination: "Porto".to_string(),
            insurer_name: String::new(),
            address: "Rua Nova 1".to_string(),
            phone: "912345678".to_string(),
            original_text: RawSpan::new("Ana 10h Porto Rua Nova 1 912345678").unwrap(),
        };
        let record = fields.with_region(RegionTag::from_static("Porto"));
        assert_eq!(record.region.as_str(), "Porto");
        assert_eq!(record.address, "Rua Nova 1");
        assert!(!record.has_insurer());
    }
}
