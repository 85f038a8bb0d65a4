//! Customer field extraction
//!
//! Each span is expected to read
//! `Name Time Destination [seguro Insurer] Address Phone`, for example
//! `João Silva 14:00 Hospital São José seguro fidelidade Rua das Flores 12 912345678`.
//!
//! Extraction peels the span from the outside in:
//! 1. the phone number, a run of 9 to 15 digits ending the span
//! 2. the first time token ("14:00", "9h", "9h30") in what is left
//! 3. the name before the time and the tail after it
//! 4. the tail split into destination, insurer and address by keyword
//!
//! Any missing mandatory piece fails the whole span; there are no partial
//! records.

use once_cell::sync::Lazy;
use regex::Regex;
use transporte_core::{ExtractedFields, ExtractionFailure, RawSpan};

/// Token that introduces the insurer name
pub const INSURER_MARKER: &str = "seguro";

/// Street-type words an address starts with
pub const ADDRESS_ANCHORS: [&str; 7] = [
    "rua", "avenida", "av", "travessa", "largo", "praça", "estrada",
];

/// Tokens kept on the left side when a tail has to be cut in half
const MIN_LEFT_TOKENS: usize = 2;

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{9,15}$").unwrap());

static TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{1,2}[:h]\d{0,2}|\d{1,2}h|\d{1,2}:\d{2}").unwrap());

/// Rule-based extractor for customer spans
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldExtractor;

impl FieldExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract every field of a customer span
    pub fn extract(&self, span: &RawSpan) -> Result<ExtractedFields, ExtractionFailure> {
        let text = span.as_str();

        let (phone, rest) = self
            .extract_phone(text)
            .ok_or(ExtractionFailure::NoPhoneFound)?;

        let time = TIME_PATTERN
            .find(rest)
            .ok_or(ExtractionFailure::NoTimeFound)?;

        let name = rest[..time.start()].trim();
        if name.is_empty() {
            return Err(ExtractionFailure::EmptyName);
        }

        let tail = rest[time.end()..].trim();
        if tail.is_empty() {
            return Err(ExtractionFailure::EmptyTail);
        }

        let tokens: Vec<&str> = tail.split_whitespace().collect();
        let parts = split_tail(&tokens);

        if parts.destination.is_empty() {
            return Err(ExtractionFailure::EmptyDestination);
        }
        if parts.address.is_empty() {
            return Err(ExtractionFailure::EmptyAddress);
        }

        Ok(ExtractedFields {
            name: name.to_string(),
            time_token: time.as_str().to_string(),
            destination: parts.destination,
            insurer_name: parts.insurer_name,
            address: parts.address,
            phone: phone.to_string(),
            original_text: span.clone(),
        })
    }

    /// Trailing phone number and the trimmed text before it
    pub fn extract_phone<'a>(&self, text: &'a str) -> Option<(&'a str, &'a str)> {
        let text = text.trim();
        PHONE_PATTERN
            .find(text)
            .map(|m| (m.as_str(), text[..m.start()].trim()))
    }

    /// First time token in the text
    pub fn extract_time<'a>(&self, text: &'a str) -> Option<&'a str> {
        TIME_PATTERN.find(text).map(|m| m.as_str())
    }
}

/// Destination, insurer and address of a tail
#[derive(Debug, Default, PartialEq, Eq)]
struct TailParts {
    destination: String,
    insurer_name: String,
    address: String,
}

fn split_tail(tokens: &[&str]) -> TailParts {
    match tokens.iter().position(|t| is_insurer_marker(t)) {
        Some(marker) => {
            let (insurer, address) = split_at_address(&tokens[marker..]);
            TailParts {
                destination: join(&tokens[..marker]),
                // the marker itself is not part of the insurer name
                insurer_name: join(insurer.get(1..).unwrap_or_default()),
                address: join(address),
            }
        }
        None => {
            let (destination, address) = split_at_address(tokens);
            TailParts {
                destination: join(destination),
                insurer_name: String::new(),
                address: join(address),
            }
        }
    }
}

/// Split before the first address anchor, or in the middle when there is
/// none. An anchor on the very first token does not count: the left side
/// would be empty.
fn split_at_address<'t, 'a>(tokens: &'t [&'a str]) -> (&'t [&'a str], &'t [&'a str]) {
    let at = match tokens.iter().position(|t| is_address_anchor(t)) {
        Some(anchor) if anchor > 0 => anchor,
        _ => (tokens.len() / 2).max(MIN_LEFT_TOKENS).min(tokens.len()),
    };
    tokens.split_at(at)
}

fn is_insurer_marker(token: &str) -> bool {
    token.to_lowercase() == INSURER_MARKER
}

fn is_address_anchor(token: &str) -> bool {
    let lower = token.to_lowercase();
    ADDRESS_ANCHORS.contains(&lower.as_str())
}

fn join(tokens: &[&str]) -> String {
    tokens.join(" ")
}
