//! Scheduling results and per-span outcomes

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::customer::{CustomerRecord, RawSpan};
use crate::error::ExtractionFailure;

/// Absolute appointment time, seconds and sub-seconds always zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduledSlot(NaiveDateTime);

impl ScheduledSlot {
    /// Build a slot from a date and a time of day, dropping seconds.
    pub fn new(date: NaiveDate, hour: u32, minute: u32) -> Option<Self> {
        date.and_hms_opt(hour, minute, 0).map(Self)
    }

    /// Slot on `date` at the hour and minute of `time`
    pub fn at(date: NaiveDate, time: NaiveTime) -> Self {
        let whole_minute = time
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(time);
        Self(date.and_time(whole_minute))
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn as_datetime(&self) -> NaiveDateTime {
        self.0
    }
}

/// A routed customer together with its automatic appointment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedCustomer {
    pub record: CustomerRecord,
    pub scheduled_at: ScheduledSlot,
    /// Zero-based position among the successful extractions of the batch
    pub batch_index: usize,
    pub notes: String,
}

impl ImportedCustomer {
    pub fn new(record: CustomerRecord, scheduled_at: ScheduledSlot, batch_index: usize) -> Self {
        let notes = format!("Agendamento automático - Destino: {}", record.destination);
        Self {
            record,
            scheduled_at,
            batch_index,
            notes,
        }
    }
}

/// Result of processing one span of a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SpanOutcome {
    Imported(ImportedCustomer),
    Failed {
        span: RawSpan,
        failure: ExtractionFailure,
    },
}

impl SpanOutcome {
    /// Originating span text
    pub fn span(&self) -> &RawSpan {
        match self {
            Self::Imported(customer) => &customer.record.original_text,
            Self::Failed { span, .. } => span,
        }
    }

    pub fn is_imported(&self) -> bool {
        matches!(self, Self::Imported(_))
    }

    pub fn imported(&self) -> Option<&ImportedCustomer> {
        match self {
            Self::Imported(customer) => Some(customer),
            Self::Failed { .. } => None,
        }
    }

    pub fn failure(&self) -> Option<ExtractionFailure> {
        match self {
            Self::Imported(_) => None,
            Self::Failed { failure, .. } => Some(*failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::RegionTag;

    fn record() -> CustomerRecord {
        CustomerRecord {
            name: "Ana Lopes".to_string(),
            time_token: "10:30".to_string(),
            destination: "Hospital de Leiria".to_string(),
            insurer_name: String::new(),
            address: "Rua Direita 3".to_string(),
            phone: "933333333".to_string(),
            region: RegionTag::from_static("Coimbra"),
            original_text: RawSpan::new(
                "Ana Lopes 10:30 Hospital de Leiria Rua Direita 3 933333333",
            )
            .unwrap(),
        }
    }

    #[test]
    fn test_slot_zeroes_seconds() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let slot = ScheduledSlot::new(date, 14, 5).unwrap();
        assert_eq!(slot.as_datetime().second(), 0);
        assert_eq!(slot.hour(), 14);
        assert_eq!(slot.minute(), 5);
        assert_eq!(slot.weekday(), Weekday::Mon);
        assert!(!slot.is_weekend());
        assert!(ScheduledSlot::new(date, 24, 0).is_none());
    }

    #[test]
    fn test_slot_at_drops_seconds() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 24).unwrap();
        let time = NaiveTime::from_hms_milli_opt(7, 45, 30, 250).unwrap();
        let slot = ScheduledSlot::at(date, time);
        assert_eq!(slot.as_datetime(), date.and_hms_opt(7, 45, 0).unwrap());
        assert!(slot.is_weekend());
    }

    #[test]
    fn test_imported_customer_note() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        let slot = ScheduledSlot::new(date, 10, 30).unwrap();
        let customer = ImportedCustomer::new(record(), slot, 0);
        assert_eq!(
            customer.notes,
            "Agendamento automático - Destino: Hospital de Leiria"
        );
    }

    #[test]
    fn test_outcome_accessors() {
        let span = RawSpan::new("sem dados").unwrap();
        let failed = SpanOutcome::Failed {
            span: span.clone(),
            failure: ExtractionFailure::NoPhoneFound,
        };
        assert!(!failed.is_imported());
        assert_eq!(failed.span(), &span);
        assert_eq!(failed.failure(), Some(ExtractionFailure::NoPhoneFound));

        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["failure"], "no_phone_found");
    }
}
