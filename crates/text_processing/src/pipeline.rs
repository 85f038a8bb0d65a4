//! Batch import pipeline
//!
//! One message in, one [`BatchReport`] out. Every span is extracted and
//! routed on its own; only then are the successful ones numbered, in span
//! order, and scheduled. A failed span never stops the batch.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use transporte_config::Settings;
use transporte_core::{
    CustomerRecord, ExtractionFailure, ImportedCustomer, RawSpan, RegionTag, Result, SpanOutcome,
    SystemClock,
};
use uuid::Uuid;

use crate::extraction::FieldExtractor;
use crate::region::RegionClassifier;
use crate::roster::roster_message;
use crate::scheduling::Scheduler;
use crate::segmenter::segment;

/// Segment, extract, route and schedule a whole message
#[derive(Debug, Clone, Default)]
pub struct ImportPipeline {
    extractor: FieldExtractor,
    classifier: RegionClassifier<'static>,
    scheduler: Scheduler,
}

impl ImportPipeline {
    pub fn new(scheduler: Scheduler) -> Self {
        Self {
            extractor: FieldExtractor::new(),
            classifier: RegionClassifier::default(),
            scheduler,
        }
    }

    /// Pipeline on the system clock with the configured fallback time
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let scheduler = Scheduler::from_config(&settings.scheduling, Arc::new(SystemClock))?;
        Ok(Self::new(scheduler))
    }

    /// Extract the fields of one span and route it to a region
    pub fn route_span(
        &self,
        span: &RawSpan,
    ) -> std::result::Result<CustomerRecord, ExtractionFailure> {
        let fields = self.extractor.extract(span)?;
        let region = self.classifier.classify(&fields.address, &fields.destination);
        Ok(fields.with_region(region))
    }

    /// Process every customer span of a message
    pub fn process_batch(&self, message: &str) -> BatchReport {
        let batch_id = Uuid::new_v4();
        let _span = tracing::info_span!("import_batch", %batch_id).entered();

        let routed: Vec<_> = segment(message)
            .map(|span| {
                let result = self.route_span(&span);
                (span, result)
            })
            .collect();

        tracing::debug!(spans = routed.len(), "Message segmented");

        let mut next_index = 0;
        let outcomes: Vec<SpanOutcome> = routed
            .into_iter()
            .map(|(span, result)| match result {
                Ok(record) => {
                    let scheduled_at = self.scheduler.schedule_for(&record.time_token, next_index);
                    tracing::info!(
                        name = %record.name,
                        destination = %record.destination,
                        address = %record.address,
                        region = %record.region,
                        scheduled_at = %scheduled_at.as_datetime(),
                        "Customer imported"
                    );
                    let customer = ImportedCustomer::new(record, scheduled_at, next_index);
                    next_index += 1;
                    SpanOutcome::Imported(customer)
                }
                Err(failure) => {
                    tracing::warn!(text = %span, reason = %failure, "Could not extract customer");
                    SpanOutcome::Failed { span, failure }
                }
            })
            .collect();

        let report = BatchReport { batch_id, outcomes };
        tracing::info!(
            imported = report.imported().count(),
            failed = report.failures().count(),
            regions = ?report.regions_detected(),
            "Batch processed"
        );
        report
    }
}

/// Outcomes of one message, in span order
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub batch_id: Uuid,
    pub outcomes: Vec<SpanOutcome>,
}

impl BatchReport {
    pub fn imported(&self) -> impl Iterator<Item = &ImportedCustomer> + '_ {
        self.outcomes.iter().filter_map(SpanOutcome::imported)
    }

    pub fn failures(&self) -> impl Iterator<Item = (&RawSpan, ExtractionFailure)> + '_ {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            SpanOutcome::Failed { span, failure } => Some((span, *failure)),
            SpanOutcome::Imported(_) => None,
        })
    }

    /// Regions of the imported customers, first seen first
    pub fn regions_detected(&self) -> Vec<&RegionTag> {
        let mut regions: Vec<&RegionTag> = Vec::new();
        for customer in self.imported() {
            if !regions.contains(&&customer.record.region) {
                regions.push(&customer.record.region);
            }
        }
        regions
    }

    /// Imported customers grouped per region, regions first seen first
    pub fn by_region(&self) -> Vec<(&RegionTag, Vec<&ImportedCustomer>)> {
        let mut groups: Vec<(&RegionTag, Vec<&ImportedCustomer>)> = Vec::new();
        for customer in self.imported() {
            let region = &customer.record.region;
            match groups.iter_mut().find(|(tag, _)| *tag == region) {
                Some((_, members)) => members.push(customer),
                None => groups.push((region, vec![customer])),
            }
        }
        groups
    }

    pub fn has_customers(&self) -> bool {
        self.outcomes.iter().any(SpanOutcome::is_imported)
    }

    /// True when the message held no spans at all
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// One driver roster per detected region
    pub fn roster_messages(&self, date: NaiveDate) -> Vec<(&RegionTag, String)> {
        self.by_region()
            .into_iter()
            .map(|(region, customers)| {
                let message = roster_message(region, &customers, date);
                (region, message)
            })
            .collect()
    }
}
