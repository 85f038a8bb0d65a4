//! Importer front end: input reading and report rendering for the
//! `transporte-import` binary.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use transporte_config::OutputFormat;
use transporte_core::Result;
use transporte_text_processing::BatchReport;

/// Read the whole message from `path`, or from stdin when there is none
pub fn read_message(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut message = String::new();
            std::io::stdin().read_to_string(&mut message)?;
            Ok(message)
        }
    }
}

/// Render a report in the configured output format.
///
/// Rosters are dated `roster_date` and separated by a blank line.
pub fn render(
    report: &BatchReport,
    format: OutputFormat,
    roster_date: NaiveDate,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Roster => Ok(report
            .roster_messages(roster_date)
            .into_iter()
            .map(|(_, message)| message)
            .collect::<Vec<_>>()
            .join("\n\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Arc;
    use tempfile::NamedTempFile;
    use transporte_core::{Error, FixedClock};
    use transporte_text_processing::{ImportPipeline, Scheduler};

    fn report(message: &str) -> BatchReport {
        let now = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        ImportPipeline::new(Scheduler::new(Arc::new(FixedClock(now)))).process_batch(message)
    }

    #[test]
    fn test_read_message_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Ana 9h Porto Rua A 1 911111111").unwrap();

        let message = read_message(Some(file.path())).unwrap();
        assert_eq!(message, "Ana 9h Porto Rua A 1 911111111");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_message(Some(Path::new("/nonexistent/mensagem.txt"))).unwrap_err();
        assert!(matches!(err, Error::Input(_)));
    }

    #[test]
    fn test_render_json() {
        let report = report("Ana 9h Porto Rua A 1 911111111, sem dados");
        let rendered = render(&report, OutputFormat::Json, NaiveDate::MIN).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["outcomes"].as_array().unwrap().len(), 2);
        assert_eq!(json["outcomes"][0]["record"]["region"], "Porto");
        assert_eq!(json["outcomes"][1]["failure"], "no_phone_found");
    }

    #[test]
    fn test_render_rosters() {
        let report = report("Ana 9h Porto Rua A 1 911111111, Rui 10h Cascais Rua B 2 922222222");
        let date = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        let rendered = render(&report, OutputFormat::Roster, date).unwrap();

        let rosters: Vec<_> = rendered.split("\n\n📋").collect();
        assert_eq!(rosters.len(), 2);
        assert!(rendered.starts_with("📋 *Lista de Clientes - Motorista Porto*\n"));
        assert!(rendered.contains("📅 Data: 20/10/2026"));
        assert!(rosters[1].contains("Motorista Sintra"));
    }

    #[test]
    fn test_render_empty_rosters() {
        let report = report("");
        assert_eq!(render(&report, OutputFormat::Roster, NaiveDate::MIN).unwrap(), "");
    }
}
