//! `transporte-import`: turn a customer message into routed appointments
//!
//! Usage: `transporte-import [MESSAGE_FILE]` (reads stdin without a file)

use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use transporte_config::{load_settings, Settings};
use transporte_importer::{read_message, render};
use transporte_text_processing::ImportPipeline;

fn main() -> anyhow::Result<()> {
    // Priority: env vars > config/{env}.yaml > config/default.yaml > defaults
    let env = std::env::var("TRANSPORTE_ENV").ok();
    let config = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };

    init_tracing(&config);

    tracing::debug!(
        environment = ?config.environment,
        config_path = env.as_deref().unwrap_or("default"),
        "Configuration loaded"
    );

    let input = std::env::args_os().nth(1).map(PathBuf::from);
    let message = read_message(input.as_deref()).with_context(|| match &input {
        Some(path) => format!("reading {}", path.display()),
        None => "reading stdin".to_string(),
    })?;

    let pipeline = ImportPipeline::from_settings(&config).context("building import pipeline")?;
    let report = pipeline.process_batch(&message);

    if !report.has_customers() {
        tracing::warn!(
            spans = report.outcomes.len(),
            "Nenhum cliente encontrado na mensagem"
        );
        if report.is_empty() {
            return Ok(());
        }
    }

    let today = chrono::Local::now().date_naive();
    let output = render(&report, config.output.format, today).context("rendering report")?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}

fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.observability.log_level;
        format!("transporte={}", level).into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if config.observability.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };
    subscriber.with(fmt_layer).init();
}
