//! Subcommand implementations.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use polars::prelude::DataFrame;
use tracing::{error, info};

use staycast_align::align;
use staycast_artifacts::{
    ArtifactSource, FOREST_ARTIFACT, MODEL_DIR_ENV_VAR, ModelConfig, ModelStore, SCHEMA_ARTIFACT,
    load_schema,
};
use staycast_data::{
    CANCEL_COLUMN, cancellation_rate_by, category_counts, column_overview, numeric_summary,
    preview_rows, read_bookings,
};
use staycast_model::{Classifier, FieldValue, RawRecord};

use crate::cli::{ExploreArgs, ModelArgs, OverviewArgs, PredictArgs, SchemaArgs};
use crate::render;

/// Numeric measures the explore command summarizes when none are requested.
const DEFAULT_NUMERIC_COLUMNS: &[&str] = &[
    "lead_time",
    "stays_in_weekend_nights",
    "stays_in_week_nights",
    "adults",
    "children",
    "babies",
    "previous_cancellations",
    "booking_changes",
    "total_of_special_requests",
];

/// Categorical columns the explore command counts when none are requested.
const DEFAULT_CATEGORICAL_COLUMNS: &[&str] = &[
    "hotel",
    "market_segment",
    "deposit_type",
    "customer_type",
    "reserved_room_type",
    "assigned_room_type",
];

/// Grouping columns for the cancellation-rate breakdowns.
const RATE_GROUP_COLUMNS: &[&str] = &["hotel", "market_segment", "deposit_type"];

pub fn run_overview(args: &OverviewArgs) -> Result<()> {
    let df = read_bookings(&args.data)?;
    println!("Dataset: {}", args.data.display());
    println!("Rows: {}  Columns: {}", df.height(), df.width());
    render::print_overview(&column_overview(&df));
    Ok(())
}

pub fn run_explore(args: &ExploreArgs) -> Result<()> {
    let df = read_bookings(&args.data)?;

    let (headers, rows) = preview_rows(&df, args.rows);
    println!("Preview ({} of {} rows):", rows.len(), df.height());
    render::print_preview(&headers, &rows);

    let numeric = requested_or_present(&args.numeric, DEFAULT_NUMERIC_COLUMNS, &df);
    if !numeric.is_empty() {
        let summaries = numeric
            .iter()
            .map(|name| numeric_summary(&df, name))
            .collect::<Result<Vec<_>>>()?;
        println!("Numeric columns:");
        render::print_numeric_summaries(&summaries);
    }

    let categorical = requested_or_present(&args.categorical, DEFAULT_CATEGORICAL_COLUMNS, &df);
    for name in &categorical {
        let counts = category_counts(&df, name, args.top)?;
        render::print_category_counts(name, &counts);
    }

    if df.column(CANCEL_COLUMN).is_ok() {
        for group in RATE_GROUP_COLUMNS {
            if df.column(group).is_err() {
                continue;
            }
            let rates = cancellation_rate_by(&df, group)?;
            println!("Cancellation rate by {group}:");
            render::print_cancellation_rates(group, &rates);
        }
    }

    Ok(())
}

pub fn run_predict(args: &PredictArgs) -> Result<()> {
    let raw = build_record(args)?;
    if raw.is_empty() {
        bail!("no input fields given; pass field flags such as --lead-time or --field NAME=VALUE");
    }

    let config = resolve_model_config(&args.model)?;
    let store = ModelStore::new(config);
    let bundle = store.handle().map_err(|artifact_error| {
        error!(error = %artifact_error, "failed to load model artifacts");
        anyhow::anyhow!("{}", artifact_error.user_message())
    })?;

    let vector = align(&raw, &bundle.schema).context("failed to align input record")?;
    let prediction = bundle
        .classifier
        .score(&vector)
        .context("failed to score input record")?;
    info!(
        outcome = %prediction.outcome,
        probability = prediction.probability,
        fields = raw.len(),
        "prediction complete"
    );

    render::print_prediction(&prediction);
    Ok(())
}

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    let source = resolve_artifact_source(&args.model, &args.model.schema, SCHEMA_ARTIFACT)?;
    let schema = load_schema(&source).map_err(|artifact_error| {
        error!(error = %artifact_error, "failed to load schema artifact");
        anyhow::anyhow!("{}", artifact_error.user_message())
    })?;
    render::print_schema(&schema);
    Ok(())
}

/// The user's explicit column list, or whichever defaults the dataset has.
fn requested_or_present(requested: &[String], defaults: &[&str], df: &DataFrame) -> Vec<String> {
    if !requested.is_empty() {
        return requested.to_vec();
    }
    defaults
        .iter()
        .filter(|name| df.column(name).is_ok())
        .map(|name| (*name).to_string())
        .collect()
}

fn build_record(args: &PredictArgs) -> Result<RawRecord> {
    let mut raw = RawRecord::new();
    if let Some(lead_time) = args.lead_time {
        raw.set("lead_time", lead_time);
    }
    if let Some(adr) = args.adr {
        raw.set("adr", adr);
    }
    if let Some(adults) = args.adults {
        raw.set("adults", adults);
    }
    if let Some(children) = args.children {
        raw.set("children", children);
    }
    if let Some(babies) = args.babies {
        raw.set("babies", babies);
    }
    if let Some(deposit_type) = &args.deposit_type {
        raw.set("deposit_type", deposit_type.clone());
    }
    if let Some(market_segment) = &args.market_segment {
        raw.set("market_segment", market_segment.clone());
    }
    for spec in &args.fields {
        let (name, value) = parse_field(spec)?;
        raw.set(name, value);
    }
    Ok(raw)
}

/// Parse a `--field NAME=VALUE` argument. Values that parse as numbers are
/// numbers; everything else is a category level.
fn parse_field(spec: &str) -> Result<(String, FieldValue)> {
    let Some((name, value)) = spec.split_once('=') else {
        bail!("invalid --field argument (expected NAME=VALUE): {spec}");
    };
    let name = name.trim();
    if name.is_empty() {
        bail!("invalid --field argument (empty name): {spec}");
    }
    let value = value.trim();
    let field_value = match value.parse::<f64>() {
        Ok(number) if number.is_finite() => FieldValue::Number(number),
        _ => FieldValue::Text(value.to_string()),
    };
    Ok((name.to_string(), field_value))
}

fn model_dir(model: &ModelArgs) -> Option<PathBuf> {
    model
        .model_dir
        .clone()
        .or_else(|| std::env::var_os(MODEL_DIR_ENV_VAR).map(PathBuf::from))
}

/// Resolve one artifact: an explicit source wins, otherwise the
/// conventional file inside the model directory.
fn resolve_artifact_source(
    model: &ModelArgs,
    explicit: &Option<String>,
    file_name: &str,
) -> Result<ArtifactSource> {
    if let Some(spec) = explicit {
        return Ok(ArtifactSource::parse(spec));
    }
    match model_dir(model) {
        Some(dir) => Ok(ArtifactSource::Path(dir.join(file_name))),
        None => bail!(
            "no model location given; pass --model-dir (or set {MODEL_DIR_ENV_VAR}), \
             or explicit artifact sources"
        ),
    }
}

fn resolve_model_config(model: &ModelArgs) -> Result<ModelConfig> {
    Ok(ModelConfig::new(
        resolve_artifact_source(model, &model.schema, SCHEMA_ARTIFACT)?,
        resolve_artifact_source(model, &model.forest, FOREST_ARTIFACT)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_flags_parse_numbers_and_text() {
        let (name, value) = parse_field("country=PRT").expect("text field");
        assert_eq!(name, "country");
        assert_eq!(value, FieldValue::Text("PRT".to_string()));

        let (name, value) = parse_field("booking_changes=2").expect("numeric field");
        assert_eq!(name, "booking_changes");
        assert_eq!(value, FieldValue::Number(2.0));
    }

    #[test]
    fn field_flags_require_a_name_and_separator() {
        assert!(parse_field("country").is_err());
        assert!(parse_field("=PRT").is_err());
    }

    #[test]
    fn explicit_sources_bypass_the_model_dir() {
        let model = ModelArgs {
            model_dir: None,
            schema: Some("https://models.example.com/schema.json".to_string()),
            forest: Some("models/forest.json".to_string()),
        };
        let config = resolve_model_config(&model).expect("resolve");
        assert_eq!(
            config.schema,
            ArtifactSource::Url("https://models.example.com/schema.json".to_string())
        );
        assert_eq!(
            config.forest,
            ArtifactSource::Path("models/forest.json".into())
        );
    }
}
