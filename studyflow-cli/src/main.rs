//! Studyflow - flow layout from the command line.
//!
//! Reads a layout request, runs one pass and prints the placements as JSON.

mod cli;
mod logging;

use std::fs::File;
use std::io::{BufReader, Read};

use anyhow::{Context, Result};
use clap::Parser;
use studyflow_layout::{FlowConfig, LayoutRequest};

use crate::cli::Args;
use crate::logging::setup_logging;

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    tracing::debug!("Starting studyflow layout");

    let output = run(&args, std::io::stdin().lock())?;
    println!("{output}");
    Ok(())
}

/// Run one request end to end and return the serialized response.
fn run(args: &Args, stdin: impl Read) -> Result<String> {
    let config = match &args.config {
        Some(path) => FlowConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FlowConfig::default(),
    };

    let mut request = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open request {}", path.display()))?;
            LayoutRequest::from_reader(BufReader::new(file))
                .with_context(|| format!("Invalid request {}", path.display()))?
        }
        None => LayoutRequest::from_reader(stdin).context("Invalid request on stdin")?,
    };

    if let Some(width) = args.width {
        request.width = Some(width);
    }
    if let Some(spacing) = args.spacing {
        request.spacing = Some(spacing);
    }

    if !request.proposal().has_bounded_width() {
        tracing::warn!("No finite container width given; layout will be empty");
    }

    let response = request.run(&config)?;
    tracing::info!(
        items = request.items.len(),
        rows = response.rows.len(),
        "Layout complete"
    );

    let json = if args.compact {
        serde_json::to_string(&response)?
    } else {
        serde_json::to_string_pretty(&response)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use studyflow_layout::LayoutResponse;

    const REQUEST: &str = r#"{
        "width": 65,
        "spacing": 5,
        "items": [
            {"id": "a", "width": 30, "height": 10},
            {"id": "b", "width": 30, "height": 20},
            {"id": "c", "width": 10, "height": 10}
        ]
    }"#;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("studyflow").chain(argv.iter().copied()))
    }

    fn parse(output: &str) -> LayoutResponse {
        serde_json::from_str(output).unwrap()
    }

    #[test]
    fn test_reads_stdin() {
        let output = run(&args(&[]), REQUEST.as_bytes()).unwrap();
        let response = parse(&output);
        assert_eq!(response.rows, vec![vec!["a", "b"], vec!["c"]]);
        assert_eq!(response.height, 35.0);
    }

    #[test]
    fn test_reads_file_with_width_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(REQUEST.as_bytes()).unwrap();
        let path = file.path().to_str().unwrap();

        let argv = args(&[path, "--width", "200", "--compact"]);
        let output = run(&argv, std::io::empty()).unwrap();
        assert!(!output.contains('\n'));
        let response = parse(&output);
        assert_eq!(response.width, 200.0);
        assert_eq!(response.rows.len(), 1);
    }

    #[test]
    fn test_config_and_spacing_flag() {
        let mut config = tempfile::NamedTempFile::new().unwrap();
        config.write_all(br#"{"origin": {"x": 10, "y": 20}}"#).unwrap();
        let config_path = config.path().to_str().unwrap();

        let request = r#"{"width": 100, "items": [
            {"id": "a", "width": 40, "height": 10},
            {"id": "b", "width": 40, "height": 10}
        ]}"#;
        let argv = args(&["--config", config_path, "--spacing", "30"]);
        let output = run(&argv, request.as_bytes()).unwrap();
        let response = parse(&output);
        assert_eq!(response.rows.len(), 2);
        assert_eq!(response.placements[0].x, 10.0);
        assert_eq!(response.placements[1].y, 60.0);
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = run(&args(&[missing.to_str().unwrap()]), std::io::empty()).unwrap_err();
        assert!(err.to_string().contains("Failed to open request"));
    }

    #[test]
    fn test_duplicate_ids_fail() {
        let request = r#"{"width": 100, "items": [
            {"id": "a", "width": 1, "height": 1},
            {"id": "a", "width": 1, "height": 1}
        ]}"#;
        let err = run(&args(&[]), request.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("duplicate item id"));
    }

    #[test]
    fn test_non_finite_width_gives_empty_layout() {
        for width in ["inf", "NaN"] {
            let output = run(&args(&["--width", width]), REQUEST.as_bytes()).unwrap();
            let response = parse(&output);
            assert!(response.rows.is_empty());
            assert!(response.placements.is_empty());
            assert_eq!(response.height, 0.0);
        }
    }

    #[test]
    fn test_verbosity_flag() {
        assert_eq!(args(&["-vv"]).verbose, 2);
    }
}
