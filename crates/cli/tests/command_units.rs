mod common;

use prg_core::report::ReportFormat;
use prg_core::BatchStats;
use prg_extract::commands::{extract_command, inspect_command, ExtractArgs};
use prg_extract::{write_report, LogLevel};
use tempfile::tempdir;
use tracing::Level;

#[test]
fn extract_command_returns_stats_and_writes_report() {
    let dir = tempdir().unwrap();
    common::populate_mixed_dir(dir.path());
    let out = dir.path().join("report.json");

    let args = ExtractArgs {
        dir: Some(dir.path().to_path_buf()),
        output: Some(out.clone()),
        ..ExtractArgs::default()
    };
    let stats = extract_command(&args).unwrap();
    assert_eq!(
        stats,
        BatchStats { total_files: 2, success_count: 1, error_count: 1, total_jobs: 2 }
    );

    let body: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

#[test]
fn extract_command_errors_for_missing_dir() {
    let dir = tempdir().unwrap();
    let args = ExtractArgs { dir: Some(dir.path().join("missing")), ..ExtractArgs::default() };
    let err = extract_command(&args).unwrap_err();
    assert!(err.to_string().contains("Failed to read PRG directory"), "unexpected error: {err}");
}

#[test]
fn cli_overrides_take_precedence_over_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("extract.yaml");
    std::fs::write(&config, "input_dir: /from/config\nextension: grp\nformat: yaml\n").unwrap();

    let args = ExtractArgs {
        dir: Some("/from/cli".into()),
        config: Some(config.clone()),
        format: Some(ReportFormat::Json),
        ..ExtractArgs::default()
    };
    let resolved = args.resolve().unwrap();
    assert_eq!(resolved.input_dir, std::path::PathBuf::from("/from/cli"));
    assert_eq!(resolved.extension, "grp");
    assert_eq!(resolved.format, ReportFormat::Json);
    assert!(!resolved.parallel);

    let args = ExtractArgs { config: Some(config), parallel: true, ..ExtractArgs::default() };
    let resolved = args.resolve().unwrap();
    assert_eq!(resolved.input_dir, std::path::PathBuf::from("/from/config"));
    assert_eq!(resolved.format, ReportFormat::Yaml);
    assert!(resolved.parallel);
}

#[test]
fn extract_command_surfaces_bad_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("extract.json");
    std::fs::write(&config, "not-json").unwrap();
    let args = ExtractArgs { config: Some(config), ..ExtractArgs::default() };
    let err = extract_command(&args).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config JSON"), "unexpected error: {err}");
}

#[test]
fn inspect_command_returns_summary() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("C_KMB46.prg");
    std::fs::write(&file, common::prg_with_jobs(&[("INITIALISIERUNG", 5), ("IDENT", 6)])).unwrap();
    let out = dir.path().join("summary.yaml");

    let report = inspect_command(&file, ReportFormat::Yaml, Some(&out)).unwrap();
    assert_eq!(report.filename, "C_KMB46.prg");
    assert_eq!(report.summary.version, 2);
    assert_eq!(report.summary.jobs.len(), 2);

    let body = std::fs::read_to_string(&out).unwrap();
    assert!(body.contains("filename: C_KMB46.prg"), "unexpected body:\n{body}");
}

#[test]
fn inspect_command_errors_for_missing_file() {
    let dir = tempdir().unwrap();
    let err = inspect_command(&dir.path().join("nope.prg"), ReportFormat::Json, None).unwrap_err();
    assert!(err.to_string().contains("Failed to read PRG file"));
}

#[test]
fn write_report_reports_unwritable_path() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("missing-dir").join("out.json");
    let err = write_report("[]\n", Some(&target)).unwrap_err();
    assert!(err.to_string().contains("Failed to write report"));
}

#[test]
fn log_levels_map_to_tracing_levels() {
    assert_eq!(Level::from(LogLevel::Trace), Level::TRACE);
    assert_eq!(Level::from(LogLevel::Warn), Level::WARN);
    assert_eq!(Level::from(LogLevel::Error), Level::ERROR);
}
