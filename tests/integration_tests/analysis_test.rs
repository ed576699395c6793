// tests/integration_tests/analysis_test.rs
use super::common::{create_sprint_file, setup_test_directory};
use anyhow::Result;
use sprint_report::{
    AnalysisResult, ReportError, analyze_file, analyze_sprint_data, analyze_sprint_data_within,
};

#[test]
fn test_sprint_breakdown() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let path = temp_dir.path().join("sprint_data.csv");

    let result = analyze_file(&path, temp_dir.path())?;

    assert_eq!(result.total_tickets, 5);
    assert_eq!(result.status_counts.get("Done"), Some(3));
    assert_eq!(result.status_counts.get("In Progress"), Some(1));
    assert_eq!(result.status_counts.get("Blocked"), Some(1));
    assert!((result.percentage("Done").unwrap_or_default() - 60.0).abs() < 1e-9);
    assert!((result.percentage("In Progress").unwrap_or_default() - 20.0).abs() < 1e-9);
    assert!((result.percentage("Blocked").unwrap_or_default() - 20.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_percentages_match_counts() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let statuses = [
        "To Do", "Done", "Review", "Done", "Blocked", "To Do", "Done", "In Progress", "Done",
        "Review", "Done",
    ];
    let path = create_sprint_file(temp_dir.path(), "sprint.csv", &statuses)?;

    let result = analyze_file(&path, temp_dir.path())?;

    assert_eq!(result.status_counts.total(), result.total_tickets);
    for entry in result.status_counts.iter() {
        let expected = 100.0 * entry.count as f64 / result.total_tickets as f64;
        let actual = result.percentage(&entry.status).unwrap_or_default();
        assert!((actual - expected).abs() < 1e-9, "{}: {actual}", entry.status);
    }
    Ok(())
}

#[test]
fn test_empty_file_yields_empty_result() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let mut out = Vec::new();

    let result = analyze_sprint_data_within(
        &temp_dir.path().join("empty.csv"),
        temp_dir.path(),
        &mut out,
    )?;

    assert_eq!(result, AnalysisResult::empty());
    assert!(out.is_empty(), "no report for an empty sprint");
    Ok(())
}

#[test]
fn test_latin1_export() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let path = temp_dir.path().join("legacy/latin1.csv");

    let result = analyze_file(&path, temp_dir.path())?;

    assert_eq!(result.total_tickets, 3);
    assert_eq!(result.status_counts.get("Terminé"), Some(2));
    assert_eq!(result.status_counts.get("Bloqué"), Some(1));
    Ok(())
}

#[test]
fn test_repeated_analysis_is_identical() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let path = temp_dir.path().join("sprint_data.csv");

    let first = analyze_file(&path, temp_dir.path())?;
    let second = analyze_file(&path, temp_dir.path())?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_relative_path_resolves_against_working_directory() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let temp_dir = tempfile::TempDir::new_in(&cwd)?;
    let path = create_sprint_file(temp_dir.path(), "sprint.csv", &["Done"])?;
    let relative = path.strip_prefix(&cwd)?;

    let result = analyze_file(relative, &cwd)?;

    assert_eq!(result.total_tickets, 1);
    Ok(())
}

#[test]
fn test_analyze_sprint_data_guards_working_directory() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let inside = tempfile::TempDir::new_in(&cwd)?;
    let path = create_sprint_file(inside.path(), "sprint.csv", &["Done", "Blocked"])?;

    let result = analyze_sprint_data(&path)?;
    assert_eq!(result.total_tickets, 2);

    let outside = tempfile::TempDir::new()?;
    let stray = create_sprint_file(outside.path(), "sprint.csv", &["Done"])?;
    if !stray.canonicalize()?.starts_with(cwd.canonicalize()?) {
        assert!(matches!(
            analyze_sprint_data(&stray),
            Err(ReportError::PathViolation { .. })
        ));
    }
    Ok(())
}
