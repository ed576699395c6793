// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SPRINT_STATUSES: [&str; 5] = ["Done", "Done", "In Progress", "Done", "Blocked"];

pub fn create_test_file(dir: &Path, name: &str, content: &[u8]) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content)?;
    Ok(path)
}

/// Writes a ticket export with one row per status, numbered `SPR-1`, `SPR-2`, ...
pub fn create_sprint_file(dir: &Path, name: &str, statuses: &[&str]) -> Result<PathBuf> {
    let mut content = String::from("Ticket ID,Summary,Status,Assignee\n");
    for (index, status) in statuses.iter().enumerate() {
        let number = index + 1;
        content.push_str(&format!("SPR-{number},\"Task {number}, part A\",{status},dev{number}\n"));
    }
    create_test_file(dir, name, content.as_bytes())
}

pub fn setup_test_directory() -> Result<TempDir> {
    populate_test_directory(TempDir::new()?)
}

/// Same layout as [`setup_test_directory`], created under `parent`.
pub fn setup_test_directory_in(parent: &Path) -> Result<TempDir> {
    populate_test_directory(TempDir::new_in(parent)?)
}

fn populate_test_directory(temp_dir: TempDir) -> Result<TempDir> {

    create_sprint_file(temp_dir.path(), "sprint_data.csv", &SPRINT_STATUSES)?;
    create_test_file(temp_dir.path(), "empty.csv", b"Ticket ID,Status\n")?;
    create_test_file(temp_dir.path(), "notes.txt", b"Ticket ID,Status\nT-1,Done\n")?;
    create_test_file(
        temp_dir.path(),
        "no_status.csv",
        b"Ticket ID,State\nT-1,Done\n",
    )?;
    create_test_file(
        temp_dir.path(),
        "legacy/latin1.csv",
        b"Ticket ID,Status\nT-1,Termin\xe9\nT-2,Termin\xe9\nT-3,Bloqu\xe9\n",
    )?;

    Ok(temp_dir)
}
