//! Output modes and JSON file writers.

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// How fetched host records are laid out on disk.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// One combined JSON array of all records
    #[default]
    Combo,
    /// One JSON file per target
    Single,
    /// Both per-target files and the combined array
    Mix,
}

impl OutputMode {
    /// Whether this mode writes a per-target file for each record.
    #[must_use]
    pub const fn writes_single(self) -> bool {
        matches!(self, Self::Single | Self::Mix)
    }

    /// Whether this mode accumulates records into the combined file.
    #[must_use]
    pub const fn writes_combined(self) -> bool {
        matches!(self, Self::Combo | Self::Mix)
    }
}

/// Path of the per-target file for `target`.
#[must_use]
pub fn host_path(prefix: &str, target: &str) -> PathBuf {
    PathBuf::from(format!("{prefix}_{target}.json"))
}

/// Path of the combined file.
#[must_use]
pub fn combined_path(prefix: &str) -> PathBuf {
    PathBuf::from(format!("{prefix}_combined_hosts.json"))
}

/// Write one host record to its per-target file, overwriting any
/// existing file of that name.
pub fn write_host(prefix: &str, target: &str, record: &Value) -> Result<()> {
    let path = host_path(prefix, target);
    fs::write(&path, serde_json::to_string_pretty(record)?)?;
    Ok(())
}

/// Write the combined array of all fetched records. An empty run still
/// produces a file containing `[]`.
pub fn write_combined(prefix: &str, records: &[Value]) -> Result<()> {
    let path = combined_path(prefix);
    fs::write(&path, serde_json::to_string_pretty(records)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn prefix_in(dir: &TempDir) -> String {
        dir.path().join("t").to_string_lossy().into_owned()
    }

    #[test]
    fn mode_write_policy() {
        assert!(!OutputMode::Combo.writes_single());
        assert!(OutputMode::Combo.writes_combined());
        assert!(OutputMode::Single.writes_single());
        assert!(!OutputMode::Single.writes_combined());
        assert!(OutputMode::Mix.writes_single());
        assert!(OutputMode::Mix.writes_combined());
    }

    #[test]
    fn paths_follow_naming_scheme() {
        assert_eq!(host_path("t", "8.8.8.8"), PathBuf::from("t_8.8.8.8.json"));
        assert_eq!(
            combined_path("shirt"),
            PathBuf::from("shirt_combined_hosts.json")
        );
    }

    #[test]
    fn host_file_is_pretty_printed_and_overwritten() {
        let dir = TempDir::new().unwrap();
        let prefix = prefix_in(&dir);

        write_host(&prefix, "example.com", &json!({"total": 1})).unwrap();
        write_host(&prefix, "example.com", &json!({"total": 2})).unwrap();

        let text = fs::read_to_string(host_path(&prefix, "example.com")).unwrap();
        assert!(text.contains('\n'), "expected pretty-printed JSON");
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["total"], 2);
    }

    #[test]
    fn combined_file_keeps_order_and_handles_empty() {
        let dir = TempDir::new().unwrap();
        let prefix = prefix_in(&dir);

        write_combined(&prefix, &[]).unwrap();
        let text = fs::read_to_string(combined_path(&prefix)).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&text).unwrap(), json!([]));

        let records = vec![json!({"ip_str": "8.8.8.8"}), json!({"total": 0})];
        write_combined(&prefix, &records).unwrap();
        let text = fs::read_to_string(combined_path(&prefix)).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["ip_str"], "8.8.8.8");
        assert_eq!(value[1]["total"], 0);
    }
}
