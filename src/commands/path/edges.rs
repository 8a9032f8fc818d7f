//! TOML edge lists
//!
//! ```toml
//! [[edges]]
//! from = "a"
//! to = "b"
//! weight = 2.5   # optional, defaults to 1
//! ```

use std::fs;
use std::path::Path;

use ferry_core::error::{FerryError, Result};
use ferry_core::graph::{EdgeStore, Weight};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct EdgeList {
    #[serde(default)]
    edges: Vec<EdgeEntry>,
}

#[derive(Debug, Deserialize)]
struct EdgeEntry {
    from: String,
    to: String,
    #[serde(default = "default_weight")]
    weight: f64,
}

fn default_weight() -> f64 {
    Weight::DEFAULT.value()
}

/// Parse edge list text into a store, in file order
pub fn parse_edge_list(content: &str, path: &Path) -> Result<EdgeStore<String>> {
    let list: EdgeList =
        toml::from_str(content).map_err(|e| FerryError::invalid_input(path, e))?;

    let mut store = EdgeStore::new();
    for entry in list.edges {
        store.add_edge(entry.from, entry.to, entry.weight)?;
    }
    Ok(store)
}

/// Load an edge list file
pub fn load_edge_list(path: &Path) -> Result<EdgeStore<String>> {
    if !path.is_file() {
        return Err(FerryError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_edge_list(&content, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferry_core::error::ExitCode;

    #[test]
    fn test_parse_keeps_file_order_and_default_weight() {
        let store = parse_edge_list(
            r#"
[[edges]]
from = "a"
to = "c"

[[edges]]
from = "a"
to = "b"
weight = 0.5
"#,
            Path::new("edges.toml"),
        )
        .unwrap();

        let targets: Vec<&str> = store
            .neighbors_of(&"a".to_string())
            .map(|edge| edge.to.as_str())
            .collect();
        assert_eq!(targets, vec!["c", "b"]);
        assert_eq!(
            store.weight_of(&"a".to_string(), &"c".to_string()),
            Some(Weight::DEFAULT)
        );
    }

    #[test]
    fn test_negative_weight_is_usage_error() {
        let err = parse_edge_list(
            "[[edges]]\nfrom = \"a\"\nto = \"b\"\nweight = -2\n",
            Path::new("edges.toml"),
        )
        .unwrap_err();
        assert!(matches!(err, FerryError::InvalidWeight { .. }));
        assert_eq!(err.exit_code(), ExitCode::Usage);
    }

    #[test]
    fn test_malformed_file_is_data_error() {
        let err = parse_edge_list("[[edges]]\nfrom = \"a\"\n", Path::new("edges.toml")).unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::Data);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_edge_list(&dir.path().join("none.toml")).unwrap_err();
        assert!(matches!(err, FerryError::FileNotFound { .. }));
    }
}
