use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// ferry with config discovery pointed at `config_dir`, so the host's own
/// configuration never leaks into a test
pub fn ferry_in(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("ferry");
    cmd.env("FERRY_CONFIG_DIR", config_dir)
        .env_remove("FERRY_CONFIG")
        .env_remove("FERRY_LOG");
    cmd
}

/// Write a TOML edge list and return its path
#[allow(dead_code)]
pub fn write_edges(dir: &Path, name: &str, edges: &[(&str, &str, f64)]) -> PathBuf {
    let mut content = String::new();
    for (from, to, weight) in edges {
        content.push_str(&format!(
            "[[edges]]\nfrom = \"{from}\"\nto = \"{to}\"\nweight = {weight:?}\n\n"
        ));
    }
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// a -> d directly costs 10; a -> b -> c -> d costs 3
#[allow(dead_code)]
pub fn diamond_edges(dir: &Path) -> PathBuf {
    write_edges(
        dir,
        "edges.toml",
        &[
            ("a", "d", 10.0),
            ("a", "b", 1.0),
            ("b", "c", 1.0),
            ("c", "d", 1.0),
            ("x", "a", 1.0),
        ],
    )
}
