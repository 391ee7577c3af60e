use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Catalog used by most tests; the first three rows are the recommendation
/// worked example.
pub const SAMPLE_CATALOG: &str = "\
Product Name,Category,Price,Recyclable,Organic,Carbon Neutral
Bamboo Toothbrush,Personal Care,50,Yes,Yes,No
Bamboo Comb,Personal Care,40,Yes,No,No
Plastic Bottle,Drinkware,20,No,No,No
Steel Bottle,Drinkware,300,Yes,No,Yes
Organic Tote,Bags,120,Yes,Yes,Yes
Cotton Mesh Bag,Bags,80,Yes,Yes,Yes
";

/// Get a Command for ecorec
pub fn ecorec() -> Command {
    cargo_bin_cmd!("ecorec")
}

/// Get a Command for ecorec rooted at `root`
pub fn ecorec_at(root: &Path) -> Command {
    let mut cmd = ecorec();
    cmd.env_remove("ECOREC_ROOT").arg("--root").arg(root);
    cmd
}

/// Initialize an empty store
pub fn setup_store() -> TempDir {
    let dir = TempDir::new().unwrap();
    ecorec_at(dir.path()).arg("init").assert().success();
    dir
}

/// Initialize a store and replace its catalog with [`SAMPLE_CATALOG`]
pub fn setup_sample_store() -> TempDir {
    let dir = setup_store();
    fs::write(dir.path().join("products.csv"), SAMPLE_CATALOG).unwrap();
    dir
}

/// Run a command with `--format json` and parse stdout
pub fn run_json(root: &Path, args: &[&str]) -> serde_json::Value {
    let output = ecorec_at(root)
        .args(["--format", "json"])
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
