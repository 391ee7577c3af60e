//! `ecorec init` command - create a new store
//!
//! Writes `ecorec.toml` (unless present) and a header-only catalog. Refuses to
//! overwrite an existing catalog.

use std::path::Path;

use crate::cli::Cli;
use crate::commands::format::{print_json_status, print_records_header};
use crate::output_by_format_result;
use ecorec_core::error::Result;
use ecorec_core::store::Store;

/// Execute the init command
pub fn execute(cli: &Cli, root: &Path) -> Result<()> {
    let store = Store::init(root)?;
    let catalog = store.catalog_path().display().to_string();

    output_by_format_result!(cli.format,
        json => print_json_status(
            "ok",
            Some("Store initialized"),
            &[
                ("store", serde_json::json!(store.root().display().to_string())),
                ("catalog", serde_json::json!(catalog)),
            ],
        ),
        human => {
            if !cli.quiet {
                println!("Initialized ecorec store at {}", store.root().display());
                println!("Catalog: {}", catalog);
            }
        },
        records => {
            print_records_header(
                "init",
                &[
                    ("store", store.root().display().to_string()),
                    ("status", "ok".to_string()),
                ],
            );
        }
    )
}
