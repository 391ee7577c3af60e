//! `ecorec duplicates` command - near-duplicate catalog entries

use crate::cli::{Cli, DuplicatesArgs};
use crate::commands::format::{print_json, print_records_header, records_line};
use crate::output_by_format_result;
use ecorec_core::error::Result;
use ecorec_core::similarity::find_near_duplicates;
use ecorec_core::store::Store;

/// Execute the duplicates command
pub fn execute(cli: &Cli, store: &Store, args: &DuplicatesArgs) -> Result<()> {
    let catalog = store.load_catalog()?;
    let pairs = find_near_duplicates(&catalog, args.threshold, &store.config().recommend_options());

    let name_at = |position: usize| catalog.get(position).map(|p| p.name()).unwrap_or_default();

    output_by_format_result!(cli.format,
        json => {
            let output: Vec<_> = pairs
                .iter()
                .map(|pair| {
                    serde_json::json!({
                        "first": { "position": pair.first, "name": name_at(pair.first) },
                        "second": { "position": pair.second, "name": name_at(pair.second) },
                        "similarity": pair.similarity,
                    })
                })
                .collect();
            print_json(&output)
        },
        human => {
            if pairs.is_empty() {
                println!("No near-duplicates found (threshold {:.2}).", args.threshold);
            } else {
                if !cli.quiet {
                    println!("Found {} near-duplicate pair(s):", pairs.len());
                }
                for pair in &pairs {
                    println!(
                        "  {:.3}  {} (#{}) ~ {} (#{})",
                        pair.similarity,
                        name_at(pair.first),
                        pair.first + 1,
                        name_at(pair.second),
                        pair.second + 1
                    );
                }
            }
        },
        records => {
            print_records_header(
                "duplicates",
                &[
                    ("threshold", format!("{:.2}", args.threshold)),
                    ("pairs", pairs.len().to_string()),
                ],
            );
            for pair in &pairs {
                println!(
                    "{}",
                    records_line(
                        "D",
                        &[
                            ("first", name_at(pair.first).to_string()),
                            ("second", name_at(pair.second).to_string()),
                            ("similarity", format!("{:.3}", pair.similarity)),
                        ],
                    )
                );
            }
        }
    )
}
