//! `ecorec picks` command - top eco-friendly picks
//!
//! Perfect-score products, cheapest first.

use crate::cli::{Cli, PicksArgs};
use crate::commands::format::{
    print_json, print_records_header, print_summary_table, summary_json, summary_record,
};
use crate::output_by_format_result;
use ecorec_core::error::Result;
use ecorec_core::query::{highly_sustainable, top_picks};
use ecorec_core::store::Store;

/// Execute the picks command
pub fn execute(cli: &Cli, store: &Store, args: &PicksArgs) -> Result<()> {
    let catalog = store.load_catalog()?;
    let config = &store.config().picks;
    let limit = args.limit.unwrap_or(config.top_picks);

    let picks = top_picks(&catalog, limit);
    let highly = highly_sustainable(&catalog, config.high_score_threshold).len();

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "picks": picks.iter().map(|p| summary_json(p)).collect::<Vec<_>>(),
                "highly_sustainable": highly,
                "high_score_threshold": config.high_score_threshold,
            });
            print_json(&output)
        },
        human => {
            if picks.is_empty() {
                println!("No products with a perfect sustainability score yet.");
            } else {
                if !cli.quiet {
                    println!("Top eco-friendly picks:");
                }
                print_summary_table(
                    picks
                        .iter()
                        .map(|p| (p.name(), p.sustainability_score(), p.price())),
                );
            }
            if !cli.quiet {
                println!();
                println!(
                    "{} product(s) score {} or higher.",
                    highly, config.high_score_threshold
                );
            }
        },
        records => {
            print_records_header(
                "picks",
                &[
                    ("picks", picks.len().to_string()),
                    ("highly_sustainable", highly.to_string()),
                ],
            );
            for p in &picks {
                println!(
                    "{}",
                    summary_record("P", p.name(), p.sustainability_score(), p.price())
                );
            }
        }
    )
}
