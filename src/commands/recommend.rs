//! `ecorec recommend` command - similar products by name and category
//!
//! An unknown product, an empty catalog or a zero limit is not an error: the
//! result is simply empty and the status says why.

use crate::cli::{Cli, RecommendArgs};
use crate::commands::format::{
    print_json, print_records_header, print_summary_table, summary_record,
};
use crate::output_by_format_result;
use ecorec_core::error::Result;
use ecorec_core::similarity::{recommend, Recommendations};
use ecorec_core::store::Store;

/// Negative limits behave like zero
fn effective_top_n(requested: Option<i64>, default: usize) -> usize {
    match requested {
        Some(n) => usize::try_from(n).unwrap_or(0),
        None => default,
    }
}

/// Execute the recommend command
pub fn execute(cli: &Cli, store: &Store, args: &RecommendArgs) -> Result<()> {
    let catalog = store.load_catalog()?;
    let config = store.config();
    let top_n = effective_top_n(args.top_n, config.recommend.top_n);

    let recs: Recommendations = recommend(
        &catalog,
        &args.name,
        top_n,
        &config.recommend_options(),
    );
    tracing::debug!(status = recs.status.code(), items = recs.items.len(), "recommend");

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "query": args.name,
                "top_n": top_n,
                "status": recs.status.code(),
                "recommendations": recs.items,
            });
            print_json(&output)
        },
        human => {
            if recs.is_empty() {
                println!("No recommendations found.");
            } else {
                if !cli.quiet {
                    println!("Recommended for '{}':", args.name);
                }
                print_summary_table(
                    recs.items
                        .iter()
                        .map(|r| (r.name.as_str(), r.sustainability_score, r.price)),
                );
            }
        },
        records => {
            print_records_header(
                "recommend",
                &[
                    ("status", recs.status.code().to_string()),
                    ("items", recs.items.len().to_string()),
                ],
            );
            for r in &recs.items {
                println!(
                    "{}",
                    summary_record("R", &r.name, r.sustainability_score, r.price)
                );
            }
        }
    )
}
