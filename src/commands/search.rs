//! `ecorec search` command - find products by name
//!
//! Matching is a case-insensitive substring test. Each search is appended to
//! the search log that feeds the dashboard's most-searched terms.

use tracing::warn;

use crate::cli::{Cli, SearchArgs};
use crate::commands::format::{
    print_json, print_product_table, print_records_header, product_json, product_record,
};
use crate::output_by_format_result;
use ecorec_core::error::Result;
use ecorec_core::query::{search_by_name, sort_products};
use ecorec_core::store::Store;

/// Execute the search command
pub fn execute(cli: &Cli, store: &Store, args: &SearchArgs) -> Result<()> {
    let catalog = store.load_catalog()?;

    let mut products = search_by_name(&catalog, &args.term);
    sort_products(&mut products, args.sort);

    // A failed log write should not lose the results
    if !args.no_log && !args.term.trim().is_empty() {
        if let Err(e) = store.log_search(&args.term) {
            warn!(error = %e, "failed to record search term");
        }
    }

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "term": args.term,
                "products": products.iter().map(|p| product_json(p)).collect::<Vec<_>>(),
            });
            print_json(&output)
        },
        human => {
            if products.is_empty() {
                println!("No products found matching '{}'.", args.term);
            } else {
                if !cli.quiet {
                    println!("Search results for '{}':", args.term);
                }
                print_product_table(&products);
            }
        },
        records => {
            print_records_header(
                "search",
                &[
                    ("term", ecorec_core::format::escape_record_value(&args.term)),
                    ("products", products.len().to_string()),
                ],
            );
            for product in &products {
                println!("{}", product_record(product));
            }
        }
    )
}
