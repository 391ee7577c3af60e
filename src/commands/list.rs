//! `ecorec list` command - list products
//!
//! Filters by category and attribute switches, then applies the sort order.
//! When a filter matches nothing, a few highly sustainable alternatives are
//! suggested instead.

use crate::cli::{Cli, ListArgs};
use crate::commands::format::{
    print_json, print_product_table, print_records_header, print_summary_table, product_json,
    product_record, summary_json, summary_record,
};
use crate::output_by_format_result;
use ecorec_core::error::Result;
use ecorec_core::product::{Attribute, Product};
use ecorec_core::query::{alternatives, sort_products, ProductFilter};
use ecorec_core::store::Store;

fn build_filter(args: &ListArgs) -> ProductFilter {
    let mut filter = ProductFilter::new();
    if let Some(category) = &args.category {
        filter = filter.with_category(category.clone());
    }
    let switches = [
        (args.recyclable, Attribute::Recyclable),
        (args.organic, Attribute::Organic),
        (args.carbon_neutral, Attribute::CarbonNeutral),
    ];
    for (on, attribute) in switches {
        if on {
            filter = filter.require(attribute);
        }
    }
    filter
}

/// Execute the list command
pub fn execute(cli: &Cli, store: &Store, args: &ListArgs) -> Result<()> {
    let catalog = store.load_catalog()?;
    let filter = build_filter(args);

    let mut products = filter.apply(&catalog);
    sort_products(&mut products, args.sort);

    let picks = &store.config().picks;
    let suggestions: Vec<&Product> = if products.is_empty() && !filter.is_empty() {
        alternatives(&catalog, picks.high_score_threshold, picks.alternatives)
    } else {
        Vec::new()
    };

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "products": products.iter().map(|p| product_json(p)).collect::<Vec<_>>(),
                "alternatives": suggestions.iter().map(|p| summary_json(p)).collect::<Vec<_>>(),
            });
            print_json(&output)
        },
        human => {
            if !products.is_empty() {
                print_product_table(&products);
            } else if catalog.is_empty() {
                println!("The catalog is empty.");
            } else {
                println!("No products match the selected filters.");
                if !suggestions.is_empty() {
                    println!();
                    println!("Try these alternatives:");
                    print_summary_table(suggestions.iter().map(|p| {
                        (p.name(), p.sustainability_score(), p.price())
                    }));
                }
            }
        },
        records => {
            print_records_header(
                "list",
                &[
                    ("products", products.len().to_string()),
                    ("sort", args.sort.to_string()),
                ],
            );
            for product in &products {
                println!("{}", product_record(product));
            }
            for p in &suggestions {
                println!(
                    "{}",
                    summary_record("A", p.name(), p.sustainability_score(), p.price())
                );
            }
        }
    )
}
