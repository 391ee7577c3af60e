//! `ecorec stats` command - dashboard overview
//!
//! Prints the numbers behind the dashboard and chart views: totals, the score
//! histogram, per-category averages, attribute spread and top search terms.

use crate::cli::Cli;
use crate::commands::format::{print_json, print_records_header, records_line};
use crate::output_by_format_result;
use ecorec_core::error::Result;
use ecorec_core::stats::{compute_stats, CatalogStats};
use ecorec_core::store::Store;

fn output_human(stats: &CatalogStats) {
    println!("Total products:          {}", stats.total_products);
    println!("Avg. sustainability:     {:.2}", stats.average_score);
    if !stats.categories.is_empty() {
        println!("Categories:              {}", stats.categories.join(", "));
    }

    println!();
    println!("Score distribution:");
    for bucket in &stats.score_distribution {
        println!("  {}  {:>4}  {}", bucket.score, bucket.count, "#".repeat(bucket.count));
    }

    if !stats.category_averages.is_empty() {
        println!();
        println!("Average score by category:");
        let width = stats
            .category_averages
            .iter()
            .map(|c| c.category.chars().count())
            .max()
            .unwrap_or(0);
        for cat in &stats.category_averages {
            println!(
                "  {:<width$}  {:.2}  ({} products)",
                cat.category,
                cat.average_score,
                cat.products,
                width = width
            );
        }
    }

    println!();
    println!("Feature spread:");
    let total_yes: usize = stats.feature_spread.iter().map(|f| f.count).sum();
    for feature in &stats.feature_spread {
        let share = if total_yes == 0 {
            0.0
        } else {
            feature.count as f64 * 100.0 / total_yes as f64
        };
        println!("  {:<15} {:>4}  {:>5.1}%", feature.attribute, feature.count, share);
    }

    if !stats.top_search_terms.is_empty() {
        println!();
        println!("Most searched:");
        for term in &stats.top_search_terms {
            println!("  {:>4}  {}", term.count, term.term);
        }
    }
}

fn output_records(stats: &CatalogStats) {
    print_records_header(
        "stats",
        &[
            ("products", stats.total_products.to_string()),
            ("avg_score", format!("{:.2}", stats.average_score)),
        ],
    );
    for category in &stats.categories {
        println!("{}", records_line("K", &[("category", category.clone())]));
    }
    for bucket in &stats.score_distribution {
        println!(
            "{}",
            records_line(
                "S",
                &[
                    ("score", bucket.score.to_string()),
                    ("count", bucket.count.to_string()),
                ],
            )
        );
    }
    for cat in &stats.category_averages {
        println!(
            "{}",
            records_line(
                "G",
                &[
                    ("category", cat.category.clone()),
                    ("avg_score", format!("{:.2}", cat.average_score)),
                    ("products", cat.products.to_string()),
                ],
            )
        );
    }
    for feature in &stats.feature_spread {
        println!(
            "{}",
            records_line(
                "F",
                &[
                    ("attribute", feature.attribute.clone()),
                    ("count", feature.count.to_string()),
                ],
            )
        );
    }
    for term in &stats.top_search_terms {
        println!(
            "{}",
            records_line(
                "T",
                &[("term", term.term.clone()), ("count", term.count.to_string())],
            )
        );
    }
}

/// Execute the stats command
pub fn execute(cli: &Cli, store: &Store) -> Result<()> {
    let catalog = store.load_catalog()?;
    let terms = store.search_terms()?;
    let stats = compute_stats(&catalog, &terms);

    output_by_format_result!(cli.format,
        json => print_json(&stats),
        human => { output_human(&stats); },
        records => { output_records(&stats); }
    )
}
