//! `ecorec compare` command - side-by-side comparison
//!
//! Needs at least two names; each must exist in the catalog.

use crate::cli::{Cli, CompareArgs};
use crate::commands::format::{print_json, print_records_header, records_line};
use crate::output_by_format_result;
use ecorec_core::compare::compare;
use ecorec_core::error::Result;
use ecorec_core::format::format_price;
use ecorec_core::store::Store;

/// Execute the compare command
pub fn execute(cli: &Cli, store: &Store, args: &CompareArgs) -> Result<()> {
    let catalog = store.load_catalog()?;
    let compared = compare(&catalog, &args.names)?;

    output_by_format_result!(cli.format,
        json => print_json(&compared),
        human => {
            for (i, item) in compared.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("{}", item.name);
                println!("  Category:        {}", item.category);
                println!("  Price:           {}", format_price(item.price));
                println!("  Recyclable:      {}", item.flags.recyclable);
                println!("  Organic:         {}", item.flags.organic);
                println!("  Carbon Neutral:  {}", item.flags.carbon_neutral);
                println!("  Score:           {}", item.sustainability_score);
                println!("  Category Avg:    {:.2}", item.category_average);
            }
        },
        records => {
            print_records_header("compare", &[("products", compared.len().to_string())]);
            for item in &compared {
                println!(
                    "{}",
                    records_line(
                        "C",
                        &[
                            ("name", item.name.clone()),
                            ("category", item.category.clone()),
                            ("price", format_price(item.price)),
                            ("recyclable", item.flags.recyclable.to_string()),
                            ("organic", item.flags.organic.to_string()),
                            ("carbon_neutral", item.flags.carbon_neutral.to_string()),
                            ("score", item.sustainability_score.to_string()),
                            ("category_avg", format!("{:.2}", item.category_average)),
                        ],
                    )
                );
            }
        }
    )
}
