//! `ecorec add` command - append a product to the catalog
//!
//! Names are not unique; adding a second product with an existing name is
//! allowed but reported, since lookups by name resolve to the first one.

use crate::cli::{AddArgs, Cli};
use crate::commands::format::{print_json_status, print_records_header, product_json, product_record};
use crate::output_by_format_result;
use ecorec_core::error::Result;
use ecorec_core::product::{EcoFlags, Product};
use ecorec_core::store::Store;

/// Execute the add command
pub fn execute(cli: &Cli, store: &Store, args: &AddArgs) -> Result<()> {
    let flags = EcoFlags::new(args.recyclable, args.organic, args.carbon_neutral);
    let product = Product::new(args.name.trim(), args.category.trim(), args.price, flags)?;
    let existing = store.add_product(&product)?;

    output_by_format_result!(cli.format,
        json => print_json_status(
            "ok",
            Some("Product added"),
            &[
                ("product", product_json(&product)),
                ("same_name", serde_json::json!(existing)),
            ],
        ),
        human => {
            if !cli.quiet {
                println!(
                    "Added '{}' (sustainability score {})",
                    product.name(),
                    product.sustainability_score()
                );
                if existing > 0 {
                    println!(
                        "Note: {} other product(s) already named '{}'; lookups use the first.",
                        existing,
                        product.name()
                    );
                }
            }
        },
        records => {
            print_records_header(
                "add",
                &[("status", "ok".to_string()), ("same_name", existing.to_string())],
            );
            println!("{}", product_record(&product));
        }
    )
}
