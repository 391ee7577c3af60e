//! Shared output formatting helpers for commands
//!
//! JSON output is pretty-printed. Records output starts with one `H` header
//! line followed by one line per item, each a prefix letter plus `key=value`
//! pairs.

use serde::Serialize;
use serde_json::json;

use ecorec_core::error::Result;
use ecorec_core::format::{escape_record_value, format_price};
use ecorec_core::product::{Attribute, Product};

/// Pretty-print any serializable value as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a JSON status message with optional fields
pub fn print_json_status(
    status: &str,
    message: Option<&str>,
    extra_fields: &[(&str, serde_json::Value)],
) -> Result<()> {
    let mut output = json!({ "status": status });

    if let Some(obj) = output.as_object_mut() {
        if let Some(msg) = message {
            obj.insert("message".to_string(), json!(msg));
        }
        for (key, value) in extra_fields {
            obj.insert(key.to_string(), value.clone());
        }
    }

    print_json(&output)
}

/// Print a Records format header
pub fn print_records_header(mode: &str, extra_fields: &[(&str, String)]) {
    let mut parts = vec!["H ecorec=1 records=1".to_string(), format!("mode={}", mode)];

    for (key, value) in extra_fields {
        parts.push(format!("{}={}", key, value));
    }

    println!("{}", parts.join(" "));
}

/// Join `key=value` pairs into one records line with the given prefix
pub fn records_line(prefix: &str, fields: &[(&str, String)]) -> String {
    let body: Vec<String> = fields
        .iter()
        .map(|(k, v)| format!("{}={}", k, escape_record_value(v)))
        .collect();
    format!("{} {}", prefix, body.join(" "))
}

/// Full product as a JSON object
pub fn product_json(product: &Product) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    obj.insert("name".to_string(), json!(product.name()));
    obj.insert("category".to_string(), json!(product.category()));
    obj.insert("price".to_string(), json!(product.price()));
    for attr in Attribute::ALL {
        obj.insert(
            attr.key().to_string(),
            json!(product.flags().get(attr).to_string()),
        );
    }
    obj.insert(
        "sustainability_score".to_string(),
        json!(product.sustainability_score()),
    );
    serde_json::Value::Object(obj)
}

/// Full product as a `P` records line
pub fn product_record(product: &Product) -> String {
    let mut fields = vec![
        ("name", product.name().to_string()),
        ("category", product.category().to_string()),
        ("price", format_price(product.price())),
    ];
    for attr in Attribute::ALL {
        fields.push((attr.key(), product.flags().get(attr).to_string()));
    }
    fields.push(("score", product.sustainability_score().to_string()));
    records_line("P", &fields)
}

/// Human table of full products
pub fn print_product_table(products: &[&Product]) {
    let width = products
        .iter()
        .map(|p| p.name().chars().count())
        .max()
        .unwrap_or(0)
        .max("Product".len());

    println!(
        "{:<width$}  {:<10}  {:<7}  {:<14}  {:>5}  {:>8}",
        "Product",
        "Recyclable",
        "Organic",
        "Carbon Neutral",
        "Score",
        "Price",
        width = width
    );
    for product in products {
        let flags = product.flags();
        println!(
            "{:<width$}  {:<10}  {:<7}  {:<14}  {:>5}  {:>8}",
            product.name(),
            flags.recyclable.to_string(),
            flags.organic.to_string(),
            flags.carbon_neutral.to_string(),
            product.sustainability_score(),
            format_price(product.price()),
            width = width
        );
    }
}

/// Name, score and price only
pub fn summary_json(product: &Product) -> serde_json::Value {
    json!({
        "name": product.name(),
        "sustainability_score": product.sustainability_score(),
        "price": product.price(),
    })
}

/// Name, score and price as a records line
pub fn summary_record(prefix: &str, name: &str, score: u8, price: f64) -> String {
    records_line(
        prefix,
        &[
            ("name", name.to_string()),
            ("score", score.to_string()),
            ("price", format_price(price)),
        ],
    )
}

/// Human table of name, score and price
pub fn print_summary_table<'a>(rows: impl IntoIterator<Item = (&'a str, u8, f64)>) {
    let rows: Vec<(&str, u8, f64)> = rows.into_iter().collect();
    let width = rows
        .iter()
        .map(|(name, _, _)| name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Product".len());

    println!("{:<width$}  {:>5}  {:>8}", "Product", "Score", "Price", width = width);
    for (name, score, price) in rows {
        println!(
            "{:<width$}  {:>5}  {:>8}",
            name,
            score,
            format_price(price),
            width = width
        );
    }
}
