//! CSV persistence for the catalog
//!
//! The catalog file uses the header row in [`CATALOG_HEADERS`]. A stored
//! `Sustainability Score` column is tolerated and ignored; the score is always
//! recomputed from the flags.
//!
//! Only headers, prices and flag cells are trimmed. Name and category cells
//! are kept exactly as written, so ` Cork Mat` and `Cork Mat` are different
//! products.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use super::Catalog;
use crate::error::{EcorecError, Result};
use crate::format::format_price;
use crate::product::{EcoFlags, Flag, Product};

/// Catalog header row, in column order
pub const CATALOG_HEADERS: [&str; 6] = [
    "Product Name",
    "Category",
    "Price",
    "Recyclable",
    "Organic",
    "Carbon Neutral",
];

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Product Name", default)]
    name: Option<String>,
    #[serde(rename = "Category", default)]
    category: Option<String>,
    #[serde(rename = "Price", default)]
    price: String,
    #[serde(rename = "Recyclable", default)]
    recyclable: Option<String>,
    #[serde(rename = "Organic", default)]
    organic: Option<String>,
    #[serde(rename = "Carbon Neutral", default)]
    carbon_neutral: Option<String>,
}

impl CatalogRow {
    fn into_product(self) -> Result<Product> {
        let flag = |cell: Option<String>| Flag::from_cell(cell.as_deref().unwrap_or(""));
        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| EcorecError::invalid_value("price", &self.price))?;
        let flags = EcoFlags::new(
            flag(self.recyclable),
            flag(self.organic),
            flag(self.carbon_neutral),
        );
        Product::new(
            self.name.unwrap_or_default(),
            self.category.unwrap_or_default(),
            price,
            flags,
        )
    }
}

/// Load the catalog, skipping rows that cannot be parsed.
///
/// Fails when the file is missing, lacks a required column, or has data rows
/// of which none are usable.
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(EcorecError::CatalogNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let missing: Vec<&str> = CATALOG_HEADERS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        return Err(EcorecError::invalid_catalog(
            path,
            format!("missing required columns: {}", missing.join(", ")),
        ));
    }

    let mut catalog = Catalog::default();
    let mut rows = 0usize;
    let mut skipped = 0usize;

    for (index, record) in reader.records().enumerate() {
        rows += 1;
        // Header is line 1
        let line = index + 2;
        let parsed = record
            .map_err(EcorecError::from)
            .and_then(|r| r.deserialize::<CatalogRow>(Some(&headers)).map_err(EcorecError::from))
            .and_then(CatalogRow::into_product);

        match parsed {
            Ok(product) => catalog.push(product),
            Err(e) => {
                skipped += 1;
                warn!(line, error = %e, "skipping unreadable catalog row");
            }
        }
    }

    if rows > 0 && catalog.is_empty() {
        return Err(EcorecError::invalid_catalog(
            path,
            format!("none of the {} data rows could be read", rows),
        ));
    }

    debug!(products = catalog.len(), skipped, path = %path.display(), "read_catalog");
    Ok(catalog)
}

/// Create an empty catalog containing only the header row
pub fn create_catalog(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(EcorecError::already_exists(
            "catalog",
            path.display().to_string(),
        ));
    }
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CATALOG_HEADERS)?;
    writer.flush()?;
    Ok(())
}

/// Append one product row to an existing catalog file
pub fn append_product(path: &Path, product: &Product) -> Result<()> {
    if !path.exists() {
        return Err(EcorecError::CatalogNotFound {
            path: path.to_path_buf(),
        });
    }

    let needs_newline = !ends_with_newline(path)?;
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| EcorecError::io_operation("open", path.display(), e))?;
    if needs_newline {
        file.write_all(b"\n")?;
    }

    let flags = product.flags();
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record([
        product.name().to_string(),
        product.category().to_string(),
        format_price(product.price()),
        flags.recyclable.to_string(),
        flags.organic.to_string(),
        flags.carbon_neutral.to_string(),
    ])?;
    writer.flush()?;

    debug!(name = product.name(), path = %path.display(), "append_product");
    Ok(())
}

fn ends_with_newline(path: &Path) -> Result<bool> {
    let mut file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
