use crate::catalog::Catalog;

/// Build one feature document per product, in catalog order
///
/// Each document is the product name and category joined by a single space.
/// Blank fields contribute an empty string, so a product with neither still
/// yields `" "`.
pub fn build_feature_documents(catalog: &Catalog) -> Vec<String> {
    catalog
        .iter()
        .map(|p| format!("{} {}", p.name(), p.category()))
        .collect()
}
