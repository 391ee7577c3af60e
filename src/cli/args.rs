//! Command argument structures

use clap::Args;

use super::parse::{parse_flag, parse_price, parse_sort_order, parse_threshold};
use ecorec_core::product::Flag;
use ecorec_core::query::SortOrder;

/// Arguments for the list command.
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Only products in this category
    #[arg(long, short)]
    pub category: Option<String>,

    /// Only recyclable products
    #[arg(long)]
    pub recyclable: bool,

    /// Only organic products
    #[arg(long)]
    pub organic: bool,

    /// Only carbon neutral products
    #[arg(long)]
    pub carbon_neutral: bool,

    /// Sort order: none, price-asc, price-desc, score
    #[arg(long, short, value_parser = parse_sort_order, default_value = "none")]
    pub sort: SortOrder,
}

/// Arguments for the search command.
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Part of a product name (case-insensitive)
    pub term: String,

    /// Sort order: none, price-asc, price-desc, score
    #[arg(long, short, value_parser = parse_sort_order, default_value = "none")]
    pub sort: SortOrder,

    /// Do not record the term in the search log
    #[arg(long)]
    pub no_log: bool,
}

/// Arguments for the recommend command.
#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    /// Exact product name
    pub name: String,

    /// Number of recommendations (default from ecorec.toml)
    #[arg(long, short = 'n', allow_negative_numbers = true)]
    pub top_n: Option<i64>,
}

/// Arguments for the duplicates command.
#[derive(Args, Debug, Clone)]
pub struct DuplicatesArgs {
    /// Minimum similarity (0.0 to 1.0)
    #[arg(long, short, value_parser = parse_threshold, default_value = "0.8")]
    pub threshold: f64,
}

/// Arguments for the compare command.
#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Exact product names (at least two)
    #[arg(required = true)]
    pub names: Vec<String>,
}

/// Arguments for the add command.
#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Product name
    pub name: String,

    /// Product category
    #[arg(long, short)]
    pub category: String,

    /// Price (non-negative)
    #[arg(long, short, value_parser = parse_price)]
    pub price: f64,

    /// Recyclable: yes or no
    #[arg(long, value_parser = parse_flag, default_value = "no")]
    pub recyclable: Flag,

    /// Organic: yes or no
    #[arg(long, value_parser = parse_flag, default_value = "no")]
    pub organic: Flag,

    /// Carbon neutral: yes or no
    #[arg(long, value_parser = parse_flag, default_value = "no")]
    pub carbon_neutral: Flag,
}

/// Arguments for the picks command.
#[derive(Args, Debug, Clone)]
pub struct PicksArgs {
    /// Number of picks (default from ecorec.toml)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

/// Arguments for the feedback command.
#[derive(Args, Debug, Clone)]
pub struct FeedbackArgs {
    /// Feedback text
    pub comment: String,

    /// Your name
    #[arg(long, default_value = "")]
    pub name: String,
}
