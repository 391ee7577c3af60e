//! Ecorec Core Library
//!
//! Catalog handling and the content-based recommendation engine for the
//! ecorec eco-friendly product recommender.

pub mod activity;
pub mod catalog;
pub mod compare;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod navigation;
pub mod product;
pub mod query;
pub mod similarity;
pub mod stats;
pub mod store;
pub mod text;
