//! Store management for ecorec
//!
//! The store is a directory holding `ecorec.toml`, the catalog CSV and the
//! activity logs. File names come from the config and resolve against the
//! store root unless absolute.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::activity::{self, FeedbackEntry, SearchLogEntry};
use crate::catalog::io::{append_product, create_catalog, read_catalog};
use crate::catalog::Catalog;
use crate::config::{EcorecConfig, CONFIG_FILE};
use crate::error::{EcorecError, Result};
use crate::product::Product;

#[derive(Debug)]
pub struct Store {
    root: PathBuf,
    config: EcorecConfig,
}

impl Store {
    /// Open the store at `root`; a missing config file means defaults
    #[tracing::instrument(skip(root), fields(root = %root.display()))]
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(EcorecError::io_operation(
                "open store",
                root.display(),
                "not a directory",
            ));
        }

        let config_path = root.join(CONFIG_FILE);
        let config = if config_path.exists() {
            EcorecConfig::load(&config_path)?
        } else {
            EcorecConfig::default()
        };

        Ok(Store {
            root: root.to_path_buf(),
            config,
        })
    }

    /// Write a default config and an empty catalog
    ///
    /// An existing config is kept; an existing catalog is an error.
    pub fn init(root: &Path) -> Result<Self> {
        std::fs::create_dir_all(root)
            .map_err(|e| EcorecError::io_operation("create", root.display(), e))?;

        let config_path = root.join(CONFIG_FILE);
        let config = if config_path.exists() {
            EcorecConfig::load(&config_path)?
        } else {
            let config = EcorecConfig::default();
            config.save(&config_path)?;
            config
        };

        let store = Store {
            root: root.to_path_buf(),
            config,
        };
        create_catalog(&store.catalog_path())?;
        debug!(root = %root.display(), "init store");
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &EcorecConfig {
        &self.config
    }

    fn resolve(&self, file: &str) -> PathBuf {
        let path = Path::new(file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.resolve(&self.config.catalog)
    }

    pub fn search_log_path(&self) -> PathBuf {
        self.resolve(&self.config.search_log)
    }

    pub fn feedback_log_path(&self) -> PathBuf {
        self.resolve(&self.config.feedback_log)
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        read_catalog(&self.catalog_path())
    }

    /// Append a product to the catalog file
    ///
    /// Duplicate names are accepted; lookups resolve to the first one.
    /// Returns how many products already carried this name.
    pub fn add_product(&self, product: &Product) -> Result<usize> {
        if product.name().trim().is_empty() {
            return Err(EcorecError::invalid_value("product name", "name is empty"));
        }
        let path = self.catalog_path();
        let existing = read_catalog(&path)?.count_named(product.name());
        if existing > 0 {
            warn!(
                name = product.name(),
                existing, "products with this name already exist"
            );
        }
        append_product(&path, product)?;
        Ok(existing)
    }

    pub fn log_search(&self, term: &str) -> Result<()> {
        activity::append_search(&self.search_log_path(), &SearchLogEntry::now(term))
    }

    pub fn search_terms(&self) -> Result<Vec<String>> {
        activity::read_search_terms(&self.search_log_path())
    }

    pub fn add_feedback(&self, entry: &FeedbackEntry) -> Result<()> {
        activity::append_feedback(&self.feedback_log_path(), entry)
    }
}
