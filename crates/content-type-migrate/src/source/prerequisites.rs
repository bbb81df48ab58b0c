//! Lookup table of taxonomy groups migrated before content types.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::SourceTaxonomy;

/// One migrated taxonomy group: its codename in the source and in the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyMapping {
    pub original_codename: String,
    pub imported_codename: String,
}

impl TaxonomyMapping {
    pub fn new(original: impl Into<String>, imported: impl Into<String>) -> Self {
        Self {
            original_codename: original.into(),
            imported_codename: imported.into(),
        }
    }
}

/// Read-only table of taxonomy groups that already exist in the target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrerequisiteTaxonomies {
    taxonomies: Vec<TaxonomyMapping>,
}

impl PrerequisiteTaxonomies {
    pub fn new(taxonomies: Vec<TaxonomyMapping>) -> Self {
        Self { taxonomies }
    }

    /// Table for taxonomies that kept their codenames in the target.
    pub fn identity(taxonomies: &[SourceTaxonomy]) -> Self {
        Self::new(
            taxonomies
                .iter()
                .map(|t| TaxonomyMapping::new(&t.codename, &t.codename))
                .collect(),
        )
    }

    /// Load the table from a JSON array of mappings.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// First mapping whose original codename matches.
    pub fn find_by_original(&self, codename: &str) -> Option<&TaxonomyMapping> {
        self.taxonomies
            .iter()
            .find(|m| m.original_codename == codename)
    }

    pub fn len(&self) -> usize {
        self.taxonomies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taxonomies.is_empty()
    }
}
