use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::I18nRecord;

/// Ordered, deduplicated collection of extracted records.
///
/// Records keep the order in which their IDs were first seen. Once added a
/// record is never changed or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<I18nRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record for `id` unless one already exists.
    ///
    /// Returns `true` if a record was added. Lookup is a linear scan; catalogs
    /// hold hundreds to a few thousand keys.
    pub fn insert(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.records.push(I18nRecord::new(id));
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    pub fn records(&self) -> &[I18nRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &I18nRecord> {
        self.records.iter()
    }

    /// Serialize to a compact JSON array.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.records).context("Failed to serialize catalog")
    }

    /// Serialize with 2-space indentation and a trailing newline.
    pub fn to_json_pretty(&self) -> Result<Vec<u8>> {
        let mut out =
            serde_json::to_vec_pretty(&self.records).context("Failed to serialize catalog")?;
        out.push(b'\n');
        Ok(out)
    }

    /// Write the catalog to `path`, creating or truncating the file.
    ///
    /// Missing parent directories are created. The in-memory records are
    /// untouched if writing fails.
    pub fn save(&self, path: &Path, pretty: bool) -> Result<()> {
        let content = if pretty {
            self.to_json_pretty()?
        } else {
            self.to_json()?
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a I18nRecord;
    type IntoIter = std::slice::Iter<'a, I18nRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
