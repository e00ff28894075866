use serde::{Deserialize, Serialize};

/// A single message key found in source code.
///
/// `translation` is always empty at extraction time. It is kept in the
/// output so translators (or later tooling) can fill it in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct I18nRecord {
    pub id: String,
    pub translation: String,
}

impl I18nRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            translation: String::new(),
        }
    }
}
