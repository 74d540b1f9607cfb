use crate::error::{JournalError, Result};
use crate::model::{null_as_default, Entry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The parsed journal document.
///
/// Top-level keys other than `entries` are carried along untouched so a rewrite
/// never drops data another tool put there.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub entries: Vec<Entry>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl JournalDocument {
    /// Parses document text read from `path`.
    ///
    /// Empty, whitespace-only and `null` documents are an empty journal.
    /// Anything else that is not `{ entries: [...] }` is a [`JournalError::StorageRead`].
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let doc: Option<JournalDocument> =
            serde_yaml::from_str(text).map_err(|e| JournalError::read(path, e))?;
        Ok(doc.unwrap_or_default())
    }

    pub fn render(&self, path: &Path) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| JournalError::write(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryType;

    fn parse(text: &str) -> Result<JournalDocument> {
        JournalDocument::parse(text, Path::new("journal.yaml"))
    }

    #[test]
    fn blank_and_null_documents_are_empty() {
        assert!(parse("").unwrap().entries.is_empty());
        assert!(parse("  \n\n").unwrap().entries.is_empty());
        assert!(parse("null\n").unwrap().entries.is_empty());
        assert!(parse("entries:\n").unwrap().entries.is_empty());
        assert!(parse("entries: []\n").unwrap().entries.is_empty());
    }

    #[test]
    fn parses_entries() {
        let doc = parse(
            "entries:\n- id: a\n  type: Buy\n  title: ACME\n  price: 10\n  amount: 2\n  tags: [x]\n  date: '2024-01-02'\n",
        )
        .unwrap();
        assert_eq!(doc.entries.len(), 1);
        assert_eq!(doc.entries[0].entry_type, EntryType::Buy);
        assert_eq!(doc.entries[0].cost(), Some(20.0));
    }

    #[test]
    fn malformed_documents_are_read_errors() {
        for bad in [
            "entries: [",
            "- just\n- a list\n",
            "entries: 42\n",
            "entries:\n- type: Buy\n",
        ] {
            let err = parse(bad).unwrap_err();
            assert!(
                matches!(err, JournalError::StorageRead { .. }),
                "expected read error for {:?}, got {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn unknown_top_level_keys_survive_a_rewrite() {
        let doc = parse("owner: me\nentries: []\n").unwrap();
        let text = doc.render(Path::new("journal.yaml")).unwrap();
        assert!(text.contains("owner: me"));
        assert_eq!(parse(&text).unwrap(), doc);
    }
}
