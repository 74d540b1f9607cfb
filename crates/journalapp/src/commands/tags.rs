use crate::commands::{CmdResult, TagCount};
use crate::error::Result;
use crate::store::EntryStore;

/// Every tag in the journal with its usage count, most used first.
///
/// Tags are grouped case-insensitively and reported with the first spelling encountered.
pub fn run<S: EntryStore>(store: &S) -> Result<CmdResult> {
    let entries = store.load_all()?;

    let mut counts: Vec<(String, TagCount)> = Vec::new();
    for entry in &entries {
        // An entry listing the same tag twice still counts once.
        let mut seen: Vec<String> = Vec::new();
        for tag in &entry.tags {
            let trimmed = tag.trim();
            if trimmed.is_empty() {
                continue;
            }
            let key = trimmed.to_lowercase();
            if seen.contains(&key) {
                continue;
            }
            match counts.iter_mut().find(|(k, _)| *k == key) {
                Some((_, count)) => count.count += 1,
                None => counts.push((
                    key.clone(),
                    TagCount {
                        name: trimmed.to_string(),
                        count: 1,
                    },
                )),
            }
            seen.push(key);
        }
    }

    let mut tags: Vec<TagCount> = counts.into_iter().map(|(_, c)| c).collect();
    tags.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    Ok(CmdResult {
        tags,
        ..Default::default()
    })
}
