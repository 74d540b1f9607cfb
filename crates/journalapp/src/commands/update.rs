use crate::commands::{describe, CmdMessage, CmdResult, DEMO_WARNING};
use crate::error::{MissingOp, Result};
use crate::model::EntryDraft;
use crate::store::EntryStore;

use super::helpers::resolve_entry;

/// Replaces every editable field of the selected entry with the draft's values.
///
/// The id and the original `date` are kept. Fields left empty in the draft are cleared,
/// so callers wanting a partial edit should start from [`EntryDraft::from_entry`].
pub fn run<S: EntryStore>(store: &mut S, selector: &str, draft: EntryDraft) -> Result<CmdResult> {
    let existing = resolve_entry(store, selector, MissingOp::Update)?;
    let updated = draft.into_edited_entry(&existing)?;
    store.update(&updated)?;

    let mut result = CmdResult::default();
    if store.is_read_only() {
        result.add_message(CmdMessage::warning(format!(
            "{}: {} was not updated",
            DEMO_WARNING,
            describe(&updated)
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Entry updated: {}",
            describe(&updated)
        )));
    }
    result.affected_entries.push(updated);
    Ok(result)
}
