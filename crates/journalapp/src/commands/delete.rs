use crate::commands::{describe, CmdMessage, CmdResult, DEMO_WARNING};
use crate::error::{JournalError, MissingOp, Result};
use crate::store::EntryStore;
use tracing::warn;

use super::helpers::resolve_entry;

/// Removes the selected entry. An id that matches nothing is reported as a warning, not an error.
pub fn run<S: EntryStore>(store: &mut S, selector: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let entry = match resolve_entry(store, selector, MissingOp::Delete) {
        Ok(entry) => entry,
        Err(JournalError::NotFound { id, .. }) => {
            warn!(id = %id, "delete requested for unknown entry");
            result.add_message(CmdMessage::warning(format!(
                "No entry with id {}, nothing deleted",
                id
            )));
            return Ok(result);
        }
        Err(e) => return Err(e),
    };

    store.delete(&entry.id)?;

    if store.is_read_only() {
        result.add_message(CmdMessage::warning(format!(
            "{}: {} was not deleted",
            DEMO_WARNING,
            describe(&entry)
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Entry deleted: {}",
            describe(&entry)
        )));
    }
    result.affected_entries.push(entry);
    Ok(result)
}
