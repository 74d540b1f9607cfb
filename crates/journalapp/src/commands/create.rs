use crate::commands::{describe, CmdMessage, CmdResult, DEMO_WARNING};
use crate::error::Result;
use crate::model::EntryDraft;
use crate::store::EntryStore;
use chrono::NaiveDate;

pub fn run<S: EntryStore>(store: &mut S, draft: EntryDraft, today: NaiveDate) -> Result<CmdResult> {
    let entry = draft.into_new_entry(today)?;
    let entry = store.create(entry)?;

    let mut result = CmdResult::default();
    if store.is_read_only() {
        result.add_message(CmdMessage::warning(format!(
            "{}: {} was not added",
            DEMO_WARNING,
            describe(&entry)
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Entry created: {}",
            describe(&entry)
        )));
    }
    result.affected_entries.push(entry);
    Ok(result)
}
