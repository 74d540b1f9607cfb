use chrono::NaiveDate;
use journalapp::commands::MessageLevel;
use journalapp::config::JournalConfig;
use journalapp::filter::{FilterCriteria, TypeFilter};
use journalapp::init::initialize_with;
use journalapp::model::{EntryDraft, EntryType};
use journalapp::store::StoreMode;
use std::fs;
use tempfile::TempDir;

fn on(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_fresh_directory_creates_journal_on_first_entry() {
    let dir = TempDir::new().unwrap();
    let mut ctx = initialize_with(JournalConfig::default(), dir.path(), None);
    assert_eq!(ctx.source.mode, StoreMode::ReadWrite);
    assert!(!dir.path().join("journal.yaml").exists());

    ctx.api
        .create_entry_on(
            EntryDraft::new(EntryType::Buy).with_title("ACME"),
            on(2024, 4, 2),
        )
        .unwrap();
    assert!(dir.path().join("journal.yaml").exists());
}

#[test]
fn test_filtering_and_ordering_across_a_session() {
    let dir = TempDir::new().unwrap();
    let mut ctx = initialize_with(JournalConfig::default(), dir.path(), None);
    let api = &mut ctx.api;

    api.create_entry_on(
        EntryDraft::new(EntryType::Buy)
            .with_title("ACME")
            .with_tags("Tech"),
        on(2023, 6, 1),
    )
    .unwrap();
    api.create_entry_on(
        EntryDraft::new(EntryType::LessonsLearned)
            .with_title("Position sizing")
            .with_tags("risk"),
        on(2024, 1, 9),
    )
    .unwrap();
    api.create_entry_on(
        EntryDraft::new(EntryType::Sell)
            .with_title("ACME")
            .with_tags("tech, exit"),
        on(2024, 7, 30),
    )
    .unwrap();

    let all = api.list_entries(&FilterCriteria::default()).unwrap();
    let titles: Vec<_> = all
        .listed_entries
        .iter()
        .map(|e| e.date.clone().unwrap())
        .collect();
    assert_eq!(titles, vec!["2024-07-30", "2024-01-09", "2023-06-01"]);

    let tech_2024 = FilterCriteria::default().with_year("2024").with_tags("TECH");
    let result = api.list_entries(&tech_2024).unwrap();
    assert_eq!(result.listed_entries.len(), 1);
    assert_eq!(result.listed_entries[0].entry_type, EntryType::Sell);

    let lessons = FilterCriteria {
        entry_type: TypeFilter::Only(EntryType::LessonsLearned),
        ..Default::default()
    };
    assert_eq!(api.list_entries(&lessons).unwrap().listed_entries.len(), 1);

    let tags = api.tags().unwrap().tags;
    assert_eq!(tags[0].name, "Tech");
    assert_eq!(tags[0].count, 2);
}

#[test]
fn test_edit_keeps_creation_date_on_disk() {
    let dir = TempDir::new().unwrap();
    let mut ctx = initialize_with(JournalConfig::default(), dir.path(), None);

    let created = ctx
        .api
        .create_entry_on(
            EntryDraft::new(EntryType::Buy).with_title("ACME"),
            on(2022, 2, 2),
        )
        .unwrap();
    let entry = created.affected_entries[0].clone();

    let draft = EntryDraft::from_entry(&entry).with_price(9.5).with_amount(10.0);
    ctx.api.update_entry(&entry.id, draft).unwrap();

    let reopened = initialize_with(JournalConfig::default(), dir.path(), None);
    let viewed = reopened.api.view_entry(&entry.id).unwrap();
    assert_eq!(viewed.listed_entries[0].date.as_deref(), Some("2022-02-02"));
    assert_eq!(viewed.listed_entries[0].cost(), Some(95.0));
}

#[test]
fn test_demo_journal_is_shown_but_never_written() {
    let dir = TempDir::new().unwrap();
    let demo = dir.path().join("dummy_journal.yaml");
    let original = "entries:\n- id: demo-0001\n  type: Success Stories\n  title: First win\n  tags: [demo]\n  date: '2024-01-01'\n";
    fs::write(&demo, original).unwrap();

    let mut ctx = initialize_with(JournalConfig::default(), dir.path(), None);
    assert!(ctx.source.is_demo());

    let listed = ctx.api.list_entries(&FilterCriteria::default()).unwrap();
    assert_eq!(listed.listed_entries.len(), 1);

    let added = ctx
        .api
        .create_entry(EntryDraft::new(EntryType::Buy).with_title("Nope"))
        .unwrap();
    assert_eq!(added.messages[0].level, MessageLevel::Warning);

    let deleted = ctx.api.delete_entry("demo").unwrap();
    assert_eq!(deleted.messages[0].level, MessageLevel::Warning);

    assert_eq!(fs::read_to_string(&demo).unwrap(), original);
    assert!(!dir.path().join("journal.yaml").exists());
}

#[test]
fn test_config_points_at_another_document() {
    let dir = TempDir::new().unwrap();
    let config = JournalConfig {
        journal_file: "books/trades.yaml".into(),
        ..JournalConfig::default()
    };
    let mut ctx = initialize_with(config, dir.path(), None);
    ctx.api
        .create_entry_on(EntryDraft::new(EntryType::Strategy), on(2024, 1, 1))
        .unwrap();
    assert!(dir.path().join("books").join("trades.yaml").exists());
}
