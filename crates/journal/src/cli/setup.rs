use clap::{Args, Parser, Subcommand, ValueEnum};
use journalapp::filter::TypeFilter;
use journalapp::model::EntryType;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Styled output, colors when the terminal supports them
    #[default]
    Term,
    /// Plain text, no ANSI codes
    Text,
    /// Machine readable JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "journal",
    bin_name = "journal",
    version,
    disable_help_subcommand = true
)]
#[command(
    about = "Investment journal: buys, sells and market notes in a YAML file",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Journal document to use (created on first save)
    #[arg(short, long, global = true, value_name = "PATH", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputMode::Term,
        help_heading = "Options"
    )]
    pub output: OutputMode,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List entries, newest first
    #[command(alias = "ls", display_order = 1)]
    List(ListArgs),

    /// Add a new entry dated today
    #[command(alias = "new", display_order = 2)]
    Add(EntryFields),

    /// Change fields of an existing entry
    #[command(display_order = 3)]
    Edit {
        /// Entry id or unique prefix (4+ characters)
        id: String,

        #[command(flatten)]
        fields: EditFields,
    },

    /// Show one entry
    #[command(display_order = 4)]
    View {
        /// Entry id or unique prefix (4+ characters)
        id: String,
    },

    /// Delete an entry
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Entry id or unique prefix (4+ characters)
        id: String,
    },

    /// Tags in use, most used first
    #[command(display_order = 6)]
    Tags,

    /// Which journal is open and what it holds
    #[command(display_order = 7)]
    Status,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only this entry type ("all" for every type)
    #[arg(short = 't', long = "type", value_parser = parse_type_filter)]
    pub entry_type: Option<TypeFilter>,

    /// Only entries dated in this year (YYYY)
    #[arg(short, long)]
    pub year: Option<String>,

    /// Comma-separated tags, entries with any of them match
    #[arg(long)]
    pub tags: Option<String>,
}

#[derive(Args, Debug)]
pub struct EntryFields {
    /// Buy, Sell, Market Stories, Lessons Learned, Success Stories or Strategy
    #[arg(short = 't', long = "type", value_parser = parse_entry_type)]
    pub entry_type: EntryType,

    /// Asset or headline
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub price: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub amount: Option<f64>,

    /// Free text, Markdown is kept as written
    #[arg(long)]
    pub note: Option<String>,

    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct EditFields {
    #[arg(short = 't', long = "type", value_parser = parse_entry_type)]
    pub entry_type: Option<EntryType>,

    /// New title (empty string clears it)
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, allow_negative_numbers = true, conflicts_with = "clear_price")]
    pub price: Option<f64>,

    #[arg(long, allow_negative_numbers = true, conflicts_with = "clear_amount")]
    pub amount: Option<f64>,

    /// New note (empty string clears it)
    #[arg(long)]
    pub note: Option<String>,

    /// Replaces all tags (empty string clears them)
    #[arg(long)]
    pub tags: Option<String>,

    /// Remove the price
    #[arg(long)]
    pub clear_price: bool,

    /// Remove the amount
    #[arg(long)]
    pub clear_amount: bool,
}

fn parse_entry_type(raw: &str) -> Result<EntryType, String> {
    raw.parse::<EntryType>().map_err(|e| e.to_string())
}

fn parse_type_filter(raw: &str) -> Result<TypeFilter, String> {
    raw.parse::<TypeFilter>().map_err(|e| e.to_string())
}
