//! Event schedule lookup.
//!
//! Thin glue around the published tab-separated schedule table: fetch it,
//! parse it by header name, answer id lookups. This never touches the
//! draw core; it exists so the chat-bot side of the tool can answer
//! `sale <ID>` queries.

use std::error::Error;

/// Published location of the schedule table.
pub const DEFAULT_SCHEDULE_URL: &str = "https://shibanban2.github.io/bc-event/token/sale.tsv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub id: String,
    pub name: String,
    pub schedule: String,
}

/// Parses a TSV table with a header row into records.
///
/// Columns are matched by header name (`ID`, `Name`, `Schedule`), so
/// column order in the table does not matter. Missing cells become empty
/// strings and blank lines are skipped.
pub fn parse_tsv(text: &str) -> Vec<EventRecord> {
    let mut lines = text.trim().lines();

    let headers: Vec<&str> = match lines.next() {
        Some(header_line) => header_line.split('\t').map(|h| h.trim()).collect(),
        None => return Vec::new(),
    };
    let id_col = headers.iter().position(|h| *h == "ID");
    let name_col = headers.iter().position(|h| *h == "Name");
    let schedule_col = headers.iter().position(|h| *h == "Schedule");

    lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let cols: Vec<&str> = line.split('\t').collect();
            let cell = |index: Option<usize>| -> String {
                index
                    .and_then(|i| cols.get(i))
                    .map(|s| s.trim().to_string())
                    .unwrap_or_default()
            };
            EventRecord {
                id: cell(id_col),
                name: cell(name_col),
                schedule: cell(schedule_col),
            }
        })
        .collect()
}

/// Finds the record whose id matches exactly.
pub fn find_event<'a>(records: &'a [EventRecord], id: &str) -> Option<&'a EventRecord> {
    records.iter().find(|record| record.id == id)
}

/// Formats a record the way the bot replies: `[ID Name]` then the
/// schedule on its own line.
pub fn format_event_reply(record: &EventRecord) -> String {
    format!("[{} {}]\n{}", record.id, record.name, record.schedule)
}

/// Fetches and parses the schedule table.
pub fn fetch_schedule(url: &str) -> Result<Vec<EventRecord>, Box<dyn Error>> {
    let body = ureq::get(url)
        .set("User-Agent", "tenpull")
        .call()?
        .into_string()?;
    Ok(parse_tsv(&body))
}
