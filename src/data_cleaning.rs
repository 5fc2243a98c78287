use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;

/// One row of a friendship file: `user,friend`. A blank friend lists `user` on their own.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FriendshipRecord {
    pub user: String,
    #[serde(default)]
    pub friend: Option<String>,
}

pub fn parse_csv(file_path: &Path) -> Result<Vec<FriendshipRecord>> {
    let file = File::open(file_path)
        .with_context(|| format!("can't open network file '{}'", file_path.display()))?;
    let records = parse_reader(file)
        .with_context(|| format!("can't parse network file '{}'", file_path.display()))?;
    info!(
        "loaded {} rows from '{}'",
        records.len(),
        file_path.display()
    );
    Ok(records)
}

/// Reads rows after the `user,friend` header. Fields are trimmed, short rows are allowed
/// and rows without a user are dropped.
pub fn parse_reader<R: Read>(reader: R) -> Result<Vec<FriendshipRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<FriendshipRecord>().enumerate() {
        let mut record = row.with_context(|| format!("malformed row {}", index + 1))?;
        if record.user.is_empty() {
            warn!("row {} has no user, skipping", index + 1);
            continue;
        }
        if record.friend.as_deref() == Some("") {
            record.friend = None;
        }
        records.push(record);
    }
    Ok(records)
}
