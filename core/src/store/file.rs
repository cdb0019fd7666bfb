//! Line codec for the tab-delimited data file.
//!
//! One record per line, no header, no escaping: a tab or newline inside a
//! field value corrupts the row and is not guarded against.

use crate::error::StoreError;
use crate::types::Treasure;

/// Columns per record: catalogue number, name, image path, category, country.
pub(crate) const FIELD_COUNT: usize = 5;

/// Decodes one data row. Extra columns are tolerated with a warning and
/// discarded; missing columns or an empty field are corruption.
pub(crate) fn parse_line(line: &str, number: usize) -> Result<Treasure, StoreError> {
    let fields: Vec<&str> = line.split('\t').collect();

    if fields.len() < FIELD_COUNT {
        return Err(StoreError::MissingFields {
            line: number,
            found: fields.len(),
        });
    }
    if fields.len() > FIELD_COUNT {
        tracing::warn!(
            line = number,
            found = fields.len(),
            "extra data fields, ignoring the additional ones"
        );
    }

    Treasure::new(fields[0], fields[1], fields[2], fields[3], fields[4])
        .map_err(|source| StoreError::CorruptRecord {
            line: number,
            source,
        })
}

pub(crate) fn encode_line(treasure: &Treasure) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        treasure.catalogue_number,
        treasure.name,
        treasure.image_path,
        treasure.category,
        treasure.country
    )
}
