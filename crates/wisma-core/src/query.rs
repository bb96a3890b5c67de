//! Read-only occupancy queries over a [`Dataset`].
//!
//! Each query scans one snapshot linearly on every call, skipping the
//! header row. Nothing is cached and the dataset is never mutated, so
//! repeated calls return identical results and any number of requests may
//! run them concurrently.
//!
//! The two room filters deliberately differ:
//!
//! | Query | Match rule | `pidana` |
//! |-------|------------|----------|
//! | [`occupants_by_room`] | `wisma` contains `" - " + room` | code only |
//! | [`records_by_room_name`] | normalized `wisma` contains normalized name | raw |
//!
//! The occupants filter is a substring test anchored only at the
//! separator, so room `"1"` also matches `"Wisma A - 101"`.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::composite::{composite_code, normalize_room_name, room_code, SEPARATOR};
use crate::dataset::{Dataset, Snapshot};
use crate::record::{Entry, Record};

/// Number of leading entries in every snapshot that are not records.
pub const HEADER_ROWS: usize = 1;

/// Errors that can occur while answering a query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The dataset is empty or has no snapshot for the requested key.
    #[error("No data available")]
    DataUnavailable,

    /// The snapshot key maps to something other than an array.
    #[error("snapshot `{date_key}` is {found}, expected an array")]
    MalformedSnapshot {
        /// The snapshot key.
        date_key: String,
        /// JSON type that was found.
        found: &'static str,
    },

    /// A non-header entry could not be read as a record.
    #[error("entry {index}: {detail}")]
    MalformedEntry {
        /// Position in the snapshot array, header included.
        index: usize,
        /// What was wrong with it.
        detail: String,
    },
}

/// Distinct room codes of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomList {
    /// Room codes, ascending, without duplicates.
    pub rooms: Vec<String>,
    /// Number of distinct rooms.
    pub total: usize,
}

/// Projection of a record returned by the room queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occupant {
    /// Occupant display name.
    pub nama: String,
    /// Registration identifier.
    pub no_registrasi: String,
    /// Sentence: code only for occupants-by-room, raw for room-name queries.
    pub pidana: String,
    /// Entry date.
    pub tanggal_masuk: String,
    /// Expiry date.
    pub tanggal_ekspirasi: String,
    /// The original composite location.
    pub wisma: String,
}

/// How the `pidana` field is projected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PidanaForm {
    /// Only the code before the first separator.
    Code,
    /// The stored value untouched.
    Raw,
}

impl Occupant {
    fn project(record: &Record, pidana: PidanaForm) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        let pidana = match pidana {
            PidanaForm::Code => record
                .pidana
                .as_deref()
                .map(composite_code)
                .unwrap_or_default()
                .to_owned(),
            PidanaForm::Raw => text(&record.pidana),
        };
        Self {
            nama: text(&record.nama),
            no_registrasi: text(&record.no_registrasi),
            pidana,
            tanggal_masuk: text(&record.tanggal_masuk),
            tanggal_ekspirasi: text(&record.tanggal_ekspirasi),
            wisma: record.wisma().to_owned(),
        }
    }
}

/// Occupants of one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OccupantList {
    /// Matching occupants in dataset order.
    pub occupants: Vec<Occupant>,
    /// Number of occupants.
    pub total: usize,
}

/// Records whose location matches a room name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomRecords {
    /// Matching records in dataset order.
    pub data: Vec<Occupant>,
    /// Number of records.
    pub total: usize,
}

/// List the distinct room codes in the snapshot `date_key`.
pub fn list_rooms(dataset: &Dataset, date_key: &str) -> Result<RoomList, QueryError> {
    let rooms: BTreeSet<&str> = scan(dataset, date_key)?
        .into_iter()
        .filter_map(|record| room_code(record.wisma()))
        .collect();

    Ok(RoomList {
        total: rooms.len(),
        rooms: rooms.into_iter().map(str::to_owned).collect(),
    })
}

/// List the occupants whose `wisma` contains `" - " + room`.
pub fn occupants_by_room(
    dataset: &Dataset,
    date_key: &str,
    room: &str,
) -> Result<OccupantList, QueryError> {
    let needle = format!("{SEPARATOR}{room}");
    let occupants: Vec<Occupant> = scan(dataset, date_key)?
        .into_iter()
        .filter(|record| record.wisma().contains(&needle))
        .map(|record| Occupant::project(record, PidanaForm::Code))
        .collect();

    Ok(OccupantList {
        total: occupants.len(),
        occupants,
    })
}

/// List the records whose normalized `wisma` contains the normalized
/// `room_name`.
pub fn records_by_room_name(
    dataset: &Dataset,
    date_key: &str,
    room_name: &str,
) -> Result<RoomRecords, QueryError> {
    let needle = normalize_room_name(room_name);
    let data: Vec<Occupant> = scan(dataset, date_key)?
        .into_iter()
        .filter(|record| normalize_room_name(record.wisma()).contains(&needle))
        .map(|record| Occupant::project(record, PidanaForm::Raw))
        .collect();

    Ok(RoomRecords {
        total: data.len(),
        data,
    })
}

/// Resolve the snapshot and return its records after the header.
///
/// Every non-header entry is checked, so one malformed element fails the
/// whole query rather than yielding a partial answer.
fn scan<'a>(dataset: &'a Dataset, date_key: &str) -> Result<Vec<&'a Record>, QueryError> {
    let entries = match dataset.snapshot(date_key) {
        None => return Err(QueryError::DataUnavailable),
        Some(Snapshot::Malformed { found }) => {
            return Err(QueryError::MalformedSnapshot {
                date_key: date_key.to_owned(),
                found: *found,
            });
        }
        Some(Snapshot::Entries(entries)) => entries,
    };

    entries
        .iter()
        .enumerate()
        .skip(HEADER_ROWS)
        .map(|(index, entry)| match entry {
            Entry::Record(record) => Ok(record),
            Entry::Malformed(detail) => Err(QueryError::MalformedEntry {
                index,
                detail: detail.clone(),
            }),
        })
        .collect()
}
