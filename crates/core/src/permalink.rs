//! Entry permalink construction and parsing.
//!
//! Permalinks have the shape `/<year>/<month>/<day>/<id>-<slug>/`. Only the
//! id identifies the entry; the date and slug segments exist for readable
//! URLs and are never checked against the entry they point at.

use chrono::Datelike;

use crate::types::{DbId, Timestamp};

/// Build the canonical permalink path for an entry.
///
/// Date parts come from `created_at` in UTC and are not zero-padded.
pub fn entry_permalink(created_at: &Timestamp, id: DbId, slug: &str) -> String {
    format!(
        "/{}/{}/{}/{}-{}/",
        created_at.year(),
        created_at.month(),
        created_at.day(),
        id,
        slug
    )
}

/// The parts of a permalink request that survive parsing.
///
/// Date segments are kept as the digit runs that were requested; they are
/// never interpreted as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermalinkKey<'a> {
    pub year: &'a str,
    pub month: &'a str,
    pub day: &'a str,
    pub id: DbId,
    pub slug: &'a str,
}

/// Parse the four path segments of a permalink request.
///
/// Year, month and day must each be a non-empty run of ASCII digits of any
/// length. The key segment is split at its first `-`: the part before must be
/// a non-empty run of digits (the id), the rest is the slug and may be any
/// text, including nothing. `/0000/00/00/7-anything/` parses fine.
///
/// Returns `None` when a segment does not have that shape, or when the id
/// does not fit a [`DbId`].
pub fn parse_permalink<'a>(
    year: &'a str,
    month: &'a str,
    day: &'a str,
    key: &'a str,
) -> Option<PermalinkKey<'a>> {
    if !is_digits(year) || !is_digits(month) || !is_digits(day) {
        return None;
    }

    let (id, slug) = key.split_once('-')?;
    if !is_digits(id) {
        return None;
    }
    let id: DbId = id.parse().ok()?;

    Some(PermalinkKey {
        year,
        month,
        day,
        id,
        slug,
    })
}

fn is_digits(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}
