//! Parser for the semicolon-delimited film catalog.
//!
//! Format (one header line, then one film per line):
//! `id;title;genres;description;director;cast;year;runtime;rating;votes;revenue;metascore`
//!
//! Genres and cast are comma-joined lists inside their field. Only year and
//! rating are required to be numeric; the remaining numeric columns are
//! informational and fall back to `None` when blank or garbled.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use tracing::{debug, info, warn};

/// Number of `;`-separated fields in a data line
pub const FIELD_COUNT: usize = 12;

const YEAR_FIELD: usize = 6;
const RATING_FIELD: usize = 8;

/// Counters gathered while loading one catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Records kept (at or after the minimum year)
    pub accepted: usize,
    /// Data lines dropped because they could not be parsed
    pub skipped_malformed: usize,
    /// Valid records dropped by the minimum-year prefilter
    pub below_min_year: usize,
}

/// Parse a single data line into a record.
///
/// `line_no` is 1-based and only used for error context.
pub fn parse_record(line: &str, line_no: usize) -> Result<MovieRecord> {
    let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split(';').collect();
    if fields.len() != FIELD_COUNT {
        return Err(DataLoadError::FieldCountMismatch {
            expected: FIELD_COUNT,
            found: fields.len(),
            line: line_no,
        });
    }

    let release_year = parse_year(fields[YEAR_FIELD], line_no)?;
    let rating = parse_rating(fields[RATING_FIELD], line_no)?;

    Ok(MovieRecord {
        id: fields[0].trim().to_string(),
        title: fields[1].trim().to_string(),
        genres: split_list(fields[2]),
        description: fields[3].to_string(),
        director: fields[4].trim().to_string(),
        cast: split_list(fields[5]),
        release_year,
        runtime_minutes: parse_optional(fields[7]),
        rating,
        votes: parse_optional(fields[9]),
        revenue: parse_optional(fields[10]),
        metascore: parse_optional(fields[11]),
    })
}

/// Parse a whole catalog from a reader, keeping records with `release_year >= min_year`.
///
/// The first non-blank line is a header when it does not start with a digit
/// (data lines start with their numeric rank), so headerless input is
/// accepted too. Any data line that fails to parse is logged, counted and
/// skipped. Only I/O failures abort the load.
pub fn parse_records<R: BufRead>(reader: R, min_year: Year) -> Result<(Vec<MovieRecord>, LoadReport)> {
    let mut records = Vec::new();
    let mut report = LoadReport::default();
    let mut seen_first_line = false;

    // Split on raw bytes so one bad byte only garbles its own field
    for (idx, raw) in reader.split(b'\n').enumerate() {
        let line_no = idx + 1;
        let raw = raw?;
        let line = String::from_utf8_lossy(&raw);
        if line.trim().is_empty() {
            continue;
        }

        let is_first_line = !seen_first_line;
        seen_first_line = true;
        if is_first_line && !starts_with_digit(&line) {
            debug!("Skipping header at line {}", line_no);
            continue;
        }

        let record = match parse_record(&line, line_no) {
            Ok(record) => record,
            Err(e) if e.is_malformed_record() => {
                warn!(line = line_no, error = %e, "Skipping malformed record");
                report.skipped_malformed += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        if record.release_year >= min_year {
            records.push(record);
        } else {
            report.below_min_year += 1;
        }
    }

    report.accepted = records.len();
    Ok((records, report))
}

/// Parse a catalog that is already in memory
pub fn parse_str(content: &str, min_year: Year) -> Result<(Vec<MovieRecord>, LoadReport)> {
    parse_records(content.as_bytes(), min_year)
}

/// Open and parse a catalog file.
///
/// A missing or unreadable file is reported as [`DataLoadError::FileNotFound`].
pub fn read_records(path: &Path, min_year: Year) -> Result<(Vec<MovieRecord>, LoadReport)> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    let (records, report) = parse_records(BufReader::new(file), min_year)?;
    info!(
        path = %path.display(),
        accepted = report.accepted,
        skipped_malformed = report.skipped_malformed,
        below_min_year = report.below_min_year,
        "Loaded catalog"
    );
    Ok((records, report))
}

fn starts_with_digit(line: &str) -> bool {
    line.trim_start().starts_with(|c: char| c.is_ascii_digit())
}

/// Parse the release year
///
/// Example: "2014" -> Ok(2014)
///          "14"   -> Err(InvalidValue)
fn parse_year(s: &str, line_no: usize) -> Result<Year> {
    let year: Year = s.trim().parse().map_err(|e| DataLoadError::ParseError {
        line: line_no,
        reason: format!("Invalid year: {}", e),
    })?;
    if !(1000..=9999).contains(&year) {
        return Err(DataLoadError::InvalidValue {
            field: "year".to_string(),
            value: s.to_string(),
        });
    }
    Ok(year)
}

fn parse_rating(s: &str, line_no: usize) -> Result<f64> {
    let rating: f64 = s.trim().parse().map_err(|e| DataLoadError::ParseError {
        line: line_no,
        reason: format!("Invalid rating: {}", e),
    })?;
    if !rating.is_finite() || rating < 0.0 {
        return Err(DataLoadError::InvalidValue {
            field: "rating".to_string(),
            value: s.to_string(),
        });
    }
    // "-0.0" passes the check above; store it as 0.0 so equal scores compare equal
    Ok(rating + 0.0)
}

/// Lenient parse for columns the ranking never reads
fn parse_optional<T: std::str::FromStr>(s: &str) -> Option<T> {
    s.trim().parse().ok()
}

/// Split a comma-joined list, trimming tokens and dropping empty ones
///
/// Example: "Chris Pratt, Vin Diesel" -> ["Chris Pratt", "Vin Diesel"]
fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
