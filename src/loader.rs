use crate::error::{ReportError, Result};
use crate::types::{RawRecord, RawRow};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::path::Path;

/// Columns the pipeline depends on. The source file carries more (gender,
/// ethnicity, business unit); those are allowed but not required.
const REQUIRED_COLUMNS: &[&str] = &[
    "EEID",
    "Job Title",
    "Department",
    "Age",
    "Hire Date",
    "Annual Salary",
    "Bonus %",
    "Country",
    "City",
    "Exit Date",
];

/// Date layouts seen in the source exports.
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d"];

/// Load the full table of records from `path`.
///
/// The file is decoded as ISO-8859-1, not UTF-8. The export was authored in
/// that single-byte encoding, and decoding it as UTF-8 would corrupt
/// non-ASCII characters in names and city values silently instead of
/// failing. Latin-1 decoding itself cannot fail; every byte maps to a
/// character.
///
/// The two date columns are parsed here; no other column is type-converted
/// at load time. Any malformed record fails the whole run: there is no
/// partial load.
pub fn load(path: &str) -> Result<Vec<RawRecord>> {
    let bytes = std::fs::read(Path::new(path)).map_err(|source| ReportError::Input {
        path: path.to_string(),
        source,
    })?;
    let text = encoding_rs::mem::decode_latin1(&bytes);

    let mut rdr = ReaderBuilder::new().from_reader(text.as_bytes());

    // Check the schema up front so a missing column surfaces by name
    // instead of as a per-row deserialization failure.
    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(ReportError::MissingColumn {
                column: (*column).to_string(),
            });
        }
    }

    let mut records = Vec::new();
    for result in rdr.deserialize::<RawRow>() {
        let row = result?;
        records.push(to_record(row)?);
    }
    Ok(records)
}

fn to_record(row: RawRow) -> Result<RawRecord> {
    let hire_date = parse_date(require(row.hire_date, "Hire Date")?, "Hire Date")?;
    let exit_date = match row.exit_date {
        Some(s) if !s.trim().is_empty() => Some(parse_date(s, "Exit Date")?),
        _ => None,
    };
    Ok(RawRecord {
        eeid: require(row.eeid, "EEID")?,
        job_title: require(row.job_title, "Job Title")?,
        department: require(row.department, "Department")?,
        age: require(row.age, "Age")?,
        hire_date,
        annual_salary: require(row.annual_salary, "Annual Salary")?,
        bonus_pct: require(row.bonus_pct, "Bonus %")?,
        country: require(row.country, "Country")?,
        city: require(row.city, "City")?,
        exit_date,
    })
}

fn require(value: Option<String>, column: &'static str) -> Result<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err(ReportError::ValueFormat {
            column,
            value: String::new(),
            reason: "cell is empty",
        }),
    }
}

fn parse_date(value: String, column: &'static str) -> Result<NaiveDate> {
    let s = value.trim();
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    Err(ReportError::ValueFormat {
        column,
        value,
        reason: "not a recognized date",
    })
}
