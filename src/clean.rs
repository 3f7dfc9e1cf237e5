//! Typecasting for the three numeric columns.
//!
//! The source stores `Annual Salary` as a currency string (`$92,368`) and
//! `Bonus %` as a percent string (`15%`). Cleaning strips the decoration
//! and parses integers; `Age` is parsed and persisted as an integer so the
//! age aggregates can round and cast without re-parsing. Cleaning is
//! defined only on the raw string-formatted input and is not re-enterable.

use crate::error::{ReportError, Result};
use crate::types::{Employee, RawRecord};

/// Cast the loaded table into typed employee records. Any cell that does
/// not match the expected literal format fails the run; there is no per-row
/// fallback.
pub fn clean(rows: Vec<RawRecord>) -> Result<Vec<Employee>> {
    rows.into_iter().map(clean_record).collect()
}

fn clean_record(row: RawRecord) -> Result<Employee> {
    let age = parse_age(&row.age)?;
    let annual_salary = parse_currency(&row.annual_salary)?;
    let bonus_pct = parse_percent(&row.bonus_pct)?;
    Ok(Employee {
        eeid: row.eeid,
        job_title: row.job_title,
        department: row.department,
        age,
        hire_date: row.hire_date,
        annual_salary,
        bonus_pct,
        country: row.country,
        city: row.city,
        exit_date: row.exit_date,
    })
}

/// Strip one leading `$` and all thousands-separator commas, then parse.
///
/// A value without the currency symbol (`50000`) is tolerated: stripping is
/// a no-op and the digits parse as-is. Anything else in the cell fails.
/// Sums over the parsed values use `i64`; the dataset assumption is that
/// the company-wide salary total stays under 2e9 either way.
pub fn parse_currency(value: &str) -> Result<i64> {
    let s = value.trim();
    let s = s.strip_prefix('$').unwrap_or(s);
    let s = s.replace(',', "");
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReportError::ValueFormat {
            column: "Annual Salary",
            value: value.to_string(),
            reason: "expected an optional '$' followed by digits and commas",
        });
    }
    s.parse::<i64>().map_err(|_| ReportError::ValueFormat {
        column: "Annual Salary",
        value: value.to_string(),
        reason: "amount out of range",
    })
}

/// Strip one trailing `%` and parse. The 0..=100 range is expected but not
/// validated.
pub fn parse_percent(value: &str) -> Result<u32> {
    let s = value.trim();
    let s = s.strip_suffix('%').unwrap_or(s);
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReportError::ValueFormat {
            column: "Bonus %",
            value: value.to_string(),
            reason: "expected digits with an optional trailing '%'",
        });
    }
    s.parse::<u32>().map_err(|_| ReportError::ValueFormat {
        column: "Bonus %",
        value: value.to_string(),
        reason: "percentage out of range",
    })
}

fn parse_age(value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ReportError::ValueFormat {
            column: "Age",
            value: value.to_string(),
            reason: "expected an integer",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn raw(age: &str, salary: &str, bonus: &str) -> RawRecord {
        RawRecord {
            eeid: "E01001".to_string(),
            job_title: "Analyst".to_string(),
            department: "Sales".to_string(),
            age: age.to_string(),
            hire_date: NaiveDate::from_ymd_opt(2018, 6, 1).unwrap(),
            annual_salary: salary.to_string(),
            bonus_pct: bonus.to_string(),
            country: "Canada".to_string(),
            city: "Toronto".to_string(),
            exit_date: None,
        }
    }

    #[test]
    fn strips_currency_decoration() {
        assert_eq!(parse_currency("$141,604").unwrap(), 141604);
        assert_eq!(parse_currency("$92,368").unwrap(), 92368);
    }

    #[test]
    fn missing_currency_symbol_is_tolerated() {
        assert_eq!(parse_currency("50000").unwrap(), 50000);
    }

    #[test]
    fn non_numeric_salary_fails() {
        let err = parse_currency("N/A").unwrap_err();
        assert!(matches!(
            err,
            ReportError::ValueFormat {
                column: "Annual Salary",
                ..
            }
        ));
    }

    #[test]
    fn strips_percent_sign() {
        assert_eq!(parse_percent("15%").unwrap(), 15);
        assert_eq!(parse_percent("0%").unwrap(), 0);
    }

    #[test]
    fn missing_percent_sign_is_tolerated() {
        assert_eq!(parse_percent("7").unwrap(), 7);
    }

    #[test]
    fn non_numeric_bonus_fails() {
        assert!(parse_percent("n/a").is_err());
    }

    #[test]
    fn cleans_a_full_record() {
        let employees = clean(vec![raw("34", "$75,000", "12%")]).unwrap();
        assert_eq!(employees.len(), 1);
        let e = &employees[0];
        assert_eq!(e.age, 34);
        assert_eq!(e.annual_salary, 75000);
        assert_eq!(e.bonus_pct, 12);
    }

    #[test]
    fn bad_age_names_the_column() {
        let err = clean(vec![raw("unknown", "$75,000", "12%")]).unwrap_err();
        assert!(matches!(
            err,
            ReportError::ValueFormat { column: "Age", .. }
        ));
    }
}
