//! Numeric aggregates to display strings.
//!
//! Salary fields become `$` + thousands-separated values, bonus fields
//! become fixed two-decimal percentages. Age and count tables pass through
//! untouched. The conversion is one-way; nothing downstream computes on
//! these strings.

use crate::types::{
    CityBonusSalaryDisplay, CityBonusSalaryRow, CitySalaryDisplay, CitySalaryRow,
    CountryBonusSalaryDisplay, CountryBonusSalaryRow, CountrySalaryDisplay, CountrySalaryRow,
    DepartmentSalaryDisplay, DepartmentSalaryRow,
};
use crate::util::{format_int, format_number};

/// `1234567 -> "$1,234,567"`.
pub fn currency(amount: i64) -> String {
    format!("${}", format_int(amount))
}

/// Two-decimal currency for averaged salaries: `71572.5 -> "$71,572.50"`.
pub fn currency_mean(amount: f64) -> String {
    format!("${}", format_number(amount, 2))
}

/// `12.3 -> "12.30%"`.
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value)
}

pub fn country_salary(rows: &[CountrySalaryRow]) -> Vec<CountrySalaryDisplay> {
    rows.iter()
        .map(|r| CountrySalaryDisplay {
            country: r.country.clone(),
            total_salary: currency(r.total_salary),
        })
        .collect()
}

pub fn city_salary(rows: &[CitySalaryRow]) -> Vec<CitySalaryDisplay> {
    rows.iter()
        .map(|r| CitySalaryDisplay {
            country: r.country.clone(),
            city: r.city.clone(),
            total_salary: currency(r.total_salary),
        })
        .collect()
}

pub fn department_salary(rows: &[DepartmentSalaryRow]) -> Vec<DepartmentSalaryDisplay> {
    rows.iter()
        .map(|r| DepartmentSalaryDisplay {
            department: r.department.clone(),
            total_salary: currency(r.total_salary),
        })
        .collect()
}

pub fn country_bonus_salary(rows: &[CountryBonusSalaryRow]) -> Vec<CountryBonusSalaryDisplay> {
    rows.iter()
        .map(|r| CountryBonusSalaryDisplay {
            country: r.country.clone(),
            avg_bonus: percent(r.avg_bonus),
            avg_salary: currency_mean(r.avg_salary),
        })
        .collect()
}

pub fn city_bonus_salary(rows: &[CityBonusSalaryRow]) -> Vec<CityBonusSalaryDisplay> {
    rows.iter()
        .map(|r| CityBonusSalaryDisplay {
            country: r.country.clone(),
            city: r.city.clone(),
            avg_bonus: percent(r.avg_bonus),
            avg_salary: currency_mean(r.avg_salary),
        })
        .collect()
}
