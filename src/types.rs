use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// One CSV record as it appears in the source file. Every column is kept as
/// an optional string; presence and format are enforced downstream so that
/// errors can name the offending column.
#[derive(Debug, Deserialize)]
pub struct RawRow {
    #[serde(rename = "EEID")]
    pub eeid: Option<String>,
    #[serde(rename = "Full Name")]
    pub full_name: Option<String>,
    #[serde(rename = "Job Title")]
    pub job_title: Option<String>,
    #[serde(rename = "Department")]
    pub department: Option<String>,
    #[serde(rename = "Business Unit")]
    pub business_unit: Option<String>,
    #[serde(rename = "Gender")]
    pub gender: Option<String>,
    #[serde(rename = "Ethnicity")]
    pub ethnicity: Option<String>,
    #[serde(rename = "Age")]
    pub age: Option<String>,
    #[serde(rename = "Hire Date")]
    pub hire_date: Option<String>,
    #[serde(rename = "Annual Salary")]
    pub annual_salary: Option<String>,
    #[serde(rename = "Bonus %")]
    pub bonus_pct: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "Exit Date")]
    pub exit_date: Option<String>,
}

/// A loaded record: text columns still raw, the two date columns parsed.
/// `Exit Date` is empty for employees still on payroll.
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub eeid: String,
    pub job_title: String,
    pub department: String,
    pub age: String,
    pub hire_date: NaiveDate,
    pub annual_salary: String,
    pub bonus_pct: String,
    pub country: String,
    pub city: String,
    pub exit_date: Option<NaiveDate>,
}

/// A fully typed employee record. Salary and bonus have had their currency
/// and percent decorations stripped; age is a persisted integer.
#[derive(Debug, Clone)]
pub struct Employee {
    pub eeid: String,
    pub job_title: String,
    pub department: String,
    pub age: u32,
    pub hire_date: NaiveDate,
    pub annual_salary: i64,
    pub bonus_pct: u32,
    pub country: String,
    pub city: String,
    pub exit_date: Option<NaiveDate>,
}

// Numeric aggregate rows. Charts draw from these; the display structs below
// are derived from them and never feed back into computation.

#[derive(Debug, Clone, PartialEq)]
pub struct CountrySalaryRow {
    pub country: String,
    pub total_salary: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CitySalaryRow {
    pub country: String,
    pub city: String,
    pub total_salary: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentSalaryRow {
    pub department: String,
    pub total_salary: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryBonusSalaryRow {
    pub country: String,
    pub avg_bonus: f64,
    pub avg_salary: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CityBonusSalaryRow {
    pub country: String,
    pub city: String,
    pub avg_bonus: f64,
    pub avg_salary: f64,
}

// Age and count aggregates carry no currency or percent fields, so the
// numeric rows double as display rows.

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct CountryAgeRow {
    #[serde(rename = "Country")]
    #[tabled(rename = "Country")]
    pub country: String,
    #[serde(rename = "Average Age")]
    #[tabled(rename = "Average Age")]
    pub average_age: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct CityAgeRow {
    #[serde(rename = "Country")]
    #[tabled(rename = "Country")]
    pub country: String,
    #[serde(rename = "City")]
    #[tabled(rename = "City")]
    pub city: String,
    #[serde(rename = "Average Age")]
    #[tabled(rename = "Average Age")]
    pub average_age: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct DepartmentAgeRow {
    #[serde(rename = "Department")]
    #[tabled(rename = "Department")]
    pub department: String,
    #[serde(rename = "Average Age")]
    #[tabled(rename = "Average Age")]
    pub average_age: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct DepartmentCountRow {
    #[serde(rename = "Department")]
    #[tabled(rename = "Department")]
    pub department: String,
    #[serde(rename = "Employee Count")]
    #[tabled(rename = "Employee Count")]
    pub employee_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct PositionCountRow {
    #[serde(rename = "Job Title")]
    #[tabled(rename = "Job Title")]
    pub job_title: String,
    #[serde(rename = "Employee Count")]
    #[tabled(rename = "Employee Count")]
    pub employee_count: usize,
}

// Display rows for the salary and bonus tables: numeric fields replaced by
// currency/percent strings. Display only; there is no way back to numbers.

#[derive(Debug, Clone, Serialize, Tabled)]
pub struct CountrySalaryDisplay {
    #[serde(rename = "Country")]
    #[tabled(rename = "Country")]
    pub country: String,
    #[serde(rename = "Total Annual Salary")]
    #[tabled(rename = "Total Annual Salary")]
    pub total_salary: String,
}

#[derive(Debug, Clone, Serialize, Tabled)]
pub struct CitySalaryDisplay {
    #[serde(rename = "Country")]
    #[tabled(rename = "Country")]
    pub country: String,
    #[serde(rename = "City")]
    #[tabled(rename = "City")]
    pub city: String,
    #[serde(rename = "Total Annual Salary")]
    #[tabled(rename = "Total Annual Salary")]
    pub total_salary: String,
}

#[derive(Debug, Clone, Serialize, Tabled)]
pub struct DepartmentSalaryDisplay {
    #[serde(rename = "Department")]
    #[tabled(rename = "Department")]
    pub department: String,
    #[serde(rename = "Total Annual Salary")]
    #[tabled(rename = "Total Annual Salary")]
    pub total_salary: String,
}

#[derive(Debug, Clone, Serialize, Tabled)]
pub struct CountryBonusSalaryDisplay {
    #[serde(rename = "Country")]
    #[tabled(rename = "Country")]
    pub country: String,
    #[serde(rename = "Average Bonus %")]
    #[tabled(rename = "Average Bonus %")]
    pub avg_bonus: String,
    #[serde(rename = "Average Annual Salary")]
    #[tabled(rename = "Average Annual Salary")]
    pub avg_salary: String,
}

/// All ten formatted tables, ready for the console previews, the HTML
/// template, and the PDF composer.
#[derive(Debug)]
pub struct ReportBundle {
    pub salary_country: Vec<CountrySalaryDisplay>,
    pub salary_city: Vec<CitySalaryDisplay>,
    pub salary_department: Vec<DepartmentSalaryDisplay>,
    pub bonus_salary_country: Vec<CountryBonusSalaryDisplay>,
    pub bonus_salary_city: Vec<CityBonusSalaryDisplay>,
    pub age_country: Vec<CountryAgeRow>,
    pub age_city: Vec<CityAgeRow>,
    pub age_department: Vec<DepartmentAgeRow>,
    pub count_department: Vec<DepartmentCountRow>,
    pub count_position: Vec<PositionCountRow>,
}

#[derive(Debug, Clone, Serialize, Tabled)]
pub struct CityBonusSalaryDisplay {
    #[serde(rename = "Country")]
    #[tabled(rename = "Country")]
    pub country: String,
    #[serde(rename = "City")]
    #[tabled(rename = "City")]
    pub city: String,
    #[serde(rename = "Average Bonus %")]
    #[tabled(rename = "Average Bonus %")]
    pub avg_bonus: String,
    #[serde(rename = "Average Annual Salary")]
    #[tabled(rename = "Average Annual Salary")]
    pub avg_salary: String,
}
