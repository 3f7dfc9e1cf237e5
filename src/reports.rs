//! The ten grouped aggregations.
//!
//! Each function is pure: it takes the cleaned employee table and returns
//! rows keyed by one or two categorical columns. Grouping uses `BTreeMap`,
//! so rows come out in ascending key order (two-level keys by primary key,
//! then secondary). The functions share no state and can run in any order.
//!
//! Means round half away from zero (`f64::round`): a mean age of 34.5
//! reports as 35.

use crate::types::{
    CityAgeRow, CityBonusSalaryRow, CitySalaryRow, CountryAgeRow, CountryBonusSalaryRow,
    CountrySalaryRow, DepartmentAgeRow, DepartmentCountRow, DepartmentSalaryRow, Employee,
    PositionCountRow,
};
use crate::util::{mean, round2};
use std::collections::BTreeMap;

/// Sum of annual salary by country.
pub fn salary_by_country(data: &[Employee]) -> Vec<CountrySalaryRow> {
    let mut groups: BTreeMap<&str, i64> = BTreeMap::new();
    for e in data {
        *groups.entry(e.country.as_str()).or_insert(0) += e.annual_salary;
    }
    groups
        .into_iter()
        .map(|(country, total_salary)| CountrySalaryRow {
            country: country.to_string(),
            total_salary,
        })
        .collect()
}

/// Sum of annual salary by (country, city).
pub fn salary_by_city(data: &[Employee]) -> Vec<CitySalaryRow> {
    let mut groups: BTreeMap<(&str, &str), i64> = BTreeMap::new();
    for e in data {
        *groups
            .entry((e.country.as_str(), e.city.as_str()))
            .or_insert(0) += e.annual_salary;
    }
    groups
        .into_iter()
        .map(|((country, city), total_salary)| CitySalaryRow {
            country: country.to_string(),
            city: city.to_string(),
            total_salary,
        })
        .collect()
}

/// Sum of annual salary by department.
pub fn salary_by_department(data: &[Employee]) -> Vec<DepartmentSalaryRow> {
    let mut groups: BTreeMap<&str, i64> = BTreeMap::new();
    for e in data {
        *groups.entry(e.department.as_str()).or_insert(0) += e.annual_salary;
    }
    groups
        .into_iter()
        .map(|(department, total_salary)| DepartmentSalaryRow {
            department: department.to_string(),
            total_salary,
        })
        .collect()
}

/// Average bonus % and average annual salary by country, both rounded to
/// two decimals.
pub fn bonus_salary_by_country(data: &[Employee]) -> Vec<CountryBonusSalaryRow> {
    let mut groups: BTreeMap<&str, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for e in data {
        let entry = groups.entry(e.country.as_str()).or_default();
        entry.0.push(e.bonus_pct as f64);
        entry.1.push(e.annual_salary as f64);
    }
    groups
        .into_iter()
        .map(|(country, (bonuses, salaries))| CountryBonusSalaryRow {
            country: country.to_string(),
            avg_bonus: round2(mean(&bonuses)),
            avg_salary: round2(mean(&salaries)),
        })
        .collect()
}

/// Average bonus % and average annual salary by (country, city), both
/// rounded to two decimals.
pub fn bonus_salary_by_city(data: &[Employee]) -> Vec<CityBonusSalaryRow> {
    let mut groups: BTreeMap<(&str, &str), (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for e in data {
        let entry = groups
            .entry((e.country.as_str(), e.city.as_str()))
            .or_default();
        entry.0.push(e.bonus_pct as f64);
        entry.1.push(e.annual_salary as f64);
    }
    groups
        .into_iter()
        .map(|((country, city), (bonuses, salaries))| CityBonusSalaryRow {
            country: country.to_string(),
            city: city.to_string(),
            avg_bonus: round2(mean(&bonuses)),
            avg_salary: round2(mean(&salaries)),
        })
        .collect()
}

/// Average age by country, rounded to the nearest integer.
pub fn age_by_country(data: &[Employee]) -> Vec<CountryAgeRow> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for e in data {
        groups
            .entry(e.country.as_str())
            .or_default()
            .push(e.age as f64);
    }
    groups
        .into_iter()
        .map(|(country, ages)| CountryAgeRow {
            country: country.to_string(),
            average_age: mean(&ages).round() as i64,
        })
        .collect()
}

/// Average age by (country, city), rounded to the nearest integer.
pub fn age_by_city(data: &[Employee]) -> Vec<CityAgeRow> {
    let mut groups: BTreeMap<(&str, &str), Vec<f64>> = BTreeMap::new();
    for e in data {
        groups
            .entry((e.country.as_str(), e.city.as_str()))
            .or_default()
            .push(e.age as f64);
    }
    groups
        .into_iter()
        .map(|((country, city), ages)| CityAgeRow {
            country: country.to_string(),
            city: city.to_string(),
            average_age: mean(&ages).round() as i64,
        })
        .collect()
}

/// Average age by department, rounded to the nearest integer.
pub fn age_by_department(data: &[Employee]) -> Vec<DepartmentAgeRow> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for e in data {
        groups
            .entry(e.department.as_str())
            .or_default()
            .push(e.age as f64);
    }
    groups
        .into_iter()
        .map(|(department, ages)| DepartmentAgeRow {
            department: department.to_string(),
            average_age: mean(&ages).round() as i64,
        })
        .collect()
}

/// Number of employees in each department.
pub fn count_by_department(data: &[Employee]) -> Vec<DepartmentCountRow> {
    let mut groups: BTreeMap<&str, usize> = BTreeMap::new();
    for e in data {
        *groups.entry(e.department.as_str()).or_insert(0) += 1;
    }
    groups
        .into_iter()
        .map(|(department, employee_count)| DepartmentCountRow {
            department: department.to_string(),
            employee_count,
        })
        .collect()
}

/// Number of employees in each position.
pub fn count_by_position(data: &[Employee]) -> Vec<PositionCountRow> {
    let mut groups: BTreeMap<&str, usize> = BTreeMap::new();
    for e in data {
        *groups.entry(e.job_title.as_str()).or_insert(0) += 1;
    }
    groups
        .into_iter()
        .map(|(job_title, employee_count)| PositionCountRow {
            job_title: job_title.to_string(),
            employee_count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn employee(
        eeid: &str,
        job_title: &str,
        department: &str,
        age: u32,
        salary: i64,
        bonus: u32,
        country: &str,
        city: &str,
    ) -> Employee {
        Employee {
            eeid: eeid.to_string(),
            job_title: job_title.to_string(),
            department: department.to_string(),
            age,
            hire_date: NaiveDate::from_ymd_opt(2019, 3, 24).unwrap(),
            annual_salary: salary,
            bonus_pct: bonus,
            country: country.to_string(),
            city: city.to_string(),
            exit_date: None,
        }
    }

    fn fixture() -> Vec<Employee> {
        vec![
            // Source row order puts Germany before Canada on purpose; the
            // reports must come out key-ascending regardless.
            employee("E1", "Analyst", "Sales", 40, 60000, 10, "Germany", "Berlin"),
            employee("E2", "Analyst", "Sales", 30, 50000, 10, "Canada", "Toronto"),
            employee("E3", "Manager", "Sales", 35, 75000, 20, "Canada", "Toronto"),
            employee("E4", "Engineer", "IT", 28, 90000, 0, "Canada", "Vancouver"),
        ]
    }

    #[test]
    fn salary_by_country_orders_keys_ascending() {
        let rows = salary_by_country(&fixture());
        let keys: Vec<&str> = rows.iter().map(|r| r.country.as_str()).collect();
        assert_eq!(keys, vec!["Canada", "Germany"]);
        assert_eq!(rows[0].total_salary, 215000);
        assert_eq!(rows[1].total_salary, 60000);
    }

    #[test]
    fn group_sums_add_up_to_dataset_total() {
        let data = fixture();
        let total: i64 = data.iter().map(|e| e.annual_salary).sum();
        let by_country: i64 = salary_by_country(&data).iter().map(|r| r.total_salary).sum();
        let by_city: i64 = salary_by_city(&data).iter().map(|r| r.total_salary).sum();
        let by_department: i64 = salary_by_department(&data)
            .iter()
            .map(|r| r.total_salary)
            .sum();
        assert_eq!(by_country, total);
        assert_eq!(by_city, total);
        assert_eq!(by_department, total);
    }

    #[test]
    fn group_counts_add_up_to_dataset_size() {
        let data = fixture();
        let by_department: usize = count_by_department(&data)
            .iter()
            .map(|r| r.employee_count)
            .sum();
        let by_position: usize = count_by_position(&data)
            .iter()
            .map(|r| r.employee_count)
            .sum();
        assert_eq!(by_department, data.len());
        assert_eq!(by_position, data.len());
    }

    #[test]
    fn two_employees_in_one_city_collapse_to_one_row() {
        let rows = salary_by_city(&fixture());
        let toronto: Vec<_> = rows.iter().filter(|r| r.city == "Toronto").collect();
        assert_eq!(toronto.len(), 1);
        assert_eq!(toronto[0].country, "Canada");
        assert_eq!(toronto[0].total_salary, 125000);
    }

    #[test]
    fn city_rows_order_by_country_then_city() {
        let rows = salary_by_city(&fixture());
        let keys: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.country.as_str(), r.city.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Canada", "Toronto"),
                ("Canada", "Vancouver"),
                ("Germany", "Berlin"),
            ]
        );
    }

    #[test]
    fn single_employee_department_reports_exact_values() {
        let data = fixture();
        let counts = count_by_department(&data);
        let it = counts.iter().find(|r| r.department == "IT").unwrap();
        assert_eq!(it.employee_count, 1);
        let ages = age_by_department(&data);
        let it_age = ages.iter().find(|r| r.department == "IT").unwrap();
        assert_eq!(it_age.average_age, 28);
    }

    #[test]
    fn bonus_salary_means_round_to_two_decimals() {
        let data = vec![
            employee("E1", "Analyst", "Sales", 30, 50000, 10, "Canada", "Toronto"),
            employee("E2", "Analyst", "Sales", 30, 50001, 15, "Canada", "Toronto"),
            employee("E3", "Analyst", "Sales", 30, 50002, 20, "Canada", "Toronto"),
        ]; // salary mean 50001.0, bonus mean 15.0
        let rows = bonus_salary_by_country(&data);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].avg_bonus, 15.0);
        assert_eq!(rows[0].avg_salary, 50001.0);

        let data = vec![
            employee("E1", "Analyst", "Sales", 30, 50000, 10, "Canada", "Toronto"),
            employee("E2", "Analyst", "Sales", 30, 50001, 13, "Canada", "Toronto"),
            employee("E3", "Analyst", "Sales", 30, 50001, 13, "Canada", "Toronto"),
        ]; // bonus mean 12.0, salary mean 50000.666...
        let rows = bonus_salary_by_country(&data);
        assert_eq!(rows[0].avg_bonus, 12.0);
        assert_eq!(rows[0].avg_salary, 50000.67);
    }

    #[test]
    fn mean_age_rounds_half_away_from_zero() {
        // Ages 34 and 35 give a mean of exactly 34.5, the ambiguous
        // boundary between rounding policies. `f64::round` reports 35.
        let data = vec![
            employee("E1", "Analyst", "Sales", 34, 50000, 0, "Canada", "Toronto"),
            employee("E2", "Analyst", "Sales", 35, 50000, 0, "Canada", "Toronto"),
        ];
        let rows = age_by_country(&data);
        assert_eq!(rows[0].average_age, 35);
    }

    #[test]
    fn age_by_city_groups_on_both_keys() {
        let rows = age_by_city(&fixture());
        assert_eq!(rows.len(), 3);
        let toronto = rows
            .iter()
            .find(|r| r.city == "Toronto")
            .expect("Toronto row");
        // Ages 30 and 35 -> mean 32.5 -> 33 under round-half-away.
        assert_eq!(toronto.average_age, 33);
    }

    #[test]
    fn count_by_position_groups_job_titles() {
        let rows = count_by_position(&fixture());
        let analyst = rows.iter().find(|r| r.job_title == "Analyst").unwrap();
        assert_eq!(analyst.employee_count, 2);
        let keys: Vec<&str> = rows.iter().map(|r| r.job_title.as_str()).collect();
        assert_eq!(keys, vec!["Analyst", "Engineer", "Manager"]);
    }

    #[test]
    fn empty_table_yields_empty_reports() {
        assert!(salary_by_country(&[]).is_empty());
        assert!(bonus_salary_by_city(&[]).is_empty());
        assert!(count_by_department(&[]).is_empty());
    }
}
