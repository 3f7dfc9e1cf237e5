//! HTML assembly.
//!
//! The ten display tables and the five chart image paths are bound into an
//! embedded handlebars template. Image references stay relative so they
//! resolve against the working directory when the document is opened.

use crate::charts;
use crate::error::Result;
use crate::types::ReportBundle;
use handlebars::Handlebars;
use once_cell::sync::Lazy;
use serde_json::json;

static TEMPLATES: Lazy<Handlebars<'static>> = Lazy::new(|| {
    let mut hb = Handlebars::new();
    hb.register_template_string("report", include_str!("../templates/report.hbs"))
        .expect("embedded report template is valid");
    hb
});

/// Render the full report document as an HTML string.
pub fn render_report(tables: &ReportBundle) -> Result<String> {
    let context = json!({
        "salary_country": &tables.salary_country,
        "salary_country_plot": charts::SALARY_COUNTRY_PNG,
        "salary_city": &tables.salary_city,
        "salary_city_plot": charts::SALARY_CITY_PNG,
        "salary_department": &tables.salary_department,
        "salary_department_plot": charts::SALARY_DEPARTMENT_PNG,
        "avg_bonus_salary_country": &tables.bonus_salary_country,
        "avg_bonus_salary_city": &tables.bonus_salary_city,
        "avg_age_country": &tables.age_country,
        "avg_age_city": &tables.age_city,
        "avg_age_department": &tables.age_department,
        "num_employee_department": &tables.count_department,
        "num_employee_department_plot": charts::NUM_EMPLOYEE_DEPARTMENT_PNG,
        "num_employee_position": &tables.count_position,
        "num_employee_position_plot": charts::NUM_EMPLOYEE_POSITION_PNG,
        "generated_on": chrono::Local::now().format("%B %e, %Y").to_string(),
    });
    Ok(TEMPLATES.render("report", &context)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        CityAgeRow, CityBonusSalaryDisplay, CitySalaryDisplay, CountryAgeRow,
        CountryBonusSalaryDisplay, CountrySalaryDisplay, DepartmentAgeRow, DepartmentCountRow,
        DepartmentSalaryDisplay, PositionCountRow,
    };

    fn bundle() -> ReportBundle {
        ReportBundle {
            salary_country: vec![CountrySalaryDisplay {
                country: "Canada".to_string(),
                total_salary: "$125,000".to_string(),
            }],
            salary_city: vec![CitySalaryDisplay {
                country: "Canada".to_string(),
                city: "Toronto".to_string(),
                total_salary: "$125,000".to_string(),
            }],
            salary_department: vec![DepartmentSalaryDisplay {
                department: "Sales".to_string(),
                total_salary: "$125,000".to_string(),
            }],
            bonus_salary_country: vec![CountryBonusSalaryDisplay {
                country: "Canada".to_string(),
                avg_bonus: "12.30%".to_string(),
                avg_salary: "$62,500.00".to_string(),
            }],
            bonus_salary_city: vec![CityBonusSalaryDisplay {
                country: "Canada".to_string(),
                city: "Toronto".to_string(),
                avg_bonus: "12.30%".to_string(),
                avg_salary: "$62,500.00".to_string(),
            }],
            age_country: vec![CountryAgeRow {
                country: "Canada".to_string(),
                average_age: 33,
            }],
            age_city: vec![CityAgeRow {
                country: "Canada".to_string(),
                city: "Toronto".to_string(),
                average_age: 33,
            }],
            age_department: vec![DepartmentAgeRow {
                department: "Sales".to_string(),
                average_age: 33,
            }],
            count_department: vec![DepartmentCountRow {
                department: "Sales".to_string(),
                employee_count: 2,
            }],
            count_position: vec![PositionCountRow {
                job_title: "Analyst".to_string(),
                employee_count: 2,
            }],
        }
    }

    #[test]
    fn renders_table_cells_and_image_references() {
        let html = render_report(&bundle()).expect("template renders");
        assert!(html.contains("<td>Canada</td>"));
        assert!(html.contains("<td>$125,000</td>"));
        assert!(html.contains("<td>12.30%</td>"));
        assert!(html.contains("<td>$62,500.00</td>"));
        assert!(html.contains("src=\"plots/salary_country.png\""));
        assert!(html.contains("src=\"plots/num_employee_position.png\""));
    }

    #[test]
    fn escapes_html_in_cell_values() {
        let mut b = bundle();
        b.salary_department[0].department = "R&D".to_string();
        let html = render_report(&b).expect("template renders");
        assert!(html.contains("<td>R&amp;D</td>"));
        assert!(!html.contains("<td>R&D</td>"));
    }

    #[test]
    fn renders_all_ten_sections() {
        let html = render_report(&bundle()).expect("template renders");
        for heading in [
            "Sum of annual salary by country",
            "Sum of annual salary by city",
            "Sum of annual salary by department",
            "Average bonus % and annual salary by country",
            "Average bonus % and annual salary by city",
            "Average age by country",
            "Average age by city",
            "Average age by department",
            "Employees in each department",
            "Employees in each position",
        ] {
            assert!(html.contains(heading), "missing section: {heading}");
        }
    }
}
