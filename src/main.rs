// Employee report generator.
//
// Linear batch pipeline over a CSV employee dataset:
// - load and decode the table, parse the two date columns,
// - cast salary/bonus/age to integers,
// - compute ten grouped aggregates,
// - render five charts as PNG files,
// - format the aggregates for display,
// - assemble report.html and export report.pdf.
//
// All paths are fixed and relative to the working directory; the run
// either completes and writes every artifact or aborts on the first error.
mod charts;
mod clean;
mod error;
mod fonts;
mod format;
mod html;
mod loader;
mod output;
mod pdf;
mod reports;
mod types;
mod util;

use error::{ReportError, Result};
use log::{error, info};
use std::path::Path;
use types::ReportBundle;

const INPUT_CSV: &str = "data/employee_data.csv";
const PLOTS_DIR: &str = "plots";
const REPORT_HTML: &str = "report.html";
const REPORT_PDF: &str = "report.pdf";

const PREVIEW_ROWS: usize = 5;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        error!("report generation failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    info!("loading {}", INPUT_CSV);
    let raw = loader::load(INPUT_CSV)?;
    info!("{} rows loaded", util::format_int(raw.len()));
    let data = clean::clean(raw)?;

    let salary_country = reports::salary_by_country(&data);
    let salary_city = reports::salary_by_city(&data);
    let salary_department = reports::salary_by_department(&data);
    let bonus_salary_country = reports::bonus_salary_by_country(&data);
    let bonus_salary_city = reports::bonus_salary_by_city(&data);
    let age_country = reports::age_by_country(&data);
    let age_city = reports::age_by_city(&data);
    let age_department = reports::age_by_department(&data);
    let count_department = reports::count_by_department(&data);
    let count_position = reports::count_by_position(&data);

    info!("rendering charts to {}/", PLOTS_DIR);
    std::fs::create_dir_all(PLOTS_DIR).map_err(|source| ReportError::Output {
        path: PLOTS_DIR.to_string(),
        source,
    })?;
    let files = charts::ChartFiles::standard();
    charts::salary_by_country(&salary_country, &files.salary_country)?;
    charts::salary_by_city(&salary_city, &files.salary_city)?;
    charts::salary_by_department(&salary_department, &files.salary_department)?;
    charts::count_by_department(&count_department, &files.num_employee_department)?;
    charts::count_by_position(&count_position, &files.num_employee_position)?;

    let tables = ReportBundle {
        salary_country: format::country_salary(&salary_country),
        salary_city: format::city_salary(&salary_city),
        salary_department: format::department_salary(&salary_department),
        bonus_salary_country: format::country_bonus_salary(&bonus_salary_country),
        bonus_salary_city: format::city_bonus_salary(&bonus_salary_city),
        age_country,
        age_city,
        age_department,
        count_department,
        count_position,
    };

    output::preview_table(
        "Sum of annual salary by country",
        &tables.salary_country,
        PREVIEW_ROWS,
    );
    output::preview_table(
        "Sum of annual salary by city",
        &tables.salary_city,
        PREVIEW_ROWS,
    );
    output::preview_table(
        "Sum of annual salary by department",
        &tables.salary_department,
        PREVIEW_ROWS,
    );
    output::preview_table(
        "Average bonus % and annual salary by country",
        &tables.bonus_salary_country,
        PREVIEW_ROWS,
    );
    output::preview_table(
        "Average bonus % and annual salary by city",
        &tables.bonus_salary_city,
        PREVIEW_ROWS,
    );
    output::preview_table("Average age by country", &tables.age_country, PREVIEW_ROWS);
    output::preview_table("Average age by city", &tables.age_city, PREVIEW_ROWS);
    output::preview_table(
        "Average age by department",
        &tables.age_department,
        PREVIEW_ROWS,
    );
    output::preview_table(
        "Employees in each department",
        &tables.count_department,
        PREVIEW_ROWS,
    );
    output::preview_table(
        "Employees in each position",
        &tables.count_position,
        PREVIEW_ROWS,
    );

    let html_doc = html::render_report(&tables)?;
    output::write_text(REPORT_HTML, &html_doc)?;
    info!("wrote {}", REPORT_HTML);

    pdf::export(&tables, &files, Path::new(REPORT_PDF))?;
    info!("wrote {}", REPORT_PDF);

    Ok(())
}
