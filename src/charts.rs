//! Chart rasterization for the five plotted aggregates.
//!
//! Charts draw from the raw numeric aggregate rows, never from the
//! formatted display strings. Each chart is a 900x600 PNG written to a
//! fixed path under the plots directory; existing files are overwritten.

use crate::error::{ReportError, Result};
use crate::types::{
    CitySalaryRow, CountrySalaryRow, DepartmentCountRow, DepartmentSalaryRow, PositionCountRow,
};
use crate::util::format_int;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};

pub const SALARY_COUNTRY_PNG: &str = "plots/salary_country.png";
pub const SALARY_CITY_PNG: &str = "plots/salary_city.png";
pub const SALARY_DEPARTMENT_PNG: &str = "plots/salary_department.png";
pub const NUM_EMPLOYEE_DEPARTMENT_PNG: &str = "plots/num_employee_department.png";
pub const NUM_EMPLOYEE_POSITION_PNG: &str = "plots/num_employee_position.png";

/// On-disk locations of the five chart images.
#[derive(Debug, Clone)]
pub struct ChartFiles {
    pub salary_country: PathBuf,
    pub salary_city: PathBuf,
    pub salary_department: PathBuf,
    pub num_employee_department: PathBuf,
    pub num_employee_position: PathBuf,
}

impl ChartFiles {
    /// The fixed relative paths the report pipeline writes to.
    pub fn standard() -> Self {
        Self {
            salary_country: PathBuf::from(SALARY_COUNTRY_PNG),
            salary_city: PathBuf::from(SALARY_CITY_PNG),
            salary_department: PathBuf::from(SALARY_DEPARTMENT_PNG),
            num_employee_department: PathBuf::from(NUM_EMPLOYEE_DEPARTMENT_PNG),
            num_employee_position: PathBuf::from(NUM_EMPLOYEE_POSITION_PNG),
        }
    }
}

const WIDTH: u32 = 900;
const HEIGHT: u32 = 600;

const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);

const PALETTE: &[RGBColor] = &[
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

pub fn salary_by_country(rows: &[CountrySalaryRow], path: &Path) -> Result<()> {
    let labels: Vec<String> = rows.iter().map(|r| r.country.clone()).collect();
    let values: Vec<i64> = rows.iter().map(|r| r.total_salary).collect();
    draw_bar_chart(
        path,
        "Sum of annual salary by country",
        "Country",
        "Sum of annual salary",
        &labels,
        &values,
    )
    .map_err(|e| chart_err(path, e))
}

pub fn salary_by_city(rows: &[CitySalaryRow], path: &Path) -> Result<()> {
    let labels: Vec<String> = rows
        .iter()
        .map(|r| format!("({}, {})", r.country, r.city))
        .collect();
    let values: Vec<i64> = rows.iter().map(|r| r.total_salary).collect();
    draw_bar_chart(
        path,
        "Sum of annual salary by city",
        "City",
        "Sum of annual salary",
        &labels,
        &values,
    )
    .map_err(|e| chart_err(path, e))
}

pub fn salary_by_department(rows: &[DepartmentSalaryRow], path: &Path) -> Result<()> {
    let labels: Vec<String> = rows.iter().map(|r| r.department.clone()).collect();
    let values: Vec<i64> = rows.iter().map(|r| r.total_salary).collect();
    draw_bar_chart(
        path,
        "Sum of annual salary by department",
        "Department",
        "Sum of annual salary",
        &labels,
        &values,
    )
    .map_err(|e| chart_err(path, e))
}

/// Pie with per-slice labels and no legend.
pub fn count_by_department(rows: &[DepartmentCountRow], path: &Path) -> Result<()> {
    let labels: Vec<String> = rows.iter().map(|r| r.department.clone()).collect();
    let values: Vec<usize> = rows.iter().map(|r| r.employee_count).collect();
    draw_pie_chart(path, "Employees in each department", &labels, &values, true)
        .map_err(|e| chart_err(path, e))
}

/// Pie with no per-slice labels; the legend sits beside the pie instead.
pub fn count_by_position(rows: &[PositionCountRow], path: &Path) -> Result<()> {
    let labels: Vec<String> = rows.iter().map(|r| r.job_title.clone()).collect();
    let values: Vec<usize> = rows.iter().map(|r| r.employee_count).collect();
    draw_pie_chart(path, "Employees in each position", &labels, &values, false)
        .map_err(|e| chart_err(path, e))
}

fn chart_err(path: &Path, message: impl std::fmt::Display) -> ReportError {
    ReportError::Chart {
        path: path.display().to_string(),
        message: message.to_string(),
    }
}

fn draw_bar_chart(
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    labels: &[String],
    values: &[i64],
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = values.iter().copied().max().unwrap_or(0).max(1);
    let y_max = y_max + y_max / 10 + 1;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(150)
        .y_label_area_size(95)
        .build_cartesian_2d((0..labels.len()).into_segmented(), 0i64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .x_labels(labels.len())
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                labels.get(*i).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .x_label_style(
            TextStyle::from(("sans-serif", 13).into_font())
                .transform(FontTransform::Rotate90)
                .pos(Pos::new(HPos::Center, VPos::Top)),
        )
        .y_label_formatter(&|v| format_int(*v))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BAR_COLOR.filled())
            .margin(6)
            .data(values.iter().enumerate().map(|(i, v)| (i, *v))),
    )?;

    root.present()?;
    Ok(())
}

fn draw_pie_chart(
    path: &Path,
    title: &str,
    labels: &[String],
    values: &[usize],
    slice_labels: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(title, ("sans-serif", 24))?;

    let sizes: Vec<f64> = values.iter().map(|v| *v as f64).collect();
    let colors: Vec<RGBColor> = (0..values.len())
        .map(|i| PALETTE[i % PALETTE.len()])
        .collect();
    let center = (400, 300);
    let radius = 200.0;

    if slice_labels {
        let mut pie = Pie::new(&center, &radius, &sizes, &colors, labels);
        pie.label_style(("sans-serif", 14).into_font());
        root.draw(&pie)?;
    } else {
        // Keep the slices clean and list the categories to the side.
        let blank: Vec<String> = labels.iter().map(|_| String::new()).collect();
        let pie = Pie::new(&center, &radius, &sizes, &colors, &blank);
        root.draw(&pie)?;
        for (i, label) in labels.iter().enumerate() {
            let y = 120 + (i as i32) * 26;
            root.draw(&Rectangle::new(
                [(660, y), (676, y + 16)],
                colors[i % colors.len()].filled(),
            ))?;
            root.draw(&Text::new(
                label.clone(),
                (684, y + 2),
                ("sans-serif", 14).into_font(),
            ))?;
        }
    }

    root.present()?;
    Ok(())
}
