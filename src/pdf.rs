//! PDF composition.
//!
//! The exported document carries the same ten formatted tables and five
//! chart images as the HTML report. Tables are driven generically through
//! the `Tabled` trait so each display row type renders without a dedicated
//! code path.

use crate::charts::ChartFiles;
use crate::error::Result;
use crate::fonts;
use crate::types::ReportBundle;
use genpdf::elements::{Break, FrameCellDecorator, Image, Paragraph, TableLayout};
use genpdf::style::Style;
use genpdf::{Alignment, Document, Element, Scale, SimplePageDecorator};
use std::path::Path;
use tabled::Tabled;

const PAGE_MARGIN_MM: i32 = 10;
const CHART_SCALE: f64 = 1.8;

/// Compose and write the report PDF.
pub fn export(tables: &ReportBundle, charts: &ChartFiles, path: &Path) -> Result<()> {
    let font_family = fonts::report_font_family()?;
    let mut doc = Document::new(font_family);
    doc.set_title("Employee Report");
    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(PAGE_MARGIN_MM);
    doc.set_page_decorator(decorator);

    doc.push(Paragraph::new("Employee Report").styled(Style::new().bold().with_font_size(20)));
    doc.push(Break::new(1));

    push_table(
        &mut doc,
        "Sum of annual salary by country",
        &tables.salary_country,
    )?;
    push_image(&mut doc, &charts.salary_country)?;

    push_table(&mut doc, "Sum of annual salary by city", &tables.salary_city)?;
    push_image(&mut doc, &charts.salary_city)?;

    push_table(
        &mut doc,
        "Sum of annual salary by department",
        &tables.salary_department,
    )?;
    push_image(&mut doc, &charts.salary_department)?;

    push_table(
        &mut doc,
        "Average bonus % and annual salary by country",
        &tables.bonus_salary_country,
    )?;
    push_table(
        &mut doc,
        "Average bonus % and annual salary by city",
        &tables.bonus_salary_city,
    )?;
    push_table(&mut doc, "Average age by country", &tables.age_country)?;
    push_table(&mut doc, "Average age by city", &tables.age_city)?;
    push_table(&mut doc, "Average age by department", &tables.age_department)?;

    push_table(
        &mut doc,
        "Employees in each department",
        &tables.count_department,
    )?;
    push_image(&mut doc, &charts.num_employee_department)?;

    push_table(
        &mut doc,
        "Employees in each position",
        &tables.count_position,
    )?;
    push_image(&mut doc, &charts.num_employee_position)?;

    doc.render_to_file(path)?;
    Ok(())
}

fn push_table<T: Tabled>(doc: &mut Document, title: &str, rows: &[T]) -> Result<()> {
    doc.push(Paragraph::new(title).styled(Style::new().bold().with_font_size(14)));
    doc.push(Break::new(0.5));

    let mut table = TableLayout::new(vec![1; T::LENGTH]);
    table.set_cell_decorator(FrameCellDecorator::new(true, true, false));

    let mut header = table.row();
    for column in T::headers() {
        header = header.element(
            Paragraph::new(column.to_string())
                .styled(Style::new().bold())
                .padded(1),
        );
    }
    header.push()?;

    for row in rows {
        let mut cells = table.row();
        for value in row.fields() {
            cells = cells.element(Paragraph::new(value.to_string()).padded(1));
        }
        cells.push()?;
    }

    doc.push(table);
    doc.push(Break::new(1));
    Ok(())
}

fn push_image(doc: &mut Document, path: &Path) -> Result<()> {
    let image = Image::from_path(path)?
        .with_alignment(Alignment::Center)
        .with_scale(Scale::new(CHART_SCALE, CHART_SCALE));
    doc.push(image);
    doc.push(Break::new(1));
    Ok(())
}
