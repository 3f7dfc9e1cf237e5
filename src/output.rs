use crate::error::{ReportError, Result};
use tabled::{settings::Style, Table, Tabled};

/// Print the first rows of a report table to the console as markdown.
pub fn preview_table<T>(title: &str, rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    println!("{}", title);
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}", table_str);
    if rows.len() > max_rows {
        println!("({} more rows)", rows.len() - max_rows);
    }
    println!();
}

pub fn write_text(path: &str, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| ReportError::Output {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_text_creates_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.html");
        let path = path.to_str().unwrap();
        write_text(path, "<html></html>").expect("write succeeds");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "<html></html>");
    }

    #[test]
    fn write_text_surfaces_io_failures() {
        let err = write_text("no/such/dir/report.html", "x").unwrap_err();
        assert!(matches!(err, ReportError::Output { .. }));
    }
}
