//! Failure taxonomy for the report pipeline.
//!
//! Every failure is terminal for the run: there is no per-row fallback and
//! no partial-output mode. The variants group failures into input I/O,
//! schema mismatch, cell value format, and downstream rendering/export.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The source CSV could not be opened or read.
    #[error("failed to read input file '{path}': {source}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The header row is missing a column the pipeline depends on.
    #[error("schema mismatch: missing expected column '{column}'")]
    MissingColumn { column: String },

    /// A record failed to parse at the CSV layer (field count, quoting).
    #[error("malformed CSV record: {0}")]
    Csv(#[from] csv::Error),

    /// A cell did not match the literal format expected during cleaning.
    #[error("invalid value '{value}' in column '{column}': {reason}")]
    ValueFormat {
        column: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Chart rasterization failed.
    #[error("chart rendering failed for '{path}': {message}")]
    Chart { path: String, message: String },

    /// The HTML template could not be rendered.
    #[error("template rendering failed: {0}")]
    Template(#[from] handlebars::RenderError),

    /// PDF composition or export failed.
    #[error("PDF export failed: {0}")]
    Pdf(String),

    /// An output artifact could not be written.
    #[error("failed to write '{path}': {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<genpdf::error::Error> for ReportError {
    fn from(err: genpdf::error::Error) -> Self {
        ReportError::Pdf(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_displays_name() {
        let err = ReportError::MissingColumn {
            column: "Annual Salary".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "schema mismatch: missing expected column 'Annual Salary'"
        );
    }

    #[test]
    fn value_format_displays_column_and_value() {
        let err = ReportError::ValueFormat {
            column: "Bonus %",
            value: "n/a".to_string(),
            reason: "expected digits with an optional trailing '%'",
        };
        assert_eq!(
            err.to_string(),
            "invalid value 'n/a' in column 'Bonus %': expected digits with an optional trailing '%'"
        );
    }

    #[test]
    fn input_error_displays_path() {
        let err = ReportError::Input {
            path: "data/employee_data.csv".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("data/employee_data.csv"));
    }
}
