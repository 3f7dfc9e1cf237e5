//! Font discovery for the PDF backend.
//!
//! The PDF composer embeds a TrueType family. Liberation Sans is looked up
//! in a local `fonts/` directory first, then in the usual system locations.

use crate::error::{ReportError, Result};
use genpdf::fonts::{self, FontData, FontFamily};
use std::path::PathBuf;

pub const FONT_FAMILY_NAME: &str = "LiberationSans";

const FONT_FILES: &[&str] = &[
    "LiberationSans-Regular.ttf",
    "LiberationSans-Bold.ttf",
    "LiberationSans-Italic.ttf",
    "LiberationSans-BoldItalic.ttf",
];

const FONT_DIRS: &[&str] = &[
    "fonts",
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/liberation",
    "/usr/share/fonts/liberation-fonts",
    "/usr/share/fonts/TTF",
];

fn font_directory() -> Option<PathBuf> {
    FONT_DIRS
        .iter()
        .map(PathBuf::from)
        .find(|dir| FONT_FILES.iter().all(|file| dir.join(file).is_file()))
}

/// Whether a complete Liberation Sans family can be found. Rendering tests
/// skip PDF assertions when this is false.
pub fn fonts_available() -> bool {
    font_directory().is_some()
}

/// Load the Liberation Sans family for document rendering.
pub fn report_font_family() -> Result<FontFamily<FontData>> {
    let dir = font_directory().ok_or_else(|| {
        ReportError::Pdf(format!(
            "Liberation Sans not found; searched {}",
            FONT_DIRS.join(", ")
        ))
    })?;
    Ok(fonts::from_files(&dir, FONT_FAMILY_NAME, None)?)
}
