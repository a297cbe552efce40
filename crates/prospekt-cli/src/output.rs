//! Writes the dated brochure JSON file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use prospekt_core::BrochureRecord;
use serde::Serialize;

/// `brochures_YYYY_MM_DD.json` for the given day.
pub(crate) fn output_filename(date: NaiveDate) -> String {
    date.format("brochures_%Y_%m_%d.json").to_string()
}

/// Writes `records` as a four-space indented JSON array into `dir`,
/// replacing any file already written for `date`. Non-ASCII text is written
/// as UTF-8, not escaped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub(crate) fn write_brochures(
    dir: &Path,
    date: NaiveDate,
    records: &[BrochureRecord],
) -> std::io::Result<PathBuf> {
    let path = dir.join(output_filename(date));
    let mut writer = BufWriter::new(File::create(&path)?);

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    records.serialize(&mut serializer)?;
    writer.flush()?;

    Ok(path)
}
