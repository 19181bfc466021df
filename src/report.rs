//! Delimited result table output.

use crate::series::ResultSeries;
use crate::units::DistanceUnit;
use std::io;
use std::path::Path;

/// Write the result table for one projection run.
///
/// Fixed row order: the project name on its own row, then unit-labeled
/// AGL, pixel resolution, horizontal IFOV, and vertical IFOV rows, one
/// column per result. Values are written with six decimal places.
///
/// # Errors
/// Propagates any I/O or encoding failure from the CSV writer.
pub fn write_result_table(
    path: &Path,
    project: &str,
    unit: &DistanceUnit,
    series: &ResultSeries,
) -> Result<(), csv::Error> {
    // Rows have differing lengths (the name row has one field).
    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;

    writer.write_record([project])?;
    write_value_row(&mut writer, &format!("AGL ({unit})"), &series.agl_values())?;
    write_value_row(
        &mut writer,
        &format!("Pixel Resolution ({unit})"),
        &series.pixel_resolutions(),
    )?;
    write_value_row(
        &mut writer,
        &format!("IFOV Horz ({unit})"),
        &series.ifov_horizontal(),
    )?;
    write_value_row(
        &mut writer,
        &format!("IFOV Vert ({unit})"),
        &series.ifov_vertical(),
    )?;

    writer.flush()?;
    Ok(())
}

fn write_value_row<W: io::Write>(
    writer: &mut csv::Writer<W>,
    label: &str,
    values: &[f64],
) -> Result<(), csv::Error> {
    let mut record = Vec::with_capacity(values.len() + 1);
    record.push(label.to_string());
    record.extend(values.iter().map(|value| format!("{value:.6}")));
    writer.write_record(&record)
}
