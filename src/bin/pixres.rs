//! Pixel resolution calculator for nadir aerial imagery.
//!
//! Works forward from flying heights to the pixel resolutions they
//! yield, or backward from required pixel resolutions to the flying
//! heights that achieve them, and writes the result table to a CSV
//! file. The math is unit independent, but every linear value (heights,
//! resolutions) must share one unit.
//!
//! Limitations: nadir (downward-facing) imagery only, and standard
//! lenses only (keep the horizontal field of view at 70 degrees or
//! less). Lens distortion is not modeled; treat results as estimates.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use pixres::geometry::OpticalGeometry;
use pixres::list_arg::ValueListArg;
use pixres::projector::{heights_from_resolutions, resolution_from_heights};
use pixres::report::write_result_table;
use pixres::series::ResultSeries;
use pixres::units::DistanceUnit;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Pixel resolution calculator for nadir aerial imagery",
    long_about = "Computes ground-sampled pixel resolution from flying height, or the\n\
        flying height required for a target resolution, for nadir imagery.\n\n\
        All linear values share one unit of your choice (feet, meters, ...).\n\
        Results are echoed to stdout and saved as a CSV table."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Camera and project parameters shared by both modes.
#[derive(Args, Debug)]
struct CameraArgs {
    /// Name (camera type) recorded on the first row of the output table
    #[arg(long, default_value = "pixres")]
    project: String,

    /// Unit label for all linear values (display only)
    #[arg(long, default_value = "meters")]
    units: DistanceUnit,

    /// Sensor width in pixels (take from image dimensions)
    #[arg(long)]
    pixels_x: f64,

    /// Sensor height in pixels (take from image dimensions)
    #[arg(long)]
    pixels_y: f64,

    /// Horizontal lens field of view in degrees
    #[arg(long)]
    fov_x: f64,

    /// Vertical lens field of view in degrees
    #[arg(long)]
    fov_y: f64,
}

impl CameraArgs {
    fn geometry(&self) -> OpticalGeometry {
        OpticalGeometry::new(self.pixels_x, self.pixels_y, self.fov_x, self.fov_y)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pixel resolutions for a list of flying heights
    Resolution {
        #[command(flatten)]
        camera: CameraArgs,

        /// Comma-separated flying heights above ground level
        #[arg(long)]
        heights: ValueListArg,

        /// Output table path
        #[arg(long, default_value = "PixResolution.csv")]
        output: PathBuf,
    },
    /// Flying heights needed to achieve required pixel resolutions
    Agl {
        #[command(flatten)]
        camera: CameraArgs,

        /// Comma-separated required pixel resolutions
        #[arg(long)]
        resolutions: ValueListArg,

        /// Output table path
        #[arg(long, default_value = "AGL_Resolution.csv")]
        output: PathBuf,
    },
}

fn print_series(camera: &CameraArgs, series: &ResultSeries) {
    let unit = &camera.units;
    println!("{}: {}", camera.project, camera.geometry());
    println!(
        "{:>14} {:>18} {:>14} {:>14}",
        format!("AGL ({unit})"),
        format!("Pixel Res ({unit})"),
        format!("IFOV X ({unit})"),
        format!("IFOV Y ({unit})")
    );
    for row in series.rows() {
        println!(
            "{:>14.3} {:>18.4} {:>14.3} {:>14.3}",
            row.agl, row.pixel_resolution, row.ifov_x, row.ifov_y
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (camera, series, output) = match &cli.command {
        Command::Resolution {
            camera,
            heights,
            output,
        } => {
            let series = resolution_from_heights(&camera.geometry(), heights.values())
                .context("computing pixel resolutions from flying heights")?;
            (camera, series, output)
        }
        Command::Agl {
            camera,
            resolutions,
            output,
        } => {
            let series = heights_from_resolutions(&camera.geometry(), resolutions.values())
                .context("computing flying heights from required resolutions")?;
            (camera, series, output)
        }
    };

    print_series(camera, &series);

    write_result_table(output, &camera.project, &camera.units, &series)
        .with_context(|| format!("writing result table to {}", output.display()))?;
    info!("saved results to {}", output.display());
    println!("Saved to {}", output.display());

    Ok(())
}
