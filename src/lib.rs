use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub mod csv;
pub mod error;
pub mod geometry;
pub mod poly;

pub use crate::error::{ExportError, ImportError, PolyError};
pub use crate::geometry::{CentroidDivisor, Point, PointSequence};
pub use crate::poly::{save_poly, to_poly_string};

/// Both utilities always write here, relative to the working directory.
pub const OUTPUT_FILE: &str = "out.poly";

pub(crate) fn parse_coordinate(value: &str, line: usize) -> Result<f64, ImportError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|source| ImportError::InvalidNumber {
            line,
            value: value.to_string(),
            source,
        })
}

fn open(filename: &Path) -> Result<BufReader<File>, ImportError> {
    let file = File::open(filename).map_err(ImportError::IOError)?;
    Ok(BufReader::new(file))
}

/// Converts a GIS CSV export into scaled points centered on their centroid.
pub fn csv_to_poly<P: AsRef<Path>>(filename: P, scale: f64) -> Result<PointSequence, PolyError> {
    let filename = filename.as_ref();
    log::info!("Load CSV file {}...", filename.display());

    let mut seq = csv::read_csv(open(filename)?)?;
    log_summary(&seq);

    seq.scale(scale);
    seq.center(CentroidDivisor::Slots);

    Ok(seq)
}

/// Rescales a `.poly` file, and centers it on its centroid when `center` is set.
pub fn scale_poly<P: AsRef<Path>>(
    filename: P,
    scale: f64,
    center: bool,
) -> Result<PointSequence, PolyError> {
    let filename = filename.as_ref();
    log::info!("Load poly file {}...", filename.display());

    let mut seq = poly::read_poly(open(filename)?)?;
    log_summary(&seq);

    seq.scale(scale);
    if center {
        seq.center(CentroidDivisor::Slots);
    }

    Ok(seq)
}

fn log_summary(seq: &PointSequence) {
    if seq.is_empty() {
        log::warn!("No points found, output will be empty.");
    }
    log::info!(
        "{} points in {} rings ({} separators).",
        seq.point_count(),
        seq.rings().len(),
        seq.separator_count()
    );
}

pub fn init_logger(verbose: bool, debug: bool) -> Result<(), log::SetLoggerError> {
    let level = if debug {
        log::Level::Debug
    } else if verbose {
        log::Level::Info
    } else {
        log::Level::Warn
    };

    simple_logger::init_with_level(level)
}
