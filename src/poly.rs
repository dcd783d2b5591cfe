use std::fmt;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use atomicwrites::{AtomicFile, OverwriteBehavior};

use crate::error::{ExportError, ImportError};
use crate::geometry::{Point, PointSequence};
use crate::parse_coordinate;

pub const SEPARATOR: &str = "*";

/// Reads a `.poly` file: `x y` per line, `*` between rings.
pub fn read_poly<R: BufRead>(reader: R) -> Result<PointSequence, ImportError> {
    let mut seq = PointSequence::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(ImportError::IOError)?;
        let line_no = idx + 1;

        if line == SEPARATOR {
            seq.push_separator();
            continue;
        }

        let mut fields = line.split(' ');
        let x = fields.next().ok_or(ImportError::MissingField {
            line: line_no,
            field: "x",
        })?;
        let y = fields.next().ok_or(ImportError::MissingField {
            line: line_no,
            field: "y",
        })?;

        seq.push_point(Point::new(
            parse_coordinate(x, line_no)?,
            parse_coordinate(y, line_no)?,
        ));
    }

    Ok(seq)
}

/// One `x y` line per point with six decimals, `*` per separator.
impl fmt::Display for PointSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in self.iter() {
            match slot {
                Some(p) => writeln!(f, "{:.6} {:.6}", p.x, p.y)?,
                None => writeln!(f, "{}", SEPARATOR)?,
            }
        }
        Ok(())
    }
}

pub fn write_poly<W: Write>(writer: &mut W, seq: &PointSequence) -> std::io::Result<()> {
    write!(writer, "{}", seq)
}

pub fn to_poly_string(seq: &PointSequence) -> String {
    seq.to_string()
}

/// Writes `seq` to `path` through a temporary file, so an existing file is
/// only replaced once the new content is complete.
pub fn save_poly<P: AsRef<Path>>(path: P, seq: &PointSequence) -> Result<(), ExportError> {
    AtomicFile::new(path.as_ref(), OverwriteBehavior::AllowOverwrite)
        .write(|f| {
            let mut writer = BufWriter::new(f);
            write_poly(&mut writer, seq)?;
            writer.flush()
        })
        .map_err(|err| match err {
            atomicwrites::Error::Internal(e) | atomicwrites::Error::User(e) => {
                ExportError::IOError(e)
            }
        })
}
