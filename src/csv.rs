use std::io::BufRead;

use crate::error::ImportError;
use crate::geometry::{Point, PointSequence};
use crate::parse_coordinate;

/// Reads a GIS vertex export into a point sequence.
///
/// The first line is a header and is dropped. Only the first two
/// comma-separated fields of each row are kept. A row whose two-field text is
/// identical to the first row of the current ring closes that ring: it becomes
/// a separator and the next row starts a new ring.
pub fn read_csv<R: BufRead>(reader: R) -> Result<PointSequence, ImportError> {
    let mut seq = PointSequence::new();
    let mut ring_start: Option<String> = None;

    let mut lines = reader.lines();
    if lines.next().transpose().map_err(ImportError::IOError)?.is_none() {
        log::warn!("CSV input is empty, no header found.");
        return Ok(seq);
    }

    for (idx, line) in lines.enumerate() {
        let line = line.map_err(ImportError::IOError)?;
        let line_no = idx + 2;
        let fields = leading_fields(&line);

        if ring_start.as_deref() == Some(fields) {
            log::debug!("Ring closed at line {}.", line_no);
            seq.push_separator();
            ring_start = None;
            continue;
        }

        if ring_start.is_none() {
            ring_start = Some(fields.to_string());
        }

        seq.push_point(parse_row(fields, line_no)?);
    }

    if seq.is_empty() {
        log::warn!("CSV input has a header but no rows.");
    }

    Ok(seq)
}

/// Text of the first two fields, up to (not including) the second comma.
fn leading_fields(line: &str) -> &str {
    match line.match_indices(',').nth(1) {
        Some((pos, _)) => &line[..pos],
        None => line,
    }
}

fn parse_row(fields: &str, line: usize) -> Result<Point, ImportError> {
    let (x, y) = fields
        .split_once(',')
        .ok_or(ImportError::MissingField { line, field: "y" })?;

    Ok(Point::new(
        parse_coordinate(x, line)?,
        parse_coordinate(y, line)?,
    ))
}
