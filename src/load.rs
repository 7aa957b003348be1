use crate::error::KMeansError;
use crate::record::{Record, N_FEATURES};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Default input file, relative to the working directory.
pub const DEFAULT_INPUT: &str = "cube_data.txt";

/// Load every record from a headerless, comma-separated file.
///
/// Records are returned in file order. Blank lines are skipped but still count
/// toward the line numbers reported in [`KMeansError::Parse`].
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, KMeansError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| KMeansError::io(path, e))?;

    let records = parse_records(BufReader::new(file)).map_err(|e| match e {
        // The reader has no path of its own; attach ours.
        KMeansError::Io { source, .. } => KMeansError::io(path, source),
        other => other,
    })?;

    log::debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse records from any buffered reader.
pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<Record>, KMeansError> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| KMeansError::io("<input>", e))?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_line(&line, line_no)?);
    }

    Ok(records)
}

fn parse_line(line: &str, line_no: usize) -> Result<Record, KMeansError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != N_FEATURES {
        return Err(KMeansError::parse(
            line_no,
            format!("expected {} fields, found {}", N_FEATURES, fields.len()),
        ));
    }

    let mut values = [0.0f32; N_FEATURES];
    for (value, field) in values.iter_mut().zip(&fields) {
        let parsed: f32 = field.parse().map_err(|_| {
            KMeansError::parse(line_no, format!("'{}' is not a number", field))
        })?;
        if !parsed.is_finite() {
            return Err(KMeansError::parse(
                line_no,
                format!("'{}' is not a finite number", field),
            ));
        }
        *value = parsed;
    }

    Ok(Record::from(values))
}
