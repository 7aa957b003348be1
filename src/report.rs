use crate::error::KMeansError;
use crate::kmeans::KMeans;
use crate::prediction::Prediction;
use crate::record::{assemble, Record};
use std::io::Write;

/// Write one `Cluster:` line and one `Distances:` line per prediction.
pub fn write_predictions<W: Write>(out: &mut W, predictions: &[Prediction]) -> Result<(), KMeansError> {
    for prediction in predictions {
        writeln!(out, "{}", prediction).map_err(|e| KMeansError::io("<output>", e))?;
    }
    out.flush().map_err(|e| KMeansError::io("<output>", e))
}

/// Predict every record with a fitted model and write the results in record
/// order. Returns the number of records reported.
///
/// Nothing is written if prediction fails.
pub fn report<W: Write>(out: &mut W, model: &KMeans, records: &[Record]) -> Result<usize, KMeansError> {
    let predictions = model.predict(&assemble(records).view())?;
    write_predictions(out, &predictions)?;
    Ok(predictions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn records() -> Vec<Record> {
        vec![
            Record::new(0.0, 0.0, 0.0, 0.0),
            Record::new(0.0, 0.0, 0.0, 0.0),
            Record::new(3.0, 4.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_report_lines() {
        let records = records();
        let mut model = KMeans::new(4, 2);
        model.train(&assemble(&records).view()).unwrap();

        let mut out = Vec::new();
        let n = report(&mut out, &model, &records).unwrap();
        assert_eq!(n, 3);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);

        let origin = model.labels()[0];
        assert_eq!(lines[0], format!("Cluster: {}", origin));
        assert_eq!(lines[2], lines[0]);
        assert_eq!(lines[4], format!("Cluster: {}", 1 - origin));

        let distances: Vec<&str> = lines[1]
            .strip_prefix("Distances: ")
            .unwrap()
            .split(' ')
            .collect();
        assert_eq!(distances.len(), 2);
        assert_eq!(distances[origin], "0");
        assert_eq!(distances[1 - origin], "5");
    }

    #[test]
    fn test_report_unfitted_writes_nothing() {
        let model = KMeans::new(4, 2);
        let mut out = Vec::new();

        let err = report(&mut out, &model, &records()).unwrap_err();
        assert!(matches!(err, KMeansError::NotFitted));
        assert!(out.is_empty());
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_broken_sink() {
        let predictions = vec![Prediction::from_distances(vec![1.0, 2.0])];
        let err = write_predictions(&mut BrokenSink, &predictions).unwrap_err();
        assert!(matches!(err, KMeansError::Io { .. }));
    }
}
