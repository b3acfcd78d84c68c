//! CSV export serializer.
//!
//! Produces a header line followed by one line per row. Values containing a
//! comma, a double quote or a line break are quoted, and inner quotes are
//! doubled. Lines end with `\n`.

use thiserror::Error;

use crate::item::{CatalogItem, export_headers};

/// MIME type handed to share targets.
pub const CSV_MIME_TYPE: &str = "text/csv";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Row {row} has {actual} value(s), expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Export file name '{0}' must be a plain file name")]
    InvalidFileName(String),
    #[error("Export produced invalid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serialize a header row and value rows into CSV text.
pub fn generate_csv_content<H, R, V>(headers: &[H], rows: &[R]) -> Result<String, ExportError>
where
    H: AsRef<str>,
    R: AsRef<[V]>,
    V: AsRef<str>,
{
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(headers.iter().map(|h| h.as_ref()))?;
    for (i, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != headers.len() {
            return Err(ExportError::RowWidth {
                row: i,
                expected: headers.len(),
                actual: row.len(),
            });
        }
        writer.write_record(row.iter().map(|v| v.as_ref()))?;
    }

    let bytes = writer.into_inner().map_err(|e| ExportError::Io {
        path: "<memory>".to_string(),
        source: e.into_error(),
    })?;
    Ok(String::from_utf8(bytes)?)
}

/// Header and rows for a list of items, columns in field declaration order.
pub fn export_table<T: CatalogItem>(items: &[T]) -> (Vec<String>, Vec<Vec<String>>) {
    let headers = export_headers::<T::Field>();
    let rows = items.iter().map(T::export_row).collect();
    (headers, rows)
}

/// CSV text for a list of items.
pub fn export_items<T: CatalogItem>(items: &[T]) -> Result<String, ExportError> {
    let (headers, rows) = export_table(items);
    generate_csv_content(&headers, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[test]
    fn plain_values_are_comma_joined() {
        let csv = generate_csv_content(&["Title", "Rating"], &[vec!["Dune", "5"]]).unwrap();
        assert_eq!(csv, "Title,Rating\nDune,5\n");
    }

    #[test]
    fn special_values_are_quoted() {
        let csv = generate_csv_content(
            &["Title", "Notes"],
            &[vec!["a,b\"c", "line one\nline two"]],
        )
        .unwrap();
        assert_eq!(csv, "Title,Notes\n\"a,b\"\"c\",\"line one\nline two\"\n");
    }

    #[test]
    fn header_only_when_no_rows() {
        let rows: Vec<Vec<String>> = Vec::new();
        let csv = generate_csv_content(&["Title"], &rows).unwrap();
        assert_eq!(csv, "Title\n");
    }

    #[test]
    fn mismatched_row_width_is_rejected() {
        let err = generate_csv_content(&["A", "B"], &[vec!["only one"]]).unwrap_err();
        assert!(matches!(
            err,
            ExportError::RowWidth {
                row: 0,
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn items_export_in_field_order() {
        let records = vec![Record {
            title: "Kind of Blue".into(),
            artist: "Miles Davis".into(),
            format: "LP".into(),
            ..Default::default()
        }];
        let csv = export_items(&records).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Title,Artist,Genre,Label,Release Date,Format,Tracks,Rating,Notes")
        );
        assert_eq!(lines.next(), Some("Kind of Blue,Miles Davis,,,,LP,,,"));
    }
}
