use std::collections::HashMap;
use tracing::{debug, warn};

/// One non-blank data line, keyed by header name. Values are raw, trimmed
/// text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRow {
    /// 1-based line position in the source (header = 1, first data line = 2).
    pub row_number: usize,
    pub fields: HashMap<String, String>,
}

impl ImportRow {
    /// Value of `column`, or `""` when the header had no such column.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }
}

/// Splits CSV text into rows.
///
/// Values are matched to header names by position: a short line leaves the
/// trailing columns empty, a long line drops its extra values. Commas are
/// never quoted or escaped, so a value containing one shifts every later
/// column. Blank lines are skipped but still count towards `row_number`.
/// A leading UTF-8 byte-order mark is ignored.
pub fn parse(text: &str) -> Vec<ImportRow> {
    let text = text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    let mut records = reader.records();

    let headers: Vec<String> = match records.next() {
        Some(Ok(header)) => header.iter().map(str::to_string).collect(),
        Some(Err(e)) => {
            warn!(error = %e, "Unreadable CSV header");
            return Vec::new();
        }
        None => return Vec::new(),
    };

    let mut rows = Vec::new();
    for result in records {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable CSV line");
                continue;
            }
        };
        if record.iter().all(str::is_empty) {
            continue;
        }

        let row_number = record.position().map_or(0, |p| p.line() as usize);
        let fields = headers
            .iter()
            .enumerate()
            .map(|(i, header)| (header.clone(), record.get(i).unwrap_or("").to_string()))
            .collect();
        rows.push(ImportRow { row_number, fields });
    }

    debug!(columns = headers.len(), rows = rows.len(), "Parsed CSV");
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_no_rows() {
        assert!(parse("").is_empty());
        assert!(parse("nama_produk,sku").is_empty());
        assert!(parse("nama_produk,sku\n\n   \n").is_empty());
    }

    #[test]
    fn headers_and_values_are_trimmed() {
        let rows = parse(" nama_produk , sku \r\n Paracetamol ,  PCM001 \r\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("nama_produk"), "Paracetamol");
        assert_eq!(rows[0].get("sku"), "PCM001");
    }

    #[test]
    fn row_numbers_follow_original_lines() {
        let rows = parse("a,b\n1,2\n\n3,4\n   \n5,6");
        let numbers: Vec<usize> = rows.iter().map(|r| r.row_number).collect();
        assert_eq!(numbers, vec![2, 4, 6]);
    }

    #[test]
    fn positional_zip_pads_and_truncates() {
        let rows = parse("a,b,c\n1\n1,2,3,4");
        assert_eq!(rows[0].get("a"), "1");
        assert_eq!(rows[0].get("b"), "");
        assert_eq!(rows[0].get("c"), "");
        assert_eq!(rows[1].get("c"), "3");
        assert_eq!(rows[1].fields.len(), 3);
    }

    #[test]
    fn embedded_comma_shifts_later_columns() {
        let rows = parse("nama_produk,sku\nSirup, 60ml,SRP001");
        assert_eq!(rows[0].get("nama_produk"), "Sirup");
        assert_eq!(rows[0].get("sku"), "60ml");
    }

    #[test]
    fn byte_order_mark_is_not_part_of_the_first_header() {
        let rows = parse("\u{FEFF}nama_produk,sku\nParacetamol,PCM001");
        assert_eq!(rows[0].get("nama_produk"), "Paracetamol");
        assert_eq!(rows[0].row_number, 2);
    }

    #[test]
    fn whitespace_only_lines_are_skipped() {
        let rows = parse("a,b\n , \n1,2\r\n\t\n3,4");
        let numbers: Vec<usize> = rows.iter().map(|r| r.row_number).collect();
        assert_eq!(numbers, vec![3, 5]);
        assert_eq!(rows[1].get("b"), "4");
    }

    #[test]
    fn unknown_column_reads_as_empty() {
        let rows = parse("a\n1");
        assert_eq!(rows[0].get("missing"), "");
    }
}
