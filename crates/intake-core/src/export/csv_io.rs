//! CSV serialization of the datasheet.
//!
//! The export schema is fixed: one header row, then one row per
//! confirmed entry with weights at two decimal places and quantities as
//! integers. Import reads the same schema back, keeping stored values
//! verbatim so that re-exporting an imported sheet is byte-identical.

use crate::datasheet::Datasheet;
use crate::models::{ConfirmedEntry, Tier, TierAverages};

use super::{ExportError, ExportResult};

/// Export column order.
pub const CSV_HEADER: [&str; 7] = [
    "identifier",
    "name",
    "average_weight_box",
    "average_weight_strip",
    "average_weight_unit",
    "bulk_quantity",
    "computed_quantity",
];

/// Serialize all rows to a CSV document.
///
/// An empty datasheet yields exactly the header row.
pub fn write_csv(sheet: &Datasheet) -> ExportResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for entry in sheet.entries() {
        let record = [
            entry.identifier.clone(),
            entry.name.clone(),
            format!("{:.2}", entry.averages.get(Tier::Box)),
            format!("{:.2}", entry.averages.get(Tier::Strip)),
            format!("{:.2}", entry.averages.get(Tier::Unit)),
            entry.bulk_quantity.to_string(),
            entry.computed_quantity.to_string(),
        ];
        writer.write_record(&record)?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Csv(csv::Error::from(e.into_error())))
}

/// Parse an exported CSV document back into a datasheet.
///
/// Stored quantities are not re-derived from the (rounded) averages;
/// every value round-trips as written. Imported rows are stamped with
/// the import time since the confirmation timestamp is not exported.
pub fn read_csv(bytes: &[u8]) -> ExportResult<Datasheet> {
    let mut reader = csv::Reader::from_reader(bytes);

    let headers = reader.headers()?;
    if headers.iter().ne(CSV_HEADER) {
        return Err(ExportError::InvalidHeader {
            expected: CSV_HEADER.iter().map(|s| (*s).to_string()).collect(),
            got: headers.iter().map(str::to_string).collect(),
        });
    }

    let mut sheet = Datasheet::new();
    for record in reader.records() {
        let record = record?;
        let field = |i: usize| record.get(i).unwrap_or("");

        let averages = TierAverages {
            box_grams: parse_f64("average_weight_box", field(2))?,
            strip_grams: parse_f64("average_weight_strip", field(3))?,
            unit_grams: parse_f64("average_weight_unit", field(4))?,
        };
        sheet.push(ConfirmedEntry {
            identifier: field(0).to_string(),
            name: field(1).to_string(),
            averages,
            bulk_quantity: parse_int("bulk_quantity", field(5))?,
            computed_quantity: parse_int("computed_quantity", field(6))?,
            confirmed_at: chrono::Utc::now().to_rfc3339(),
        });
    }
    Ok(sheet)
}

fn parse_f64(column: &'static str, value: &str) -> ExportResult<f64> {
    value.parse().map_err(|e: std::num::ParseFloatError| {
        ExportError::InvalidField {
            column,
            value: value.to_string(),
            reason: e.to_string(),
        }
    })
}

fn parse_int<T: std::str::FromStr<Err = std::num::ParseIntError>>(
    column: &'static str,
    value: &str,
) -> ExportResult<T> {
    value.parse().map_err(|e: std::num::ParseIntError| {
        ExportError::InvalidField {
            column,
            value: value.to_string(),
            reason: e.to_string(),
        }
    })
}
