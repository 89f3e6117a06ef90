//! Meter reading block scanner.

use tracing::debug;

use crate::models::invoice::{MeterReading, MeterType, Reading};

use super::patterns::{MONTH_ABBREV, SERIAL_LINE};

/// Scan for fixed-offset meter reading blocks anchored on digit-only serial
/// number lines.
///
/// Every digit-only line is evaluated as a candidate independently; there is
/// no block-skip after a successful match, so adjacent numeric lines each get
/// their own chance to anchor a block. Readings appear in the output in
/// document order.
pub fn extract_meter_readings(lines: &[&str]) -> Vec<MeterReading> {
    (0..lines.len())
        .filter_map(|i| reading_block_at(lines, i))
        .collect()
}

/// Interpret the six-line block starting at `index`, if one is present:
///
/// ```text
/// index     serial number (digits only)
/// index + 1 meter type
/// index + 2 start value
/// index + 3 start date
/// index + 4 end value
/// index + 5 end date
/// ```
///
/// The OCR layout sometimes collapses the end value and its date onto the
/// same line; when the end-value line carries a month abbreviation it is
/// split on the first space into value and date, and the `index + 5` line is
/// discarded. Blocks whose type is neither generation nor export are dropped.
fn reading_block_at(lines: &[&str], index: usize) -> Option<MeterReading> {
    let serial_number = lines[index];
    if !SERIAL_LINE.is_match(serial_number) || index + 5 >= lines.len() {
        return None;
    }

    let type_label = lines[index + 1].to_lowercase();
    let start_value = lines[index + 2];
    let start_date = lines[index + 3];
    let mut end_value = lines[index + 4];
    let mut end_date = lines[index + 5];

    // Date bleed: "2000 20 Mar 2024" on the end-value line.
    if MONTH_ABBREV.is_match(end_value) {
        if let Some((value, date)) = end_value.split_once(' ') {
            end_value = value;
            end_date = date;
        }
    }

    let Some(meter_type) = MeterType::parse(&type_label) else {
        debug!("dropping meter block at line {index}: type {type_label:?} not retained");
        return None;
    };

    Some(MeterReading {
        meter_type,
        serial_number: serial_number.to_string(),
        start_reading: Reading {
            value: start_value.to_string(),
            date: start_date.to_string(),
        },
        end_reading: Reading {
            value: end_value.to_string(),
            date: end_date.to_string(),
        },
    })
}
