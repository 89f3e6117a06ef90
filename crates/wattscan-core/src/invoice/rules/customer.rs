//! Customer (meter installation) address scanner.

use crate::models::invoice::CustomerInfo;

use super::patterns::{METER_ADDRESS_MARKER, METER_ADDRESS_STOPS};

/// Collect the address lines following the first meter-address marker.
///
/// Accumulation stops at the first line starting with one of the sentinel
/// prefixes for the next document sections, or at end of input. Only the
/// first marker occurrence is honored.
pub fn extract_customer_info(lines: &[&str]) -> CustomerInfo {
    let mut info = CustomerInfo::default();

    let Some(marker_index) = lines.iter().position(|l| l.contains(METER_ADDRESS_MARKER)) else {
        return info;
    };

    let address: Vec<&str> = lines[marker_index + 1..]
        .iter()
        .take_while(|line| !METER_ADDRESS_STOPS.iter().any(|stop| line.starts_with(stop)))
        .copied()
        .collect();

    if !address.is_empty() {
        info.address = Some(address.join(" "));
    }

    info
}
