//! Company address and VAT number scanner.

use tracing::debug;

use crate::models::invoice::CompanyInfo;

use super::patterns::VAT_NUMBER_MARKER;

/// How many accumulated lines above the VAT marker form the company address.
const ADDRESS_LINES: usize = 4;

/// Scan from the top of the document for the VAT number line.
///
/// Every line visited before the marker goes into an address buffer; when the
/// marker is found, the VAT number is the text after it (colons removed) and
/// the address is the last [`ADDRESS_LINES`] buffered lines joined with
/// spaces. Without the marker the scan has no stopping point, so neither
/// field is recorded: the address is only ever derived with knowledge of the
/// VAT line's position.
pub fn extract_company_info(lines: &[&str]) -> CompanyInfo {
    let mut info = CompanyInfo::default();
    let mut address_buffer: Vec<&str> = Vec::new();

    for &line in lines {
        if let Some(pos) = line.rfind(VAT_NUMBER_MARKER) {
            let vat = line[pos + VAT_NUMBER_MARKER.len()..]
                .replace(':', "")
                .trim()
                .to_string();
            if !vat.is_empty() {
                info.vat_number = Some(vat);
            }

            if !address_buffer.is_empty() {
                let start = address_buffer.len().saturating_sub(ADDRESS_LINES);
                info.address = Some(address_buffer[start..].join(" "));
            }

            return info;
        }
        address_buffer.push(line);
    }

    debug!("VAT marker not found; company section left empty");
    info
}
