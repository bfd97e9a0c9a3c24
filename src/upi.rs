//! UPI QR handling: decoding a QR code out of an uploaded image and parsing
//! `upi:` payment URIs into an editable draft.

use thiserror::Error;
use url::Url;

/// Payload the simulated camera scan produces.
pub const SIMULATED_SCAN_PAYLOAD: &str =
    "upi://pay?pa=zomato@icici&pn=Zomato&am=320&cu=INR&tn=Food Order";

/// What a scanned code resolves to before the user edits anything.
#[derive(Clone, PartialEq, Debug)]
pub struct PaymentDraft {
    pub merchant: String,
    pub upi_id: String,
    pub amount: f64,
    pub purpose: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UpiError {
    #[error("Could not parse QR code data. Please ensure it's a valid UPI QR code.")]
    InvalidUri,
    #[error("Not a UPI payment code (scheme: {0})")]
    NotUpi(String),
    #[error("UPI code is missing the payee address (pa)")]
    MissingPayee,
}

#[derive(Debug, Error)]
pub enum QrDecodeError {
    #[error("Failed to load image")]
    UnreadableImage(#[from] image::ImageError),
    #[error("No QR code found in image")]
    NoCodeFound,
    #[error("{0}")]
    Upi(#[from] UpiError),
}

/// Parses a UPI payment URI. `pa` (payee address) is mandatory; `pn` falls
/// back to "Unknown Merchant", `tn` to "Payment", and `am` to zero when
/// absent or not a usable number. Query values arrive percent-decoded.
pub fn parse_upi_payload(raw: &str) -> Result<PaymentDraft, UpiError> {
    let uri = Url::parse(raw.trim()).map_err(|_| UpiError::InvalidUri)?;
    if uri.scheme() != "upi" {
        return Err(UpiError::NotUpi(uri.scheme().to_string()));
    }

    let mut payee_address = None;
    let mut payee_name = None;
    let mut amount = None;
    let mut note = None;
    for (key, value) in uri.query_pairs() {
        match key.as_ref() {
            "pa" => payee_address = Some(value.into_owned()),
            "pn" => payee_name = Some(value.into_owned()),
            "am" => amount = Some(value.into_owned()),
            "tn" => note = Some(value.into_owned()),
            _ => {}
        }
    }

    let upi_id = payee_address
        .filter(|pa| !pa.is_empty())
        .ok_or(UpiError::MissingPayee)?;

    Ok(PaymentDraft {
        merchant: payee_name
            .filter(|pn| !pn.is_empty())
            .unwrap_or_else(|| "Unknown Merchant".to_string()),
        upi_id,
        amount: amount
            .and_then(|am| am.parse::<f64>().ok())
            .filter(|am| am.is_finite())
            .unwrap_or(0.0),
        purpose: note
            .filter(|tn| !tn.is_empty())
            .unwrap_or_else(|| "Payment".to_string()),
    })
}

/// Finds and decodes the first QR code in an encoded PNG/JPEG image, then
/// parses its payload as a UPI URI.
pub fn decode_qr_image(bytes: &[u8]) -> Result<PaymentDraft, QrDecodeError> {
    let luma = image::load_from_memory(bytes)?.to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare(luma);
    let grids = prepared.detect_grids();
    let grid = grids.first().ok_or(QrDecodeError::NoCodeFound)?;
    let (_, payload) = grid.decode().map_err(|_| QrDecodeError::NoCodeFound)?;
    Ok(parse_upi_payload(&payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_simulated_payload() {
        let draft = parse_upi_payload(SIMULATED_SCAN_PAYLOAD).unwrap();
        assert_eq!(draft.merchant, "Zomato");
        assert_eq!(draft.upi_id, "zomato@icici");
        assert_eq!(draft.amount, 320.0);
        assert_eq!(draft.purpose, "Food Order");
    }

    #[test]
    fn percent_encoded_values_come_back_decoded() {
        let draft =
            parse_upi_payload("upi://pay?pa=shop%40okaxis&pn=Corner%20Shop&am=99.50&tn=Groceries")
                .unwrap();
        assert_eq!(draft.merchant, "Corner Shop");
        assert_eq!(draft.upi_id, "shop@okaxis");
        assert_eq!(draft.amount, 99.5);
    }

    #[test]
    fn missing_payee_address_is_fatal() {
        assert_eq!(
            parse_upi_payload("upi://pay?pn=Shop"),
            Err(UpiError::MissingPayee)
        );
        assert_eq!(
            parse_upi_payload("upi://pay?pa=&pn=Shop"),
            Err(UpiError::MissingPayee)
        );
    }

    #[test]
    fn everything_but_the_payee_has_a_default() {
        let draft = parse_upi_payload("upi://pay?pa=x@ybl").unwrap();
        assert_eq!(draft.merchant, "Unknown Merchant");
        assert_eq!(draft.amount, 0.0);
        assert_eq!(draft.purpose, "Payment");

        // empty values fall back too
        let draft = parse_upi_payload("upi://pay?pa=x@ybl&pn=&am=abc&tn=").unwrap();
        assert_eq!(draft.merchant, "Unknown Merchant");
        assert_eq!(draft.amount, 0.0);
        assert_eq!(draft.purpose, "Payment");
    }

    #[test]
    fn rejects_non_upi_schemes_and_garbage() {
        assert_eq!(
            parse_upi_payload("https://example.com/pay?pa=x@ybl"),
            Err(UpiError::NotUpi("https".to_string()))
        );
        assert_eq!(parse_upi_payload("not a uri at all"), Err(UpiError::InvalidUri));
    }

    #[test]
    fn blank_image_has_no_code() {
        let mut bytes = Vec::new();
        let blank = image::DynamicImage::ImageLuma8(image::GrayImage::new(64, 64));
        blank
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageFormat::Png,
            )
            .unwrap();
        assert!(matches!(
            decode_qr_image(&bytes),
            Err(QrDecodeError::NoCodeFound)
        ));
    }

    #[test]
    fn undecodable_bytes_are_an_image_error() {
        assert!(matches!(
            decode_qr_image(b"definitely not an image"),
            Err(QrDecodeError::UnreadableImage(_))
        ));
    }
}
