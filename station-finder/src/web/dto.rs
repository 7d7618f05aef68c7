//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::LatLng;

/// Query string for `GET /getStationsAlongRoute`.
///
/// Both fields are taken as raw strings: only an absent or empty value is
/// rejected, anything else is parsed leniently by [`parse_leading_float`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationsQuery {
    /// Origin latitude in decimal degrees
    pub origin_lat: Option<String>,

    /// Origin longitude in decimal degrees
    pub origin_lng: Option<String>,
}

/// An origin parameter was absent or empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Origin coordinates are required.")]
pub struct MissingOrigin;

impl StationsQuery {
    /// Parse the origin coordinate.
    ///
    /// Values are neither range-checked nor required to be numeric: text
    /// without a leading number becomes NaN, which the routing provider
    /// then rejects per station.
    pub fn origin(&self) -> Result<LatLng, MissingOrigin> {
        let lat = required(self.origin_lat.as_deref())?;
        let lng = required(self.origin_lng.as_deref())?;

        Ok(LatLng::new(
            parse_leading_float(lat),
            parse_leading_float(lng),
        ))
    }
}

fn required(value: Option<&str>) -> Result<&str, MissingOrigin> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(MissingOrigin),
    }
}

/// Parse the longest decimal number at the start of `s`.
///
/// Leading whitespace is skipped and trailing text ignored, so `"10.5km"`
/// is 10.5. `Infinity` with an optional sign is accepted. Returns NaN when
/// no number starts the string.
pub fn parse_leading_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
