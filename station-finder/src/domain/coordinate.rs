//! Geographic coordinates.

use std::fmt;

use serde::Serialize;

/// Valid latitude range in degrees.
const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude range in degrees.
const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// Error returned when a coordinate is not a usable point on the globe.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidCoordinate {
    /// Latitude is NaN or infinite
    #[error("latitude is not a finite number")]
    LatitudeNotFinite,

    /// Longitude is NaN or infinite
    #[error("longitude is not a finite number")]
    LongitudeNotFinite,

    /// Latitude outside [-90, 90]
    #[error("latitude {0} out of range [-90, 90]")]
    LatitudeOutOfRange(f64),

    /// Longitude outside [-180, 180]
    #[error("longitude {0} out of range [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// A latitude/longitude pair in decimal degrees.
///
/// Construction does not check bounds: request origins are passed through
/// to the routing provider as given. Use [`LatLng::validate`] where a
/// well-formed point is required.
///
/// # Examples
///
/// ```
/// use station_finder::domain::LatLng;
///
/// let angamaly = LatLng::new(10.1978, 76.3862);
/// assert!(angamaly.validate().is_ok());
///
/// let bogus = LatLng::new(91.0, 76.3862);
/// assert!(bogus.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    /// Create a coordinate from latitude and longitude.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check that both components are finite and within geographic bounds.
    pub fn validate(&self) -> Result<(), InvalidCoordinate> {
        if !self.latitude.is_finite() {
            return Err(InvalidCoordinate::LatitudeNotFinite);
        }
        if !self.longitude.is_finite() {
            return Err(InvalidCoordinate::LongitudeNotFinite);
        }
        if !LATITUDE_RANGE.contains(&self.latitude) {
            return Err(InvalidCoordinate::LatitudeOutOfRange(self.latitude));
        }
        if !LONGITUDE_RANGE.contains(&self.longitude) {
            return Err(InvalidCoordinate::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }

    /// Whether [`LatLng::validate`] succeeds.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds_inclusive() {
        assert!(LatLng::new(90.0, 180.0).is_valid());
        assert!(LatLng::new(-90.0, -180.0).is_valid());
        assert!(LatLng::new(0.0, 0.0).is_valid());
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            LatLng::new(91.0, 76.0).validate(),
            Err(InvalidCoordinate::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            LatLng::new(10.0, -180.5).validate(),
            Err(InvalidCoordinate::LongitudeOutOfRange(-180.5))
        );
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(
            LatLng::new(f64::NAN, 76.0).validate(),
            Err(InvalidCoordinate::LatitudeNotFinite)
        );
        assert_eq!(
            LatLng::new(10.0, f64::INFINITY).validate(),
            Err(InvalidCoordinate::LongitudeNotFinite)
        );
    }

    #[test]
    fn error_display() {
        let err = InvalidCoordinate::LatitudeOutOfRange(91.0);
        assert_eq!(err.to_string(), "latitude 91 out of range [-90, 90]");
    }
}
