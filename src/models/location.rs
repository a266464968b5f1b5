//! Location model for geographic coordinates

use serde::{Deserialize, Serialize};

use crate::SprayForecastError;

/// Location coordinates
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check that both coordinates are finite and inside their ranges
    pub fn validate(&self) -> crate::Result<()> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(SprayForecastError::validation(format!(
                "Latitude must be between -90 and 90, got: {}",
                self.latitude
            )));
        }

        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(SprayForecastError::validation(format!(
                "Longitude must be between -180 and 180, got: {}",
                self.longitude
            )));
        }

        Ok(())
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_validation() {
        assert!(Location::new(35.5, 139.6).validate().is_ok());
        assert!(Location::new(-90.0, 180.0).validate().is_ok());

        assert!(Location::new(91.0, 139.6).validate().is_err());
        assert!(Location::new(35.5, -181.0).validate().is_err());
        assert!(Location::new(f64::NAN, 139.6).validate().is_err());
    }

    #[test]
    fn test_format_coordinates() {
        let location = Location::new(35.5, 139.612_345);
        assert_eq!(location.format_coordinates(), "35.5000, 139.6123");
    }
}
