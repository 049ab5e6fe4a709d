// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request types for the API.

use crate::error::ApiError;
use house_tour_core::{HouseSpecification, HouseType, LocationType};
use serde::Deserialize;

/// Inclusive bounds for a room count accepted over HTTP.
#[derive(Debug, Clone, Copy)]
pub struct CountRange {
    pub field: &'static str,
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    fn check(&self, value: u32) -> Result<u32, ApiError> {
        if (self.min..=self.max).contains(&value) {
            Ok(value)
        } else {
            Err(ApiError::InvalidSpecification(format!(
                "{} must be between {} and {}, got {}",
                self.field, self.min, self.max, value
            )))
        }
    }
}

pub const BEDROOMS: CountRange = CountRange { field: "bedrooms", min: 1, max: 10 };
pub const BATHROOMS: CountRange = CountRange { field: "bathrooms", min: 1, max: 5 };
pub const KITCHENS: CountRange = CountRange { field: "kitchens", min: 1, max: 3 };

/// Body of `POST /api/v1/generate`.
///
/// Enum fields arrive as text so that unknown values are reported as
/// `INVALID_SPECIFICATION` rather than a body rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub plot_size: String,
    pub house_type: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub kitchens: u32,
    pub location_type: String,
    #[serde(default)]
    pub notes: String,
}

impl GenerateRequest {
    /// Validate ranges and enum text, producing the generator input.
    pub fn into_specification(self) -> Result<HouseSpecification, ApiError> {
        let house_type: HouseType = self.house_type.parse()?;
        let location_type: LocationType = self.location_type.parse()?;

        Ok(HouseSpecification {
            plot_size: self.plot_size,
            house_type,
            bedrooms: BEDROOMS.check(self.bedrooms)?,
            bathrooms: BATHROOMS.check(self.bathrooms)?,
            kitchens: KITCHENS.check(self.kitchens)?,
            location_type,
            notes: self.notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerateRequest {
        serde_json::from_str(
            r#"{
                "plotSize": "20x30",
                "houseType": "double",
                "bedrooms": 3,
                "bathrooms": 2,
                "kitchens": 1,
                "locationType": "village"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_request_converts() {
        let spec = request().into_specification().unwrap();
        assert_eq!(spec.house_type, HouseType::Double);
        assert_eq!(spec.location_type, LocationType::Village);
        assert_eq!(spec.bedrooms, 3);
        assert!(spec.notes.is_empty());
    }

    #[test]
    fn test_counts_out_of_range() {
        for (bedrooms, bathrooms, kitchens) in [(0, 1, 1), (11, 1, 1), (2, 6, 1), (2, 1, 4), (2, 0, 1)] {
            let req = GenerateRequest {
                bedrooms,
                bathrooms,
                kitchens,
                ..request()
            };
            assert!(matches!(
                req.into_specification(),
                Err(ApiError::InvalidSpecification(_))
            ));
        }
    }

    #[test]
    fn test_unknown_house_type() {
        let req = GenerateRequest {
            house_type: "triple".into(),
            ..request()
        };
        let err = req.into_specification().unwrap_err();
        assert!(matches!(err, ApiError::InvalidSpecification(_)));
        assert!(err.to_string().contains("triple"));
    }
}
