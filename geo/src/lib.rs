// SmartPark
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Geographic coordinates and the distances between them.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

mod geodesic;
pub use geodesic::GeodesicDistance;
#[cfg(any(test, feature = "testutils"))]
mod mock;
#[cfg(any(test, feature = "testutils"))]
pub use mock::MockDistanceProvider;

/// A point on Earth given by its latitude and longitude in degrees.
///
/// Values are not range-checked: whatever the client sends is stored and used as is.
///
/// Coordinates serialize as a `[latitude, longitude]` pair, which is the format clients send.
/// Deserialization also accepts an object with `latitude` and `longitude` fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    /// Latitude in degrees.
    latitude: f64,

    /// Longitude in degrees.
    longitude: f64,
}

impl Coordinates {
    /// Creates a new pair of coordinates.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns the latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Serialize for Coordinates {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.latitude, self.longitude).serialize(serializer)
    }
}

/// Field names accepted when deserializing `Coordinates` from an object.
const FIELDS: &[&str] = &["latitude", "longitude"];

/// Visitor to deserialize `Coordinates` from either a pair or an object.
struct CoordinatesVisitor;

impl<'de> Visitor<'de> for CoordinatesVisitor {
    type Value = Coordinates;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a [latitude, longitude] pair")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let latitude: f64 =
            seq.next_element()?.ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let longitude: f64 =
            seq.next_element()?.ok_or_else(|| de::Error::invalid_length(1, &self))?;
        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(3, &self));
        }
        Ok(Coordinates::new(latitude, longitude))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut latitude: Option<f64> = None;
        let mut longitude: Option<f64> = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "latitude" | "lat" => {
                    if latitude.is_some() {
                        return Err(de::Error::duplicate_field("latitude"));
                    }
                    latitude = Some(map.next_value()?);
                }
                "longitude" | "lon" => {
                    if longitude.is_some() {
                        return Err(de::Error::duplicate_field("longitude"));
                    }
                    longitude = Some(map.next_value()?);
                }
                other => return Err(de::Error::unknown_field(other, FIELDS)),
            }
        }
        let latitude = latitude.ok_or_else(|| de::Error::missing_field("latitude"))?;
        let longitude = longitude.ok_or_else(|| de::Error::missing_field("longitude"))?;
        Ok(Coordinates::new(latitude, longitude))
    }
}

impl<'de> Deserialize<'de> for Coordinates {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(CoordinatesVisitor)
    }
}

/// Interface to compute distances between two points.
pub trait DistanceProvider {
    /// Returns the distance between `from` and `to` in kilometers.
    fn distance_km(&self, from: &Coordinates, to: &Coordinates) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{Token, assert_ser_tokens};

    #[test]
    fn test_coordinates_ser() {
        let coords = Coordinates::new(40.4168, -3.7038);
        assert_ser_tokens(
            &coords,
            &[Token::Tuple { len: 2 }, Token::F64(40.4168), Token::F64(-3.7038), Token::TupleEnd],
        );
    }

    #[test]
    fn test_coordinates_de_pair() {
        let coords: Coordinates = serde_json::from_str("[40.4168, -3.7038]").unwrap();
        assert_eq!(Coordinates::new(40.4168, -3.7038), coords);
    }

    #[test]
    fn test_coordinates_de_pair_of_integers() {
        let coords: Coordinates = serde_json::from_str("[40, -3]").unwrap();
        assert_eq!(Coordinates::new(40.0, -3.0), coords);
    }

    #[test]
    fn test_coordinates_de_object() {
        let coords: Coordinates =
            serde_json::from_str(r#"{"longitude": -3.7038, "latitude": 40.4168}"#).unwrap();
        assert_eq!(Coordinates::new(40.4168, -3.7038), coords);

        let coords: Coordinates = serde_json::from_str(r#"{"lat": 1.5, "lon": 2.5}"#).unwrap();
        assert_eq!(Coordinates::new(1.5, 2.5), coords);
    }

    #[test]
    fn test_coordinates_de_out_of_range_is_accepted() {
        let coords: Coordinates = serde_json::from_str("[123.0, 500.0]").unwrap();
        assert_eq!(Coordinates::new(123.0, 500.0), coords);
    }

    #[test]
    fn test_coordinates_de_errors() {
        for (input, exp_error) in [
            ("[1.0]", "invalid length 1"),
            ("[1.0, 2.0, 3.0]", "invalid length 3"),
            (r#"{"latitude": 1.0}"#, "missing field `longitude`"),
            (r#"{"latitude": 1.0, "latitude": 2.0}"#, "duplicate field `latitude`"),
            (r#"{"latitude": 1.0, "longitude": 2.0, "altitude": 3.0}"#, "unknown field"),
            (r#""somewhere""#, "a [latitude, longitude] pair"),
            (r#"["north", "west"]"#, "invalid type"),
        ] {
            let err = serde_json::from_str::<Coordinates>(input).unwrap_err().to_string();
            assert!(err.contains(exp_error), "Error '{}' does not contain '{}'", err, exp_error);
        }
    }
}
