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

//! High-level data types.

use derive_getters::Getters;
use derive_more::Constructor;
use serde::{Deserialize, Serialize};
use smartpark_core::model::{ModelError, ModelResult};
use smartpark_geo::Coordinates;

/// Identifier of a car as assigned by the database.
#[derive(Clone, Constructor, Copy, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub(crate) struct CarId(i64);

impl CarId {
    /// Returns the raw identifier.
    pub(crate) fn as_i64(&self) -> i64 {
        self.0
    }
}

/// Identifier of a parking space as assigned by the database.
#[derive(Clone, Constructor, Copy, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub(crate) struct ParkingSpaceId(i64);

impl ParkingSpaceId {
    /// Returns the raw identifier.
    pub(crate) fn as_i64(&self) -> i64 {
        self.0
    }
}

/// Emission profile of a car.  Values are never negative and their sum is always finite.
#[derive(Clone, Copy, Debug, Getters, PartialEq)]
pub(crate) struct Emission {
    /// CO2 emission value.
    co2: f64,

    /// NOx emission value.
    nox: f64,
}

impl Emission {
    /// Creates a new emission profile after validating its values.
    pub(crate) fn new(co2: f64, nox: f64) -> ModelResult<Self> {
        for (name, value) in [("co2", co2), ("nox", nox)] {
            if !value.is_finite() {
                return Err(ModelError(format!("Emission {} must be a finite number", name)));
            }
            if value < 0.0 {
                return Err(ModelError(format!(
                    "Emission {} cannot be negative; got {}",
                    name, value
                )));
            }
        }
        if !(co2 + nox).is_finite() {
            return Err(ModelError("Emission values are too large".to_owned()));
        }
        Ok(Self { co2, nox })
    }

    /// Returns the sum of all pollutants.
    pub(crate) fn total(&self) -> f64 {
        self.co2 + self.nox
    }
}

/// A registered car along with its emission profile.
#[derive(Clone, Constructor, Debug, Getters, PartialEq)]
pub(crate) struct Car {
    /// Identifier of the car.
    id: CarId,

    /// Where the car owner lives.
    residence_location: Coordinates,

    /// Where the car is right now.
    current_location: Coordinates,

    /// The car's emission profile.
    emission: Emission,
}

/// A parking space and its availability.
#[derive(Clone, Constructor, Debug, Getters, PartialEq)]
pub(crate) struct ParkingSpace {
    /// Identifier of the parking space.
    id: ParkingSpaceId,

    /// Where the parking space is.
    location: Coordinates,

    /// Whether the parking space is available for parking.
    available: bool,
}

impl ParkingSpace {
    /// Returns a copy of this parking space with its availability set to `available`.
    pub(crate) fn with_available(self, available: bool) -> Self {
        Self { available, ..self }
    }
}

/// A parking space paired with a price, if any.
///
/// Depending on where this comes from, the price is either the one stored for the space or a
/// quote computed for a specific car.
#[derive(Constructor, Debug, Getters, PartialEq)]
pub(crate) struct PricedParkingSpace {
    /// The parking space.
    space: ParkingSpace,

    /// The price of the parking space, or `None` if unavailable.
    price: Option<f64>,
}
