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

//! API to list all registered cars.

use crate::driver::Driver;
use crate::model::{Car, CarId};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Serialize;
#[cfg(test)]
use serde::Deserialize;
use smartpark_core::rest::{EmptyBody, RestError};
use smartpark_geo::Coordinates;

/// Wire representation of a car.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct CarResponse {
    /// Identifier of the car.
    id: CarId,

    /// CO2 emission value of the car.
    co2_emission: f64,

    /// NOx emission value of the car.
    nox_emission: f64,

    /// Where the car owner lives.
    residence_location: Coordinates,

    /// Where the car is right now.
    current_location: Coordinates,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: *car.id(),
            co2_emission: *car.emission().co2(),
            nox_emission: *car.emission().nox(),
            residence_location: *car.residence_location(),
            current_location: *car.current_location(),
        }
    }
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let cars = driver.get_cars().await?;

    let response: Vec<CarResponse> = cars.into_iter().map(CarResponse::from).collect();
    Ok(Json(response))
}
