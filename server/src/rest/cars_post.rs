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

//! API to register a new car.

use crate::driver::Driver;
use crate::model::{CarId, Emission};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::{Json, http};
use serde::{Deserialize, Serialize};
use smartpark_core::rest::{JsonBody, RestError};
use smartpark_geo::Coordinates;

/// Emission profile as sent by clients.
#[derive(Deserialize)]
pub(crate) struct EmissionRequest {
    /// CO2 emission value.
    co2: f64,

    /// NOx emission value.
    nox: f64,
}

/// Message sent to the server to register a car.
#[derive(Deserialize)]
pub(crate) struct CreateCarRequest {
    /// Where the car owner lives.
    residence_location: Coordinates,

    /// Where the car is right now.
    current_location: Coordinates,

    /// The car's emission profile.
    emission: EmissionRequest,
}

/// Message returned by the server after registering a car.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct CreateCarResponse {
    /// Identifier assigned to the new car.
    id: CarId,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    JsonBody(request): JsonBody<CreateCarRequest>,
) -> Result<impl IntoResponse, RestError> {
    let emission = Emission::new(request.emission.co2, request.emission.nox)?;

    let id = driver
        .create_car(request.residence_location, request.current_location, emission)
        .await?;

    Ok((http::StatusCode::CREATED, Json(CreateCarResponse { id })))
}
