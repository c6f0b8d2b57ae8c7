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

//! API to register a new parking space.

use crate::driver::Driver;
use crate::rest::ParkingSpaceResponse;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::{Json, http};
use serde::Deserialize;
use smartpark_core::rest::{JsonBody, RestError};
use smartpark_geo::Coordinates;

/// Returns the availability of new parking spaces when not specified.
fn default_status() -> bool {
    true
}

/// Message sent to the server to register a parking space.
#[derive(Deserialize)]
pub(crate) struct CreateParkingSpaceRequest {
    /// Location of the new parking space.
    location: Coordinates,

    /// Whether the new parking space is available.
    #[serde(default = "default_status")]
    status: bool,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    JsonBody(request): JsonBody<CreateParkingSpaceRequest>,
) -> Result<impl IntoResponse, RestError> {
    let space = driver.create_parking_space(request.location, request.status).await?;

    Ok((http::StatusCode::CREATED, Json(ParkingSpaceResponse::from(space))))
}
