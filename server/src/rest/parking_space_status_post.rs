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

//! API to change the availability of a parking space.

use crate::driver::Driver;
use crate::model::ParkingSpaceId;
use crate::rest::ParkingSpaceResponse;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Deserialize;
use smartpark_core::rest::{JsonBody, PathParams, RestError};

/// Message sent to the server to change the availability of a parking space.
#[derive(Deserialize)]
pub(crate) struct UpdateStatusRequest {
    /// New availability of the parking space.  Optional so that the handler can report a missing
    /// parking space before complaining about a missing status.
    status: Option<bool>,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    PathParams(id): PathParams<ParkingSpaceId>,
    JsonBody(request): JsonBody<UpdateStatusRequest>,
) -> Result<impl IntoResponse, RestError> {
    let space = driver.update_parking_space_status(id, request.status).await?;

    Ok(Json(ParkingSpaceResponse::from(space)))
}
