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

//! API to list the available parking spaces priced for a car.

use crate::driver::Driver;
use crate::model::CarId;
use crate::rest::ParkingSpaceResponse;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Deserialize;
use smartpark_core::rest::{EmptyBody, QueryParams, RestError};

/// Message returned when the car to price for is unknown.
const CAR_NOT_FOUND: &str = "Car not found";

/// Query parameters for this API.
#[derive(Deserialize)]
pub(crate) struct ListQuery {
    /// The car to compute the prices for.
    car_id: Option<CarId>,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    QueryParams(query): QueryParams<ListQuery>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let car_id = match query.car_id {
        Some(car_id) => car_id,
        None => return Err(RestError::NotFound(CAR_NOT_FOUND.to_owned())),
    };

    let quotes = driver.get_parking_space_quotes(car_id).await?;

    let response: Vec<ParkingSpaceResponse> =
        quotes.into_iter().map(ParkingSpaceResponse::from).collect();
    Ok(Json(response))
}
