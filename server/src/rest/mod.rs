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

//! Entry point to the REST server.

use crate::driver::Driver;
use crate::model::{ParkingSpaceId, PricedParkingSpace};
use axum::Router;
use serde::Serialize;
#[cfg(test)]
use serde::Deserialize;
use smartpark_geo::Coordinates;
use tower_http::cors::CorsLayer;

mod cars_get;
mod cars_post;
mod parking_space_status_post;
mod parking_spaces_get;
mod parking_spaces_post;
#[cfg(test)]
mod testutils;

/// Wire representation of a parking space.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct ParkingSpaceResponse {
    /// Identifier of the parking space.
    id: ParkingSpaceId,

    /// Location of the parking space as a `[latitude, longitude]` pair.
    location: Coordinates,

    /// Either `available` or `not available`.
    status: String,

    /// Price associated to the parking space, if any.
    price: Option<f64>,
}

impl From<PricedParkingSpace> for ParkingSpaceResponse {
    fn from(priced: PricedParkingSpace) -> Self {
        let (space, price) = (priced.space(), *priced.price());
        let status = if *space.available() { "available" } else { "not available" };
        Self { id: *space.id(), location: *space.location(), status: status.to_owned(), price }
    }
}

/// Creates the router for the application.
pub(crate) fn app(driver: Driver) -> Router {
    use axum::routing::{get, post};
    Router::new()
        .route(
            "/api/v1/parking-spaces",
            get(parking_spaces_get::handler).post(parking_spaces_post::handler),
        )
        .route("/api/v1/parking-spaces/:id/status", post(parking_space_status_post::handler))
        .route("/api/v1/cars", get(cars_get::handler).post(cars_post::handler))
        .layer(CorsLayer::permissive())
        .with_state(driver)
}
