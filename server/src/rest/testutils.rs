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

//! Test utilities for the REST API.

use crate::db;
use crate::driver::Driver;
use crate::model::*;
use crate::rest::app;
use axum::Router;
use smartpark_core::db::Db;
use smartpark_geo::{Coordinates, MockDistanceProvider};
use std::sync::Arc;

/// State of a running test.
pub(crate) struct TestContext {
    /// The database backing the app, exposed so that tests can prepare and inspect state.
    db: Arc<dyn Db + Send + Sync>,

    /// The app under test.
    app: Router,
}

impl TestContext {
    /// Initializes the app with an empty in-memory database and no known distances.
    pub(crate) async fn setup() -> Self {
        Self::setup_with_distances(MockDistanceProvider::default()).await
    }

    /// Initializes the app with an empty in-memory database and the given `distances`.
    pub(crate) async fn setup_with_distances(distances: MockDistanceProvider) -> Self {
        let db = Arc::new(smartpark_core::db::sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let driver = Driver::new(db.clone(), Arc::new(distances));
        let app = app(driver);
        Self { db, app }
    }

    /// Initializes the app exactly as the service runs it, on an empty in-memory database.
    pub(crate) async fn setup_geodesic() -> Self {
        let db = Arc::new(smartpark_core::db::sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let app = crate::build_app(db.clone());
        Self { db, app }
    }

    /// Returns a copy of the app under test.
    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    /// Consumes the context and returns the app under test.
    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    /// Registers a car with its emission profile and returns its identifier.
    pub(crate) async fn create_car(
        &self,
        residence: Coordinates,
        current: Coordinates,
        co2: f64,
        nox: f64,
    ) -> CarId {
        let mut tx = self.db.begin().await.unwrap();
        let id = db::create_car(tx.ex(), &residence, &current).await.unwrap();
        db::create_emission(tx.ex(), id, &Emission::new(co2, nox).unwrap()).await.unwrap();
        tx.commit().await.unwrap();
        id
    }

    /// Gets all registered cars.
    pub(crate) async fn get_cars(&self) -> Vec<Car> {
        db::get_cars(&mut self.db.ex().await.unwrap()).await.unwrap()
    }

    /// Registers a parking space and returns it.
    pub(crate) async fn create_parking_space(
        &self,
        location: Coordinates,
        available: bool,
    ) -> ParkingSpace {
        db::create_parking_space(&mut self.db.ex().await.unwrap(), &location, available)
            .await
            .unwrap()
    }

    /// Gets the parking space `id`, which must exist.
    pub(crate) async fn get_parking_space(&self, id: ParkingSpaceId) -> ParkingSpace {
        db::get_parking_space(&mut self.db.ex().await.unwrap(), id).await.unwrap()
    }

    /// Stores a `price` for `car_id` on the parking space `space_id`.
    pub(crate) async fn set_stored_price(
        &self,
        space_id: ParkingSpaceId,
        car_id: CarId,
        price: f64,
    ) {
        let mut ex = self.db.ex().await.unwrap();
        let pricing_id = db::create_pricing(&mut ex, space_id).await.unwrap();
        db::create_car_pricing(&mut ex, car_id, pricing_id, price).await.unwrap();
    }
}
