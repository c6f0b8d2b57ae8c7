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

//! Operations on cars.

use crate::db;
use crate::driver::Driver;
use crate::model::*;
use log::info;
use smartpark_core::driver::DriverResult;
use smartpark_geo::Coordinates;

impl Driver {
    /// Registers a new car whose owner lives at `residence`, located at `current` and with the
    /// given `emission` profile.  Returns the identifier assigned to the car.
    pub(crate) async fn create_car(
        self,
        residence: Coordinates,
        current: Coordinates,
        emission: Emission,
    ) -> DriverResult<CarId> {
        let mut tx = self.db.begin().await?;
        let id = db::create_car(tx.ex(), &residence, &current).await?;
        db::create_emission(tx.ex(), id, &emission).await?;
        tx.commit().await?;
        info!("Registered car {:?}", id);
        Ok(id)
    }

    /// Gets all registered cars sorted by their identifier.
    pub(crate) async fn get_cars(self) -> DriverResult<Vec<Car>> {
        let cars = db::get_cars(&mut self.db.ex().await?).await?;
        Ok(cars)
    }
}
