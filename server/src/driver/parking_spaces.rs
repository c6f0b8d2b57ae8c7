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

//! Operations on parking spaces.

use crate::db;
use crate::driver::{Driver, not_found_as};
use crate::driver::pricing::calculate_price;
use crate::model::*;
use log::info;
use smartpark_core::driver::{DriverError, DriverResult};
use smartpark_geo::Coordinates;

impl Driver {
    /// Registers a new parking space at `location` with the given availability.
    ///
    /// The returned space carries no price because new spaces have no pricing records yet.
    pub(crate) async fn create_parking_space(
        self,
        location: Coordinates,
        available: bool,
    ) -> DriverResult<PricedParkingSpace> {
        let space = db::create_parking_space(&mut self.db.ex().await?, &location, available).await?;
        info!("Registered parking space {:?}", space.id());
        Ok(PricedParkingSpace::new(space, None))
    }

    /// Sets the availability of the parking space `id` to `status` and returns the updated space
    /// along with its stored price.
    ///
    /// The space must exist before `status` is even looked at, which is why this takes an optional
    /// value: a missing space is reported before a missing status.
    ///
    /// The write happens as the first statement of the transaction so that SQLite takes the write
    /// lock upfront and concurrent updates wait on each other instead of failing as busy.
    pub(crate) async fn update_parking_space_status(
        self,
        id: ParkingSpaceId,
        status: Option<bool>,
    ) -> DriverResult<PricedParkingSpace> {
        let mut tx = self.db.begin().await?;

        let status = match status {
            Some(status) => status,
            None => {
                db::get_parking_space(tx.ex(), id)
                    .await
                    .map_err(not_found_as("Parking space not found"))?;
                return Err(DriverError::InvalidInput("No status provided".to_owned()));
            }
        };

        db::update_parking_space_status(tx.ex(), id, status)
            .await
            .map_err(not_found_as("Parking space not found"))?;
        let space = db::get_parking_space(tx.ex(), id).await?;
        let price = db::get_stored_price(tx.ex(), id).await?;
        tx.commit().await?;

        Ok(PricedParkingSpace::new(space, price))
    }

    /// Gets all available parking spaces along with the price that the car `car_id` would pay
    /// to park in each of them.
    pub(crate) async fn get_parking_space_quotes(
        self,
        car_id: CarId,
    ) -> DriverResult<Vec<PricedParkingSpace>> {
        let mut tx = self.db.begin().await?;
        let car = db::get_car(tx.ex(), car_id).await.map_err(not_found_as("Car not found"))?;
        let spaces = db::get_available_parking_spaces(tx.ex()).await?;
        tx.commit().await?;

        let quotes = spaces
            .into_iter()
            .map(|space| {
                let price = calculate_price(&space, &car, &*self.distances);
                PricedParkingSpace::new(space, price)
            })
            .collect();
        Ok(quotes)
    }
}
