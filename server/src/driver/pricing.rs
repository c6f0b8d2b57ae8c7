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

//! Price quotes for parking spaces.

use crate::model::{Car, ParkingSpace};
use log::debug;
use smartpark_geo::DistanceProvider;

/// Price of a parking space before any adjustments.
const BASE_PRICE: f64 = 10.0;

/// Distance in kilometers under which a location counts as close to a parking space.
const NEARBY_KM: f64 = 2.0;

/// Discount applied for each of the car's locations that is close to the parking space.
const NEARBY_DISCOUNT: f64 = 2.0;

/// Surcharge applied per unit of emissions.
const EMISSION_RATE: f64 = 0.1;

/// Computes the price that `car` would pay to park at `space`, or `None` if `space` is not
/// available.
///
/// The price starts at a fixed base, gets a discount if the car is currently close to the space and
/// another one if the car's residence is close to it, and then gets a surcharge proportional to the
/// car's emissions.  The result is not clamped to any range.
pub(crate) fn calculate_price(
    space: &ParkingSpace,
    car: &Car,
    distances: &dyn DistanceProvider,
) -> Option<f64> {
    if !*space.available() {
        return None;
    }

    let car_km = distances.distance_km(car.current_location(), space.location());
    let residence_km = distances.distance_km(car.residence_location(), space.location());

    let mut price = BASE_PRICE;
    if car_km < NEARBY_KM {
        price -= NEARBY_DISCOUNT;
    }
    if residence_km < NEARBY_KM {
        price -= NEARBY_DISCOUNT;
    }
    price += car.emission().total() * EMISSION_RATE;

    debug!(
        "Price for car {:?} at space {:?}: {} (car at {} km, residence at {} km)",
        car.id(),
        space.id(),
        price,
        car_km,
        residence_km
    );
    Some(price)
}
