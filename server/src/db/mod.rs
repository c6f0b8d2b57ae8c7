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

//! Database abstraction in terms of the operations needed by the server.

use crate::model::*;
use futures::TryStreamExt;
use smartpark_core::db::sqlite::{self, map_sqlx_error};
use smartpark_core::db::{DbError, DbResult, Executor};
use smartpark_geo::Coordinates;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

#[cfg(test)]
mod tests;

/// Initializes the database schema.
pub async fn init_schema(ex: &mut Executor) -> DbResult<()> {
    match ex {
        Executor::Sqlite(ex) => sqlite::run_schema(ex, include_str!("sqlite.sql")).await,
    }
}

/// Fetches the pair of coordinates stored in the `latitude` and `longitude` columns of `row`.
fn get_coordinates(row: &SqliteRow, latitude: &str, longitude: &str) -> DbResult<Coordinates> {
    let latitude: f64 = row.try_get(latitude).map_err(map_sqlx_error)?;
    let longitude: f64 = row.try_get(longitude).map_err(map_sqlx_error)?;
    Ok(Coordinates::new(latitude, longitude))
}

/// Checks that a write operation touched exactly one row.
fn check_one_row(rows_affected: u64, what: &'static str) -> DbResult<()> {
    match rows_affected {
        0 => Err(DbError::NotFound),
        1 => Ok(()),
        _ => Err(DbError::BackendError(format!("{} affected more than one row", what))),
    }
}

impl TryFrom<SqliteRow> for Car {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: i64 = row.try_get("id").map_err(map_sqlx_error)?;
        let residence = get_coordinates(&row, "residence_latitude", "residence_longitude")?;
        let current = get_coordinates(&row, "current_latitude", "current_longitude")?;
        let co2: f64 = row.try_get("co2").map_err(map_sqlx_error)?;
        let nox: f64 = row.try_get("nox").map_err(map_sqlx_error)?;

        Ok(Car::new(CarId::new(id), residence, current, Emission::new(co2, nox)?))
    }
}

impl TryFrom<SqliteRow> for ParkingSpace {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: i64 = row.try_get("id").map_err(map_sqlx_error)?;
        let location = get_coordinates(&row, "latitude", "longitude")?;
        let status: bool = row.try_get("status").map_err(map_sqlx_error)?;

        Ok(ParkingSpace::new(ParkingSpaceId::new(id), location, status))
    }
}

/// Query prefix to fetch cars joined with their emission profiles.
const SELECT_CARS: &str = "
    SELECT
        cars.id, residence_latitude, residence_longitude, current_latitude, current_longitude,
        co2, nox
    FROM cars JOIN emissions ON emissions.car_id = cars.id
";

/// Creates a new car located at `current` whose owner lives at `residence`.
///
/// The car is not usable until its emission profile is stored with `create_emission`, so callers
/// must issue both operations within the same transaction.
pub(crate) async fn create_car(
    ex: &mut Executor,
    residence: &Coordinates,
    current: &Coordinates,
) -> DbResult<CarId> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO cars
                    (residence_latitude, residence_longitude, current_latitude, current_longitude)
                VALUES (?, ?, ?, ?)
            ";
            let done = sqlx::query(query_str)
                .bind(residence.latitude())
                .bind(residence.longitude())
                .bind(current.latitude())
                .bind(current.longitude())
                .execute(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            check_one_row(done.rows_affected(), "Car insertion")?;
            Ok(CarId::new(done.last_insert_rowid()))
        }
    }
}

/// Stores the `emission` profile of the car identified by `car_id`.
///
/// Fails with `NotFound` if the car does not exist and with `AlreadyExists` if the car already has
/// an emission profile.
pub(crate) async fn create_emission(
    ex: &mut Executor,
    car_id: CarId,
    emission: &Emission,
) -> DbResult<()> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "INSERT INTO emissions (car_id, co2, nox) VALUES (?, ?, ?)";
            let done = sqlx::query(query_str)
                .bind(car_id.as_i64())
                .bind(*emission.co2())
                .bind(*emission.nox())
                .execute(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            check_one_row(done.rows_affected(), "Emission insertion")
        }
    }
}

/// Gets the car identified by `id` along with its emission profile.
pub(crate) async fn get_car(ex: &mut Executor, id: CarId) -> DbResult<Car> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = format!("{} WHERE cars.id = ?", SELECT_CARS);
            let row = sqlx::query(&query_str)
                .bind(id.as_i64())
                .fetch_one(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            Car::try_from(row)
        }
    }
}

/// Gets all cars that have an emission profile, sorted by their identifier.
pub(crate) async fn get_cars(ex: &mut Executor) -> DbResult<Vec<Car>> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = format!("{} ORDER BY cars.id", SELECT_CARS);
            let mut rows = sqlx::query(&query_str).fetch(ex.conn());

            let mut cars = vec![];
            while let Some(row) = rows.try_next().await.map_err(map_sqlx_error)? {
                cars.push(Car::try_from(row)?);
            }
            Ok(cars)
        }
    }
}

/// Creates a new parking space at `location` with the given availability.
pub(crate) async fn create_parking_space(
    ex: &mut Executor,
    location: &Coordinates,
    available: bool,
) -> DbResult<ParkingSpace> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str =
                "INSERT INTO parking_spaces (latitude, longitude, status) VALUES (?, ?, ?)";
            let done = sqlx::query(query_str)
                .bind(location.latitude())
                .bind(location.longitude())
                .bind(available)
                .execute(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            check_one_row(done.rows_affected(), "Parking space insertion")?;
            let id = ParkingSpaceId::new(done.last_insert_rowid());
            Ok(ParkingSpace::new(id, *location, available))
        }
    }
}

/// Gets the parking space identified by `id`.
pub(crate) async fn get_parking_space(
    ex: &mut Executor,
    id: ParkingSpaceId,
) -> DbResult<ParkingSpace> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str =
                "SELECT id, latitude, longitude, status FROM parking_spaces WHERE id = ?";
            let row = sqlx::query(query_str)
                .bind(id.as_i64())
                .fetch_one(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            ParkingSpace::try_from(row)
        }
    }
}

/// Gets all parking spaces that are available, sorted by their identifier.
pub(crate) async fn get_available_parking_spaces(
    ex: &mut Executor,
) -> DbResult<Vec<ParkingSpace>> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT id, latitude, longitude, status
                FROM parking_spaces
                WHERE status
                ORDER BY id
            ";
            let mut rows = sqlx::query(query_str).fetch(ex.conn());

            let mut spaces = vec![];
            while let Some(row) = rows.try_next().await.map_err(map_sqlx_error)? {
                spaces.push(ParkingSpace::try_from(row)?);
            }
            Ok(spaces)
        }
    }
}

/// Sets the availability of the parking space identified by `id` to `available`.
pub(crate) async fn update_parking_space_status(
    ex: &mut Executor,
    id: ParkingSpaceId,
    available: bool,
) -> DbResult<()> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "UPDATE parking_spaces SET status = ? WHERE id = ?";
            let done = sqlx::query(query_str)
                .bind(available)
                .bind(id.as_i64())
                .execute(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            check_one_row(done.rows_affected(), "Parking space update")
        }
    }
}

/// Gets the price stored for the parking space identified by `id`, which is the most recent car
/// pricing recorded for it.  Returns `None` if there is no such pricing.
pub(crate) async fn get_stored_price(
    ex: &mut Executor,
    id: ParkingSpaceId,
) -> DbResult<Option<f64>> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT car_pricings.price
                FROM pricings JOIN car_pricings ON car_pricings.pricing_id = pricings.id
                WHERE pricings.parking_space_id = ?
                ORDER BY car_pricings.id DESC
                LIMIT 1
            ";
            let maybe_row = sqlx::query(query_str)
                .bind(id.as_i64())
                .fetch_optional(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            match maybe_row {
                None => Ok(None),
                Some(row) => {
                    let price: f64 = row.try_get("price").map_err(map_sqlx_error)?;
                    Ok(Some(price))
                }
            }
        }
    }
}

/// Attaches a pricing record to the parking space identified by `id` and returns the identifier
/// of the new record.
#[cfg(test)]
pub(crate) async fn create_pricing(ex: &mut Executor, id: ParkingSpaceId) -> DbResult<i64> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "INSERT INTO pricings (parking_space_id) VALUES (?)";
            let done = sqlx::query(query_str)
                .bind(id.as_i64())
                .execute(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            Ok(done.last_insert_rowid())
        }
    }
}

/// Records a `price` for `car_id` under the pricing record `pricing_id`.
#[cfg(test)]
pub(crate) async fn create_car_pricing(
    ex: &mut Executor,
    car_id: CarId,
    pricing_id: i64,
    price: f64,
) -> DbResult<()> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str =
                "INSERT INTO car_pricings (car_id, pricing_id, price) VALUES (?, ?, ?)";
            let done = sqlx::query(query_str)
                .bind(car_id.as_i64())
                .bind(pricing_id)
                .bind(price)
                .execute(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            check_one_row(done.rows_affected(), "Car pricing insertion")
        }
    }
}
