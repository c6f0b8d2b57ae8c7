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

//! Database tests shared by all implementations.

use crate::db::*;
use smartpark_core::db::Db;
use std::sync::Arc;

/// Syntactic sugar to register a car and its emission profile in one go.
async fn create_full_car(
    ex: &mut Executor,
    residence: Coordinates,
    current: Coordinates,
    co2: f64,
    nox: f64,
) -> Car {
    let id = create_car(ex, &residence, &current).await.unwrap();
    let emission = Emission::new(co2, nox).unwrap();
    create_emission(ex, id, &emission).await.unwrap();
    Car::new(id, residence, current, emission)
}

pub(crate) async fn test_cars_create_and_get(db: Arc<dyn Db + Send + Sync>) {
    let mut tx = db.begin().await.unwrap();

    let car1 = create_full_car(
        tx.ex(),
        Coordinates::new(40.0, -3.0),
        Coordinates::new(40.5, -3.5),
        3.0,
        2.0,
    )
    .await;
    let car2 =
        create_full_car(tx.ex(), Coordinates::new(1.0, 2.0), Coordinates::new(3.0, 4.0), 0.0, 0.0)
            .await;
    assert_ne!(car1.id(), car2.id());

    assert_eq!(car1, get_car(tx.ex(), *car1.id()).await.unwrap());
    assert_eq!(car2, get_car(tx.ex(), *car2.id()).await.unwrap());

    tx.commit().await.unwrap();
    db.close().await;
}

pub(crate) async fn test_cars_get_not_found(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    assert_eq!(DbError::NotFound, get_car(&mut ex, CarId::new(1)).await.unwrap_err());

    create_full_car(&mut ex, Coordinates::new(1.0, 2.0), Coordinates::new(3.0, 4.0), 1.0, 1.0)
        .await;
    assert_eq!(DbError::NotFound, get_car(&mut ex, CarId::new(12345)).await.unwrap_err());

    drop(ex);
    db.close().await;
}

pub(crate) async fn test_cars_get_all_sorted(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    assert!(get_cars(&mut ex).await.unwrap().is_empty());

    let mut exp_cars = vec![];
    for i in [0.0, 1.0, 2.0, 3.0, 4.0] {
        exp_cars.push(
            create_full_car(
                &mut ex,
                Coordinates::new(i, i + 1.0),
                Coordinates::new(i + 2.0, i + 3.0),
                i * 10.0,
                i * 100.0,
            )
            .await,
        );
    }

    assert_eq!(exp_cars, get_cars(&mut ex).await.unwrap());

    drop(ex);
    db.close().await;
}

pub(crate) async fn test_cars_without_emission_are_hidden(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    let id = create_car(&mut ex, &Coordinates::new(1.0, 2.0), &Coordinates::new(3.0, 4.0))
        .await
        .unwrap();
    assert_eq!(DbError::NotFound, get_car(&mut ex, id).await.unwrap_err());
    assert!(get_cars(&mut ex).await.unwrap().is_empty());

    drop(ex);
    db.close().await;
}

pub(crate) async fn test_emission_only_one_per_car(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    let car =
        create_full_car(&mut ex, Coordinates::new(1.0, 2.0), Coordinates::new(3.0, 4.0), 5.0, 6.0)
            .await;
    assert_eq!(
        DbError::AlreadyExists,
        create_emission(&mut ex, *car.id(), &Emission::new(7.0, 8.0).unwrap()).await.unwrap_err()
    );
    assert_eq!(car, get_car(&mut ex, *car.id()).await.unwrap());

    drop(ex);
    db.close().await;
}

pub(crate) async fn test_emission_unknown_car(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    assert_eq!(
        DbError::NotFound,
        create_emission(&mut ex, CarId::new(8), &Emission::new(1.0, 2.0).unwrap())
            .await
            .unwrap_err()
    );

    drop(ex);
    db.close().await;
}

pub(crate) async fn test_parking_spaces_create_and_get(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    let space1 = create_parking_space(&mut ex, &Coordinates::new(10.0, 20.0), true).await.unwrap();
    let space2 =
        create_parking_space(&mut ex, &Coordinates::new(-10.0, -20.0), false).await.unwrap();
    assert_ne!(space1.id(), space2.id());
    assert_eq!(Coordinates::new(10.0, 20.0), *space1.location());
    assert!(*space1.available());
    assert!(!*space2.available());

    assert_eq!(space1, get_parking_space(&mut ex, *space1.id()).await.unwrap());
    assert_eq!(space2, get_parking_space(&mut ex, *space2.id()).await.unwrap());

    drop(ex);
    db.close().await;
}

pub(crate) async fn test_parking_spaces_get_not_found(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    assert_eq!(
        DbError::NotFound,
        get_parking_space(&mut ex, ParkingSpaceId::new(1)).await.unwrap_err()
    );

    drop(ex);
    db.close().await;
}

pub(crate) async fn test_parking_spaces_get_available(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    assert!(get_available_parking_spaces(&mut ex).await.unwrap().is_empty());

    let space1 = create_parking_space(&mut ex, &Coordinates::new(1.0, 1.0), true).await.unwrap();
    create_parking_space(&mut ex, &Coordinates::new(2.0, 2.0), false).await.unwrap();
    let space3 = create_parking_space(&mut ex, &Coordinates::new(3.0, 3.0), true).await.unwrap();
    create_parking_space(&mut ex, &Coordinates::new(4.0, 4.0), false).await.unwrap();

    assert_eq!(vec![space1, space3], get_available_parking_spaces(&mut ex).await.unwrap());

    drop(ex);
    db.close().await;
}

pub(crate) async fn test_parking_spaces_update_status(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    let space = create_parking_space(&mut ex, &Coordinates::new(1.0, 1.0), true).await.unwrap();

    update_parking_space_status(&mut ex, *space.id(), false).await.unwrap();
    assert!(!*get_parking_space(&mut ex, *space.id()).await.unwrap().available());
    assert!(get_available_parking_spaces(&mut ex).await.unwrap().is_empty());

    update_parking_space_status(&mut ex, *space.id(), false).await.unwrap();
    assert!(!*get_parking_space(&mut ex, *space.id()).await.unwrap().available());

    update_parking_space_status(&mut ex, *space.id(), true).await.unwrap();
    assert_eq!(space, get_parking_space(&mut ex, *space.id()).await.unwrap());

    drop(ex);
    db.close().await;
}

pub(crate) async fn test_parking_spaces_update_status_not_found(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    assert_eq!(
        DbError::NotFound,
        update_parking_space_status(&mut ex, ParkingSpaceId::new(5), true).await.unwrap_err()
    );

    drop(ex);
    db.close().await;
}

pub(crate) async fn test_stored_price(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    let car =
        create_full_car(&mut ex, Coordinates::new(1.0, 2.0), Coordinates::new(3.0, 4.0), 1.0, 1.0)
            .await;
    let space1 = create_parking_space(&mut ex, &Coordinates::new(5.0, 5.0), true).await.unwrap();
    let space2 = create_parking_space(&mut ex, &Coordinates::new(6.0, 6.0), true).await.unwrap();

    assert_eq!(None, get_stored_price(&mut ex, *space1.id()).await.unwrap());

    let pricing_id = create_pricing(&mut ex, *space1.id()).await.unwrap();
    assert_eq!(None, get_stored_price(&mut ex, *space1.id()).await.unwrap());

    create_car_pricing(&mut ex, *car.id(), pricing_id, 7.5).await.unwrap();
    assert_eq!(Some(7.5), get_stored_price(&mut ex, *space1.id()).await.unwrap());

    create_car_pricing(&mut ex, *car.id(), pricing_id, 9.25).await.unwrap();
    assert_eq!(Some(9.25), get_stored_price(&mut ex, *space1.id()).await.unwrap());

    assert_eq!(None, get_stored_price(&mut ex, *space2.id()).await.unwrap());

    drop(ex);
    db.close().await;
}

pub(crate) async fn test_pricing_only_one_per_parking_space(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    let space = create_parking_space(&mut ex, &Coordinates::new(5.0, 5.0), true).await.unwrap();
    create_pricing(&mut ex, *space.id()).await.unwrap();
    assert_eq!(DbError::AlreadyExists, create_pricing(&mut ex, *space.id()).await.unwrap_err());
    assert_eq!(
        DbError::NotFound,
        create_pricing(&mut ex, ParkingSpaceId::new(1000)).await.unwrap_err()
    );

    drop(ex);
    db.close().await;
}

pub(crate) async fn test_init_schema_is_idempotent(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    let space = create_parking_space(&mut ex, &Coordinates::new(5.0, 5.0), true).await.unwrap();
    init_schema(&mut ex).await.unwrap();
    assert_eq!(space, get_parking_space(&mut ex, *space.id()).await.unwrap());

    drop(ex);
    db.close().await;
}

macro_rules! generate_db_tests [
    ( $setup:expr $(, #[$extra:meta] )? ) => {
        smartpark_core::db::testutils::generate_tests!(
            $(#[$extra],)?
            $setup,
            $crate::db::tests,
            test_cars_create_and_get,
            test_cars_get_not_found,
            test_cars_get_all_sorted,
            test_cars_without_emission_are_hidden,
            test_emission_only_one_per_car,
            test_emission_unknown_car,
            test_parking_spaces_create_and_get,
            test_parking_spaces_get_not_found,
            test_parking_spaces_get_available,
            test_parking_spaces_update_status,
            test_parking_spaces_update_status_not_found,
            test_stored_price,
            test_pricing_only_one_per_parking_space,
            test_init_schema_is_idempotent
        );
    }
];

mod sqlite {
    use super::*;

    /// Opens an in-memory SQLite database and initializes it with the schema.
    async fn setup() -> Arc<dyn Db + Send + Sync> {
        let db = Arc::new(smartpark_core::db::sqlite::testutils::setup().await);
        init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        db
    }

    generate_db_tests!(setup().await);
}
