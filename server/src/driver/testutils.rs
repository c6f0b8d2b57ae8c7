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

//! Test utilities for the business layer.

use crate::db;
use crate::driver::Driver;
use smartpark_core::db::{Db, Executor};
use smartpark_geo::MockDistanceProvider;
use std::sync::Arc;

/// State of a running test.
pub(crate) struct TestContext {
    /// The database backing the driver, exposed so that tests can prepare and inspect state.
    db: Arc<dyn Db + Send + Sync>,

    /// The driver under test.
    driver: Driver,
}

impl TestContext {
    /// Initializes the driver with an empty in-memory database and no known distances.
    pub(crate) async fn setup() -> Self {
        Self::setup_with_distances(MockDistanceProvider::default()).await
    }

    /// Initializes the driver with an empty in-memory database and the given `distances`.
    pub(crate) async fn setup_with_distances(distances: MockDistanceProvider) -> Self {
        let db = Arc::new(smartpark_core::db::sqlite::testutils::setup().await);
        Self::setup_with_db(db, distances).await
    }

    /// Initializes the driver against an already-connected `db` and the given `distances`.
    pub(crate) async fn setup_with_db(
        db: Arc<dyn Db + Send + Sync>,
        distances: MockDistanceProvider,
    ) -> Self {
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let driver = Driver::new(db.clone(), Arc::new(distances));
        Self { db, driver }
    }

    /// Closes the database backing the driver.
    pub(crate) async fn close(self) {
        self.db.close().await;
    }

    /// Obtains a direct executor against the test database.
    pub(crate) async fn ex(&self) -> Executor {
        self.db.ex().await.unwrap()
    }

    /// Returns a copy of the driver under test.
    pub(crate) fn driver(&self) -> Driver {
        self.driver.clone()
    }
}
