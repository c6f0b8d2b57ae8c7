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

//! Business logic for the service.

use smartpark_core::db::{Db, DbError};
use smartpark_core::driver::DriverError;
use smartpark_geo::DistanceProvider;
use std::sync::Arc;

mod cars;
mod parking_spaces;
mod pricing;
#[cfg(test)]
pub(crate) mod testutils;

/// Business logic.
///
/// The public operations exposed by the driver are all "one shot": they start and commit a
/// transaction, so it's incorrect for the caller to use two separate calls.  For this reason,
/// these operations consume the driver in an attempt to minimize the possibility of executing
/// two operations.
#[derive(Clone)]
pub(crate) struct Driver {
    /// The database that the driver uses for persistence.
    db: Arc<dyn Db + Send + Sync>,

    /// The provider of distances between locations, used to compute prices.
    distances: Arc<dyn DistanceProvider + Send + Sync>,
}

impl Driver {
    /// Creates a new driver backed by the given injected components.
    pub(crate) fn new(
        db: Arc<dyn Db + Send + Sync>,
        distances: Arc<dyn DistanceProvider + Send + Sync>,
    ) -> Self {
        Self { db, distances }
    }
}

/// Returns a mapper that turns a missing entity in the database into a `DriverError::NotFound`
/// that carries `message`.  Any other error is propagated as is.
fn not_found_as(message: &'static str) -> impl Fn(DbError) -> DriverError {
    move |e| match e {
        DbError::NotFound => DriverError::NotFound(message.to_owned()),
        e => DriverError::from(e),
    }
}
