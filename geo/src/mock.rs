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

//! Distance provider backed by an in-memory table for testing purposes.

use crate::{Coordinates, DistanceProvider};

/// Distance provider that answers from a fixed table of point pairs.
///
/// Distances are symmetric: registering `(a, b)` also answers queries for `(b, a)`.  The distance
/// from a point to itself is always zero.  Querying any other pair is a test bug and panics.
#[derive(Clone, Default)]
pub struct MockDistanceProvider {
    /// Known distances in kilometers.
    data: Vec<(Coordinates, Coordinates, f64)>,
}

impl MockDistanceProvider {
    /// Creates a new mock provider based on a list of `(from, to, km)` tuples.
    pub fn new(raw_data: &[(Coordinates, Coordinates, f64)]) -> Self {
        Self { data: raw_data.to_vec() }
    }
}

impl DistanceProvider for MockDistanceProvider {
    fn distance_km(&self, from: &Coordinates, to: &Coordinates) -> f64 {
        if from == to {
            return 0.0;
        }
        for (a, b, km) in &self.data {
            if (a == from && b == to) || (a == to && b == from) {
                return *km;
            }
        }
        panic!("No distance registered between {:?} and {:?}", from, to);
    }
}
