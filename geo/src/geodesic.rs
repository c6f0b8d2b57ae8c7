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

//! Distance computation on the WGS84 ellipsoid.

use crate::{Coordinates, DistanceProvider};
use geo::{Distance, Geodesic, Point};
use log::debug;

/// Distance provider that computes geodesic distances on the WGS84 ellipsoid.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeodesicDistance;

impl DistanceProvider for GeodesicDistance {
    fn distance_km(&self, from: &Coordinates, to: &Coordinates) -> f64 {
        // Points take (x, y), which is (longitude, latitude).
        let a = Point::new(from.longitude(), from.latitude());
        let b = Point::new(to.longitude(), to.latitude());
        let km = Geodesic.distance(a, b) / 1000.0;
        debug!("Distance from {:?} to {:?} is {} km", from, to, km);
        km
    }
}
