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

//! Configuration of the service.

use derivative::Derivative;
use smartpark_core::env::get_optional_var;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Options to configure the service.
#[derive(Derivative)]
#[derivative(Debug, Default)]
#[cfg_attr(test, derivative(PartialEq))]
pub struct ServerOptions {
    /// Connection string of the SQLite database.
    #[derivative(Default(value = "\"sqlite://smart_parking.db?mode=rwc\".to_owned()"))]
    pub database: String,

    /// Port to listen on.
    #[derivative(Default(value = "5000"))]
    pub port: u16,

    /// Whether to listen on all interfaces instead of only on the loopback one.
    pub bind_any: bool,
}

impl ServerOptions {
    /// Initializes a set of options from environment variables whose name is prefixed with the
    /// given `prefix`.  Variables that are not set take their default values.
    ///
    /// This will use variables such as `<prefix>_DATABASE`, `<prefix>_PORT` and
    /// `<prefix>_BIND_ANY`.
    pub fn from_env(prefix: &str) -> Result<ServerOptions, String> {
        let defaults = ServerOptions::default();
        Ok(ServerOptions {
            database: get_optional_var::<String>(prefix, "DATABASE")?.unwrap_or(defaults.database),
            port: get_optional_var::<u16>(prefix, "PORT")?.unwrap_or(defaults.port),
            bind_any: get_optional_var::<bool>(prefix, "BIND_ANY")?.unwrap_or(defaults.bind_any),
        })
    }

    /// Returns the address to listen on.
    pub fn bind_addr(&self) -> SocketAddr {
        let ip = if self.bind_any { Ipv4Addr::UNSPECIFIED } else { Ipv4Addr::LOCALHOST };
        SocketAddr::new(IpAddr::V4(ip), self.port)
    }
}
