/*
This file is part of the PostGIS Mapping Layer
Copyright (C) 2022 Novel-T

The PostGIS Mapping Layer is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/
use std::path::Path;

use anyhow::Result;
use postgis_map::config::DbConfig;
use postgis_map::session::SpatialSession;

pub fn print_version(config_file: Option<&Path>) -> Result<()> {
    let config = DbConfig::resolve(config_file)?;
    let mut session = SpatialSession::connect(&config)?;

    println!("{}", session.postgis_version()?);
    println!("{}", session.postgis_full_version()?);

    Ok(())
}
