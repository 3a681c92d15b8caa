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

use anyhow::{bail, Result};
use log::info;
use postgis_map::config::DbConfig;
use postgis_map::registry::SqlArgType;
use postgis_map::session::SpatialSession;
use postgis_map::translate::SpatialExpr;
use postgis_map::FunctionRegistry;
use structopt::StructOpt;

#[derive(StructOpt)]
pub struct EvalArgs {

    #[structopt(long, default_value = "st_geom_from_text", help="One argument text constructor, st_geom_from_text or st_geom_from_ewkt")]
    pub (crate) constructor: String,

    pub (crate) text: String,
}

pub fn eval(config_file: Option<&Path>, args: &EvalArgs) -> Result<()> {
    let mapping = FunctionRegistry::standard().resolve(&args.constructor, &[SqlArgType::Text])?;
    if mapping.return_type != SqlArgType::Geometry {
        bail!("{} does not construct a geometry", mapping.signature());
    }

    let config = DbConfig::resolve(config_file)?;
    let mut session = SpatialSession::connect(&config)?;

    let expr = SpatialExpr::call(mapping.host_name, vec![SpatialExpr::from(args.text.as_str())]);

    let ewkt: String = session.select_one(&expr.clone().st_as_ewkt())?;
    let is_valid: bool = session.select_one(&expr.st_is_valid())?;

    info!("{} evaluated", mapping.sql_name);

    println!("{}", ewkt);
    if !is_valid {
        println!("-- not valid");
    }

    Ok(())
}
