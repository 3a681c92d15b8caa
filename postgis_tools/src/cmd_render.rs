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
use anyhow::Result;
use itertools::Itertools;
use postgis_map::translate::{SpatialExpr, Translator};
use structopt::StructOpt;

use crate::literal::parse_literal;

#[derive(StructOpt)]
pub struct RenderArgs {

    #[structopt(help="Host function name, e.g. st_buffer")]
    pub (crate) host_name: String,

    #[structopt(help="Arguments: numbers, true/false, 'text', wkt:<WKT> or col:<geometry column>")]
    pub (crate) args: Vec<String>,
}

pub fn render(args: &RenderArgs) -> Result<()> {
    let expr = SpatialExpr::call(&args.host_name, args.args.iter().map(|a| parse_literal(a)).collect_vec());

    let translated = Translator::default().translate(&expr)?;

    println!("SELECT {}", translated.sql);
    for (i, p) in translated.params.iter().enumerate() {
        println!("  ${} = {:?}", i + 1, p);
    }
    println!("-- returns {}", translated.sql_type);

    Ok(())
}
