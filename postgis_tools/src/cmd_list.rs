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
use postgis_map::FunctionRegistry;
use structopt::StructOpt;

#[derive(StructOpt)]
pub struct ListArgs {

    #[structopt(long, help="Only host names starting with this prefix")]
    pub (crate) prefix: Option<String>,
}

pub fn list_mappings(args: &ListArgs) -> Result<()> {
    let registry = FunctionRegistry::standard();

    let prefix = args.prefix.as_deref().unwrap_or("");

    let mappings = registry.iter()
        .filter(|m| m.host_name.starts_with(prefix))
        .sorted_by_key(|m| (m.host_name, m.arity()))
        .collect_vec();

    for mapping in mappings.iter() {
        println!("{}", mapping);
    }

    println!("{} of {} mappings", mappings.len(), registry.len());

    Ok(())
}
