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
use std::io::Write;
use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::serialize::{self, IsNull, Output, ToSql};

use crate::geometry::{DbGeometry, Ewkb};

#[derive(SqlType, QueryId, Debug, Clone, Copy, Default)]
#[postgres(type_name = "geometry")]
pub struct Geometry;

impl FromSql<Geometry, Pg> for Ewkb {
	fn from_sql(bytes: Option<&[u8]>) -> deserialize::Result<Self> {
		let bytes = not_none!(bytes);
		Ok(Ewkb(bytes.to_vec()))
	}
}

impl ToSql<Geometry, Pg> for Ewkb {
	fn to_sql<W: Write>(&self, out: &mut Output<W, Pg>) -> serialize::Result {
		out.write_all(self.as_bytes())?;
		Ok(IsNull::No)
	}
}

impl FromSql<Geometry, Pg> for DbGeometry {
	//Decodes the EWKB sent by the server into geo types
	fn from_sql(bytes: Option<&[u8]>) -> deserialize::Result<Self> {
		let bytes = not_none!(bytes);
		Ok(DbGeometry::from_ewkb(bytes)?)
	}
}
