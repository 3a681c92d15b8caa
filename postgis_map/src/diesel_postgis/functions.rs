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
//! Free function call shape: constructors and server info, no geometry receiver.
//!
//! ```ignore
//! let q = diesel::select(st_point(-71.064544, 42.28787).st_set_srid(4326).st_as_ewkt());
//! ```

use diesel::dsl::sql;
use diesel::expression::SqlLiteral;
use diesel::expression::AsExpression;
use diesel::sql_types::{Double, Integer, Text};

use crate::registry::table;
use super::call::*;
use super::types::Geometry;

/// The expression a value turns into once bound as `ST`
pub type Expr<T, ST> = <T as AsExpression<ST>>::Expression;

pub fn st_geom_from_text<T>(wkt: T) -> SpatialCall<Args1<Expr<T, Text>>, Geometry>
    where T: AsExpression<Text>
{
    SpatialCall::new(&table::ST_GEOM_FROM_TEXT, Args1(wkt.as_expression()))
}

pub fn st_geom_from_text_srid<T, S>(wkt: T, srid: S) -> SpatialCall<Args2<Expr<T, Text>, Expr<S, Integer>>, Geometry>
    where T: AsExpression<Text>, S: AsExpression<Integer>
{
    SpatialCall::new(&table::ST_GEOM_FROM_TEXT_SRID, Args2(wkt.as_expression(), srid.as_expression()))
}

pub fn st_geom_from_ewkt<T>(ewkt: T) -> SpatialCall<Args1<Expr<T, Text>>, Geometry>
    where T: AsExpression<Text>
{
    SpatialCall::new(&table::ST_GEOM_FROM_EWKT, Args1(ewkt.as_expression()))
}

pub fn st_point<X, Y>(x: X, y: Y) -> SpatialCall<Args2<Expr<X, Double>, Expr<Y, Double>>, Geometry>
    where X: AsExpression<Double>, Y: AsExpression<Double>
{
    SpatialCall::new(&table::ST_POINT, Args2(x.as_expression(), y.as_expression()))
}

pub fn st_make_envelope<X1, Y1, X2, Y2>(xmin: X1, ymin: Y1, xmax: X2, ymax: Y2)
    -> SpatialCall<Args4<Expr<X1, Double>, Expr<Y1, Double>, Expr<X2, Double>, Expr<Y2, Double>>, Geometry>
    where X1: AsExpression<Double>, Y1: AsExpression<Double>, X2: AsExpression<Double>, Y2: AsExpression<Double>
{
    SpatialCall::new(&table::ST_MAKE_ENVELOPE, Args4(
        xmin.as_expression(), ymin.as_expression(), xmax.as_expression(), ymax.as_expression()))
}

pub fn st_make_envelope_srid<X1, Y1, X2, Y2, S>(xmin: X1, ymin: Y1, xmax: X2, ymax: Y2, srid: S)
    -> SpatialCall<Args5<Expr<X1, Double>, Expr<Y1, Double>, Expr<X2, Double>, Expr<Y2, Double>, Expr<S, Integer>>, Geometry>
    where X1: AsExpression<Double>, Y1: AsExpression<Double>, X2: AsExpression<Double>, Y2: AsExpression<Double>,
          S: AsExpression<Integer>
{
    SpatialCall::new(&table::ST_MAKE_ENVELOPE_SRID, Args5(
        xmin.as_expression(), ymin.as_expression(), xmax.as_expression(), ymax.as_expression(),
        srid.as_expression()))
}

/// `PostGIS_Version()`; argument-less calls go through a SQL literal
pub fn postgis_version() -> SqlLiteral<Text> {
    sql::<Text>(&format!("{}()", table::POSTGIS_VERSION.sql_name))
}

pub fn postgis_full_version() -> SqlLiteral<Text> {
    sql::<Text>(&format!("{}()", table::POSTGIS_FULL_VERSION.sql_name))
}
