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
use postgis_map::registry::SqlArgType;
use postgis_map::translate::{self, SpatialExpr, Value};

/// Reads a command line argument as an expression.
///
/// `wkt:<text>` becomes `ST_GeomFromText(<text>)`, `col:<name>` a geometry column,
/// `'<text>'` forces text.  Otherwise booleans, integers then doubles are tried,
/// anything left is text.
pub fn parse_literal(arg: &str) -> SpatialExpr {
    if let Some(wkt) = arg.strip_prefix("wkt:") {
        return translate::st_geom_from_text(wkt);
    }
    if let Some(name) = arg.strip_prefix("col:") {
        return SpatialExpr::column(name, SqlArgType::Geometry);
    }
    if arg.len() >= 2 && arg.starts_with('\'') && arg.ends_with('\'') {
        return SpatialExpr::from(&arg[1..arg.len() - 1]);
    }

    let value = match arg {
        "true" => Value::Boolean(true),
        "false" => Value::Boolean(false),
        _ => {
            if let Ok(i) = arg.parse::<i32>() {
                Value::Integer(i)
            } else if let Ok(d) = arg.parse::<f64>() {
                Value::Double(d)
            } else {
                Value::Text(arg.to_string())
            }
        }
    };

    SpatialExpr::from(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_literal("4326"), SpatialExpr::Value(Value::Integer(4326)));
        assert_eq!(parse_literal("-71.064544"), SpatialExpr::Value(Value::Double(-71.064544)));
        assert_eq!(parse_literal("1e3"), SpatialExpr::Value(Value::Double(1000.)));
    }

    #[test]
    fn test_parse_text_and_bool() {
        assert_eq!(parse_literal("true"), SpatialExpr::Value(Value::Boolean(true)));
        assert_eq!(parse_literal("'42'"), SpatialExpr::Value(Value::Text("42".to_string())));
        assert_eq!(parse_literal("POINT(1 2)"), SpatialExpr::Value(Value::Text("POINT(1 2)".to_string())));
    }

    #[test]
    fn test_parse_geometry_forms() {
        assert_eq!(parse_literal("wkt:POINT(1 2)"), translate::st_geom_from_text("POINT(1 2)"));
        assert_eq!(parse_literal("col:geom"), SpatialExpr::column("geom", SqlArgType::Geometry));
    }
}
