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
//! Host side spatial expressions and their translation to parameterised SQL

mod builder;

pub use builder::*;

use std::fmt;
use itertools::Itertools;
use log::debug;

use crate::errors::{MappingError, Result};
use crate::geometry::Ewkb;
use crate::registry::{FunctionRegistry, SqlArgType};

/// A value bound as a statement parameter
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Geometry(Ewkb),
    Double(f64),
    Integer(i32),
    Text(String),
    Boolean(bool),
    Bytea(Vec<u8>),
}

impl Value {
    pub fn sql_type(&self) -> SqlArgType {
        match self {
            Value::Geometry(_) => SqlArgType::Geometry,
            Value::Double(_) => SqlArgType::Double,
            Value::Integer(_) => SqlArgType::Integer,
            Value::Text(_) => SqlArgType::Text,
            Value::Boolean(_) => SqlArgType::Boolean,
            Value::Bytea(_) => SqlArgType::Bytea,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<Ewkb> for Value {
    fn from(v: Ewkb) -> Self {
        Value::Geometry(v)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpatialExpr {
    Column {
        /// Schema and table in front of the column, outermost first
        qualifier: Vec<String>,
        name: String,
        sql_type: SqlArgType,
    },
    Value(Value),
    Call {
        host_name: String,
        args: Vec<SpatialExpr>,
    },
}

impl fmt::Display for SpatialExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpatialExpr::Column { qualifier, name, .. } => {
                write!(f, "{}", qualifier.iter().chain(std::iter::once(name)).join("."))
            }
            SpatialExpr::Value(v) => write!(f, "{:?}", v),
            SpatialExpr::Call { host_name, args } => write!(f, "{}({})", host_name, args.iter().join(", ")),
        }
    }
}

impl SpatialExpr {

    /// The value of a literal.  Columns and calls only have a meaning on the
    /// server side.
    pub fn evaluate_locally(&self) -> Result<Value> {
        match self {
            SpatialExpr::Value(v) => Ok(v.clone()),
            SpatialExpr::Column { name, .. } => Err(MappingError::NotSupportedLocalInvocation {
                host_name: name.clone()
            }),
            SpatialExpr::Call { host_name, .. } => Err(MappingError::NotSupportedLocalInvocation {
                host_name: host_name.clone()
            }),
        }
    }
}

/// SQL fragment with `$n` placeholders and the values to bind, in order
#[derive(Debug, Clone, PartialEq)]
pub struct Translated {
    pub sql: String,
    pub params: Vec<Value>,
    pub sql_type: SqlArgType,
}

pub struct Translator<'r> {
    registry: &'r FunctionRegistry,
}

impl Default for Translator<'static> {
    fn default() -> Self {
        Translator::new(FunctionRegistry::standard())
    }
}

impl<'r> Translator<'r> {
    pub fn new(registry: &'r FunctionRegistry) -> Self {
        Translator { registry }
    }

    pub fn translate(&self, expr: &SpatialExpr) -> Result<Translated> {
        let mut params = Vec::new();
        let (sql, sql_type) = self.walk(expr, &mut params)?;

        debug!("Translated {} to {} with {} params", expr, sql, params.len());

        Ok(Translated {
            sql,
            params,
            sql_type,
        })
    }

    fn walk(&self, expr: &SpatialExpr, params: &mut Vec<Value>) -> Result<(String, SqlArgType)> {
        match expr {
            SpatialExpr::Column { qualifier, name, sql_type } => {
                let sql = qualifier.iter()
                    .chain(std::iter::once(name))
                    .map(|ident| quote_ident(ident))
                    .join(".");
                Ok((sql, *sql_type))
            }
            SpatialExpr::Value(v) => {
                params.push(v.clone());
                //typed placeholders, several PostGIS functions are overloaded on geometry/geography/text
                Ok((format!("${}::{}", params.len(), v.sql_type().pg_name()), v.sql_type()))
            }
            SpatialExpr::Call { host_name, args } => {
                let mut sql_args = Vec::with_capacity(args.len());
                let mut arg_types = Vec::with_capacity(args.len());
                for arg in args.iter() {
                    let (sql, sql_type) = self.walk(arg, params)?;
                    sql_args.push(sql);
                    arg_types.push(sql_type);
                }

                let mapping = self.registry.resolve(host_name, &arg_types)?;
                Ok((mapping.render(&sql_args)?, mapping.return_type))
            }
        }
    }
}

/// Double quotes an identifier the way PostgreSQL expects
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geom_col(name: &str) -> SpatialExpr {
        SpatialExpr::Column { qualifier: Vec::new(), name: name.to_string(), sql_type: SqlArgType::Geometry }
    }

    #[test]
    fn test_placeholders_numbered_left_to_right() {
        let expr = st_point(-71.064544, 42.28787).st_set_srid(4326);
        let translated = Translator::default().translate(&expr).unwrap();

        assert_eq!(translated.sql, "ST_SetSRID(ST_Point($1::double precision, $2::double precision), $3::integer)");
        assert_eq!(translated.params, vec![
            Value::Double(-71.064544),
            Value::Double(42.28787),
            Value::Integer(4326),
        ]);
        assert_eq!(translated.sql_type, SqlArgType::Geometry);
    }

    #[test]
    fn test_receiver_is_first_argument() {
        let expr = geom_col("geom").st_d_within(st_geom_from_text("POINT(0 0)"), 10.0);
        let translated = Translator::default().translate(&expr).unwrap();

        assert_eq!(translated.sql, "ST_DWithin(\"geom\", ST_GeomFromText($1::text), $2::double precision)");
        assert_eq!(translated.sql_type, SqlArgType::Boolean);
    }

    #[test]
    fn test_qualified_column_quoting() {
        let expr = SpatialExpr::Column {
            qualifier: vec!["owm_cities".to_string()],
            name: "loc\"ation".to_string(),
            sql_type: SqlArgType::Geometry,
        }.st_srid();

        let translated = Translator::default().translate(&expr).unwrap();
        assert_eq!(translated.sql, "ST_SRID(\"owm_cities\".\"loc\"\"ation\")");
        assert!(translated.params.is_empty());
        assert_eq!(translated.sql_type, SqlArgType::Integer);
    }

    #[test]
    fn test_schema_qualified_column() {
        let expr = SpatialExpr::schema_column("gis_data", "city_districts", "boundary", SqlArgType::Geometry).st_area();

        let translated = Translator::default().translate(&expr).unwrap();
        assert_eq!(translated.sql, "ST_Area(\"gis_data\".\"city_districts\".\"boundary\")");
        assert_eq!(expr.to_string(), "st_area(gis_data.city_districts.boundary)");
    }

    #[test]
    fn test_integer_argument_widens() {
        let expr = geom_col("geom").st_buffer(50);
        let translated = Translator::default().translate(&expr).unwrap();
        assert_eq!(translated.sql, "ST_Buffer(\"geom\", $1::integer)");
        assert_eq!(translated.params, vec![Value::Integer(50)]);
    }

    #[test]
    fn test_overload_picked_by_arity() {
        let one = Translator::default().translate(&st_geom_from_text("POINT(1 2)")).unwrap();
        let two = Translator::default().translate(&st_geom_from_text_srid("POINT(1 2)", 4326)).unwrap();

        assert_eq!(one.sql, "ST_GeomFromText($1::text)");
        assert_eq!(two.sql, "ST_GeomFromText($1::text, $2::integer)");
    }

    #[test]
    fn test_unmapped_function() {
        let expr = SpatialExpr::call("st_voronoi_polygons", vec![geom_col("geom")]);
        let err = Translator::default().translate(&expr).unwrap_err();
        assert!(matches!(err, MappingError::UnmappedFunction { .. }));

        //st_transform takes an integer SRID
        let expr = geom_col("geom").st_transform(4326.5);
        assert!(matches!(Translator::default().translate(&expr), Err(MappingError::UnmappedFunction { .. })));

        //receiver of the wrong type
        let expr = SpatialExpr::from("POINT(1 2)").st_area();
        assert!(matches!(Translator::default().translate(&expr), Err(MappingError::UnmappedFunction { .. })));
    }

    #[test]
    fn test_no_argument_function() {
        let translated = Translator::default().translate(&postgis_version()).unwrap();
        assert_eq!(translated.sql, "PostGIS_Version()");
        assert_eq!(translated.sql_type, SqlArgType::Text);
    }

    #[test]
    fn test_local_evaluation() {
        assert_eq!(SpatialExpr::from(3.5).evaluate_locally().unwrap(), Value::Double(3.5));

        let err = st_point(1.0, 2.0).st_area().evaluate_locally().unwrap_err();
        match err {
            MappingError::NotSupportedLocalInvocation { host_name } => assert_eq!(host_name, "st_area"),
            other => panic!("Unexpected {}", other),
        }

        assert!(geom_col("geom").evaluate_locally().is_err());
    }

    #[test]
    fn test_display() {
        let expr = geom_col("geom").st_buffer(2.0).st_area();
        assert_eq!(expr.to_string(), "st_area(st_buffer(geom, Double(2.0)))");
    }
}
