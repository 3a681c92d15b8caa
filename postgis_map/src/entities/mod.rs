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
//! Column mapped record types and their static description

pub mod db_models;

use itertools::Itertools;

use crate::registry::SqlArgType;
use crate::translate::{quote_ident, SpatialExpr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMeta {
    pub name: &'static str,
    pub sql_type: SqlArgType,
    pub nullable: bool,
    pub primary_key: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableMeta {
    pub schema: Option<&'static str>,
    pub name: &'static str,
    pub columns: &'static [ColumnMeta],
}

impl TableMeta {
    /// `"schema"."table"` or `"table"`
    pub fn qualified_name(&self) -> String {
        match self.schema {
            Some(schema) => format!("{}.{}", quote_ident(schema), quote_ident(self.name)),
            None => quote_ident(self.name),
        }
    }

    pub fn primary_key(&self) -> Option<&'static ColumnMeta> {
        self.columns.iter().find(|c| c.primary_key)
    }

    pub fn column(&self, name: &str) -> Option<&'static ColumnMeta> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Schema written in front of column references.  `public` is left out,
    /// the same way diesel's `table!` renders it.
    pub fn reference_schema(&self) -> Option<&'static str> {
        self.schema.filter(|s| *s != "public")
    }

    /// Column reference usable in a translated expression, qualified like diesel
    /// qualifies the matching `table!` column
    pub fn column_expr(&self, name: &str) -> Option<SpatialExpr> {
        let column = self.column(name)?;
        Some(match self.reference_schema() {
            Some(schema) => SpatialExpr::schema_column(schema, self.name, column.name, column.sql_type),
            None => SpatialExpr::qualified_column(self.name, column.name, column.sql_type),
        })
    }

    pub fn create_table_sql(&self) -> String {
        let columns = self.columns.iter().map(|c| {
            let mut def = format!("{} {}", quote_ident(c.name), c.sql_type.pg_name());
            if c.primary_key {
                def.push_str(" PRIMARY KEY");
            } else if !c.nullable {
                def.push_str(" NOT NULL");
            }
            def
        }).join(", ");

        format!("CREATE TABLE {} ({})", self.qualified_name(), columns)
    }

    pub fn drop_table_sql(&self) -> String {
        format!("DROP TABLE IF EXISTS {}", self.qualified_name())
    }
}

/// A record type whose fields map one to one onto a table's columns
pub trait MappedEntity {
    const TABLE: TableMeta;
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::db_models::*;

    #[test]
    fn test_owm_cities_meta() {
        let table = OwmCity::TABLE;
        assert_eq!(table.qualified_name(), "\"public\".\"owm_cities\"");
        assert_eq!(table.primary_key().map(|c| c.name), Some("id"));

        let location = table.column("location").unwrap();
        assert_eq!(location.sql_type, SqlArgType::Geometry);
        assert!(!location.nullable);
        assert!(table.column("city_name").unwrap().nullable);
        assert!(table.column("population").is_none());
    }

    #[test]
    fn test_create_table_sql() {
        assert_eq!(TestPolygon::TABLE.create_table_sql(),
                   "CREATE TABLE \"test_polygons\" (\"id\" integer PRIMARY KEY, \"name\" text, \"geom\" geometry NOT NULL)");
        assert_eq!(PostgisGeom::TABLE.drop_table_sql(), "DROP TABLE IF EXISTS \"postgis_geom\"");
    }

    #[test]
    fn test_single_primary_key() {
        for table in ALL_TABLES.iter() {
            assert_eq!(table.columns.iter().filter(|c| c.primary_key).count(), 1, "{}", table.name);
            assert!(table.primary_key().map(|c| !c.nullable).unwrap_or(false));
        }
    }

    #[test]
    fn test_column_expr() {
        let expr = OwmCity::TABLE.column_expr("location").unwrap();
        assert_eq!(expr, SpatialExpr::qualified_column("owm_cities", "location", SqlArgType::Geometry));
        assert!(OwmCity::TABLE.column_expr("nope").is_none());
    }

    #[test]
    fn test_column_expr_schema() {
        assert_eq!(OwmCity::TABLE.reference_schema(), None);
        assert_eq!(CityDistrict::TABLE.reference_schema(), Some("gis_data"));

        let expr = CityDistrict::TABLE.column_expr("boundary").unwrap();
        assert_eq!(expr, SpatialExpr::schema_column("gis_data", "city_districts", "boundary", SqlArgType::Geometry));
        assert_eq!(CityDistrict::TABLE.qualified_name(), "\"gis_data\".\"city_districts\"");
    }
}
