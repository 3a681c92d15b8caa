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
use super::{ColumnMeta, MappedEntity, TableMeta};
use crate::geometry::Ewkb;
use crate::registry::SqlArgType;

pub mod public {

    table! {
        use diesel::sql_types::*;
        use crate::diesel_postgis::Geometry;

        public.owm_cities (id) {
            id -> Int4,
            city_name -> Nullable<Varchar>,
            location -> Geometry,
        }
    }
}

pub mod gis_data {

    table! {
        use diesel::sql_types::*;
        use crate::diesel_postgis::Geometry;

        gis_data.city_districts (id) {
            id -> Int4,
            district_name -> Nullable<Varchar>,
            boundary -> Geometry,
        }
    }
}

table! {
    use diesel::sql_types::*;
    use crate::diesel_postgis::Geometry;

    postgis_geom (id) {
        id -> Int4,
        name -> Nullable<Text>,
        geom -> Geometry,
    }
}

table! {
    use diesel::sql_types::*;
    use crate::diesel_postgis::Geometry;

    test_polygons (id) {
        id -> Int4,
        name -> Nullable<Text>,
        geom -> Geometry,
    }
}

allow_tables_to_appear_in_same_query!(
    postgis_geom,
    test_polygons,
);

pub use public::owm_cities;
pub use gis_data::city_districts;

#[derive(Queryable, Insertable, Identifiable, Debug, Clone, PartialEq, Default)]
#[primary_key(id)]
#[table_name = "owm_cities"]
pub struct OwmCity {
    pub id: i32,
    pub city_name: Option<String>,
    pub location: Ewkb,
}

#[derive(Queryable, Insertable, Identifiable, Debug, Clone, PartialEq, Default)]
#[primary_key(id)]
#[table_name = "city_districts"]
pub struct CityDistrict {
    pub id: i32,
    pub district_name: Option<String>,
    pub boundary: Ewkb,
}

#[derive(Queryable, Insertable, Identifiable, Debug, Clone, PartialEq, Default)]
#[primary_key(id)]
#[table_name = "postgis_geom"]
pub struct PostgisGeom {
    pub id: i32,
    pub name: Option<String>,
    pub geom: Ewkb,
}

#[derive(Queryable, Insertable, Identifiable, Debug, Clone, PartialEq, Default)]
#[primary_key(id)]
#[table_name = "test_polygons"]
pub struct TestPolygon {
    pub id: i32,
    pub name: Option<String>,
    pub geom: Ewkb,
}

const fn column(name: &'static str, sql_type: SqlArgType, nullable: bool, primary_key: bool) -> ColumnMeta {
    ColumnMeta { name, sql_type, nullable, primary_key }
}

impl MappedEntity for OwmCity {
    const TABLE: TableMeta = TableMeta {
        schema: Some("public"),
        name: "owm_cities",
        columns: &[
            column("id", SqlArgType::Integer, false, true),
            column("city_name", SqlArgType::Text, true, false),
            column("location", SqlArgType::Geometry, false, false),
        ],
    };
}

impl MappedEntity for CityDistrict {
    const TABLE: TableMeta = TableMeta {
        schema: Some("gis_data"),
        name: "city_districts",
        columns: &[
            column("id", SqlArgType::Integer, false, true),
            column("district_name", SqlArgType::Text, true, false),
            column("boundary", SqlArgType::Geometry, false, false),
        ],
    };
}

impl MappedEntity for PostgisGeom {
    const TABLE: TableMeta = TableMeta {
        schema: None,
        name: "postgis_geom",
        columns: &[
            column("id", SqlArgType::Integer, false, true),
            column("name", SqlArgType::Text, true, false),
            column("geom", SqlArgType::Geometry, false, false),
        ],
    };
}

impl MappedEntity for TestPolygon {
    const TABLE: TableMeta = TableMeta {
        schema: None,
        name: "test_polygons",
        columns: &[
            column("id", SqlArgType::Integer, false, true),
            column("name", SqlArgType::Text, true, false),
            column("geom", SqlArgType::Geometry, false, false),
        ],
    };
}

pub const ALL_TABLES: &[TableMeta] = &[OwmCity::TABLE, CityDistrict::TABLE, PostgisGeom::TABLE, TestPolygon::TABLE];
