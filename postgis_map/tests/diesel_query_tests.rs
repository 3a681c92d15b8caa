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
use diesel::debug_query;
use diesel::dsl::AsExprOf;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_builder::QueryFragment;

use postgis_map::diesel_postgis::*;
use postgis_map::entities::db_models::{city_districts, owm_cities, postgis_geom, test_polygons, CityDistrict, OwmCity};
use postgis_map::entities::MappedEntity;
use postgis_map::translate::Translator;
use postgis_map::{Ewkb, SqlArgType};

fn render<T: QueryFragment<Pg>>(query: T) -> String {
    debug_query::<Pg, _>(&query).to_string()
}

fn bound_geom() -> AsExprOf<Ewkb, Geometry> {
    Ewkb::default().into_sql::<Geometry>()
}

#[test]
fn test_select_area_from_table() {
    let query = test_polygons::table.select(test_polygons::geom.st_area());
    let sql = render(query);
    assert!(sql.starts_with(r#"SELECT ST_Area("test_polygons"."geom") FROM "test_polygons""#), "{}", sql);
}

#[test]
fn test_public_schema_filter() {
    let query = owm_cities::table
        .select(owm_cities::id)
        .filter(owm_cities::location.st_d_within(st_point(-71.064544, 42.28787).st_set_srid(4326), 1000.0));

    //diesel leaves the public schema out
    let sql = render(query);
    assert!(sql.contains(r#"FROM "owm_cities""#), "{}", sql);
    assert!(sql.contains(
        r#"WHERE ST_DWithin("owm_cities"."location", ST_SetSRID(ST_Point($1, $2), $3), $4)"#), "{}", sql);
    assert!(sql.contains("-- binds: [-71.064544, 42.28787, 4326, 1000.0]"), "{}", sql);
}

#[test]
fn test_schema_qualified_filter() {
    let query = city_districts::table
        .select(city_districts::district_name)
        .filter(city_districts::boundary.st_contains(st_point(2.3522, 48.8566).st_set_srid(4326)));

    let sql = render(query);
    assert!(sql.contains(r#"FROM "gis_data"."city_districts""#), "{}", sql);
    assert!(sql.contains(
        r#"WHERE ST_Contains("gis_data"."city_districts"."boundary", ST_SetSRID(ST_Point($1, $2), $3))"#), "{}", sql);
}

#[test]
fn test_column_expr_matches_diesel_qualifier() {
    let translator = Translator::default();

    for (meta, diesel_sql) in vec![
        (CityDistrict::TABLE, render(city_districts::table.select(city_districts::boundary.st_area()))),
        (OwmCity::TABLE, render(owm_cities::table.select(owm_cities::location.st_area()))),
    ] {
        let geom_col = meta.columns.iter().find(|c| c.sql_type == SqlArgType::Geometry).unwrap();
        let translated = translator.translate(&meta.column_expr(geom_col.name).unwrap().st_area()).unwrap();
        assert!(diesel_sql.starts_with(&format!("SELECT {}", translated.sql)), "{} vs {}", diesel_sql, translated.sql);
    }
}

#[test]
fn test_tuple_select_with_predicates() {
    let query = postgis_geom::table
        .select((postgis_geom::id, postgis_geom::geom.st_geometry_type()))
        .filter(postgis_geom::geom.st_intersects(st_make_envelope_srid(0.0, 0.0, 10.0, 10.0, 4326)))
        .filter(postgis_geom::geom.st_is_valid());

    let sql = render(query);
    assert!(sql.contains(r#"ST_GeometryType("postgis_geom"."geom")"#), "{}", sql);
    assert!(sql.contains(r#"ST_Intersects("postgis_geom"."geom", ST_MakeEnvelope($1, $2, $3, $4, $5))"#), "{}", sql);
    assert!(sql.contains(r#"AND ST_IsValid("postgis_geom"."geom")"#), "{}", sql);
}

#[test]
fn test_free_function_shapes() {
    assert!(render(diesel::select(st_geom_from_text("POINT(1 2)").st_as_text()))
        .starts_with("SELECT ST_AsText(ST_GeomFromText($1))"));

    assert!(render(diesel::select(st_geom_from_text_srid("POINT(1 2)", 4326).st_srid()))
        .starts_with("SELECT ST_SRID(ST_GeomFromText($1, $2))"));

    assert!(render(diesel::select(st_geom_from_ewkt("SRID=4326;POINT(1 2)").st_as_ewkt()))
        .starts_with("SELECT ST_AsEWKT(ST_GeomFromEWKT($1))"));

    assert!(render(diesel::select(st_make_envelope(0.0, 0.0, 1.0, 1.0).st_area()))
        .starts_with("SELECT ST_Area(ST_MakeEnvelope($1, $2, $3, $4))"));

    assert!(render(diesel::select(postgis_version())).starts_with("SELECT PostGIS_Version()"));
    assert!(render(diesel::select(postgis_full_version())).starts_with("SELECT PostGIS_Full_Version()"));
}

#[test]
fn test_method_argument_order() {
    let cases = vec![
        (render(diesel::select(bound_geom().st_buffer(50.0))), "ST_Buffer($1, $2)"),
        (render(diesel::select(bound_geom().st_buffer_segments(50.0, 8))), "ST_Buffer($1, $2, $3)"),
        (render(diesel::select(bound_geom().st_distance(bound_geom()))), "ST_Distance($1, $2)"),
        (render(diesel::select(bound_geom().st_translate(1.0, 2.0))), "ST_Translate($1, $2, $3)"),
        (render(diesel::select(bound_geom().st_transform(3857))), "ST_Transform($1, $2)"),
        (render(diesel::select(bound_geom().st_point_n(1))), "ST_PointN($1, $2)"),
        (render(diesel::select(bound_geom().st_minimum_bounding_circle_segments(8))), "ST_MinimumBoundingCircle($1, $2)"),
        (render(diesel::select(bound_geom().st_shortest_line(bound_geom()))), "ST_ShortestLine($1, $2)"),
        (render(diesel::select(bound_geom().st_union(bound_geom()).st_convex_hull())), "ST_ConvexHull(ST_Union($1, $2))"),
        (render(diesel::select(bound_geom().st_centroid().st_x())), "ST_X(ST_Centroid($1))"),
        (render(diesel::select(bound_geom().st_start_point().st_y())), "ST_Y(ST_StartPoint($1))"),
        (render(diesel::select(bound_geom().st_end_point().st_as_geo_json())), "ST_AsGeoJSON(ST_EndPoint($1))"),
        (render(diesel::select(bound_geom().st_reverse().st_as_binary())), "ST_AsBinary(ST_Reverse($1))"),
        (render(diesel::select(bound_geom().st_envelope().st_perimeter())), "ST_Perimeter(ST_Envelope($1))"),
        (render(diesel::select(bound_geom().st_length())), "ST_Length($1)"),
        (render(diesel::select(bound_geom().geometry_type())), "GeometryType($1)"),
        (render(diesel::select(bound_geom().st_n_points())), "ST_NPoints($1)"),
        (render(diesel::select(bound_geom().st_n_rings())), "ST_NRings($1)"),
        (render(diesel::select(bound_geom().st_n_dims())), "ST_NDims($1)"),
        (render(diesel::select(bound_geom().st_coord_dim())), "ST_CoordDim($1)"),
        (render(diesel::select(bound_geom().st_dimension())), "ST_Dimension($1)"),
        (render(diesel::select(bound_geom().st_num_geometries())), "ST_NumGeometries($1)"),
        (render(diesel::select(bound_geom().st_is_empty())), "ST_IsEmpty($1)"),
        (render(diesel::select(bound_geom().st_is_ring())), "ST_IsRing($1)"),
        (render(diesel::select(bound_geom().st_is_simple())), "ST_IsSimple($1)"),
        (render(diesel::select(bound_geom().st_minimum_bounding_circle())), "ST_MinimumBoundingCircle($1)"),
        (render(diesel::select(bound_geom().st_contains(bound_geom()))), "ST_Contains($1, $2)"),
        (render(diesel::select(bound_geom().st_within(bound_geom()))), "ST_Within($1, $2)"),
        (render(diesel::select(bound_geom().st_disjoint(bound_geom()))), "ST_Disjoint($1, $2)"),
        (render(diesel::select(bound_geom().st_equals(bound_geom()))), "ST_Equals($1, $2)"),
        (render(diesel::select(bound_geom().st_overlaps(bound_geom()))), "ST_Overlaps($1, $2)"),
        (render(diesel::select(bound_geom().st_touches(bound_geom()))), "ST_Touches($1, $2)"),
    ];

    for (sql, expected) in cases.iter() {
        assert!(sql.starts_with(&format!("SELECT {}", expected)), "{} does not start with {}", sql, expected);
    }
}

#[test]
fn test_call_keeps_mapping_entry() {
    let call = st_point(1.0, 2.0);
    assert_eq!(call.mapping().sql_name, "ST_Point");
    assert_eq!(call.mapping().host_name, "st_point");

    let call = test_polygons::geom.st_d_within(test_polygons::geom, 1.0);
    assert_eq!(call.mapping().sql_name, "ST_DWithin");
}
