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
//! The PostGIS functions known to the mapping layer.  SQL names and argument
//! order are the wire contract and must match the PostGIS documentation exactly.

use super::types::{CallShape, FunctionMapping};
use super::types::CallShape::*;
use super::types::SqlArgType::*;

macro_rules! mapping {
    ($const_name:ident, $host:literal => $sql:literal, [$($param:ident),*] -> $ret:ident, $shape:ident) => {
        pub const $const_name: FunctionMapping = FunctionMapping {
            host_name: $host,
            sql_name: $sql,
            parameter_types: &[$($param),*],
            return_type: $ret,
            call_shape: $shape,
        };
    };
}

// Measurement
mapping!(ST_AREA, "st_area" => "ST_Area", [Geometry] -> Double, Method);
mapping!(ST_DISTANCE, "st_distance" => "ST_Distance", [Geometry, Geometry] -> Double, Method);
mapping!(ST_LENGTH, "st_length" => "ST_Length", [Geometry] -> Double, Method);
mapping!(ST_PERIMETER, "st_perimeter" => "ST_Perimeter", [Geometry] -> Double, Method);

// Output
mapping!(ST_AS_BINARY, "st_as_binary" => "ST_AsBinary", [Geometry] -> Bytea, Method);
mapping!(ST_AS_EWKT, "st_as_ewkt" => "ST_AsEWKT", [Geometry] -> Text, Method);
mapping!(ST_AS_GEO_JSON, "st_as_geo_json" => "ST_AsGeoJSON", [Geometry] -> Text, Method);
mapping!(ST_AS_TEXT, "st_as_text" => "ST_AsText", [Geometry] -> Text, Method);

// Processing
mapping!(ST_BUFFER, "st_buffer" => "ST_Buffer", [Geometry, Double] -> Geometry, Method);
mapping!(ST_BUFFER_SEGMENTS, "st_buffer" => "ST_Buffer", [Geometry, Double, Integer] -> Geometry, Method);
mapping!(ST_CENTROID, "st_centroid" => "ST_Centroid", [Geometry] -> Geometry, Method);
mapping!(ST_CONVEX_HULL, "st_convex_hull" => "ST_ConvexHull", [Geometry] -> Geometry, Method);
mapping!(ST_MINIMUM_BOUNDING_CIRCLE, "st_minimum_bounding_circle" => "ST_MinimumBoundingCircle", [Geometry] -> Geometry, Method);
mapping!(ST_MINIMUM_BOUNDING_CIRCLE_SEGMENTS, "st_minimum_bounding_circle" => "ST_MinimumBoundingCircle", [Geometry, Integer] -> Geometry, Method);
mapping!(ST_SHORTEST_LINE, "st_shortest_line" => "ST_ShortestLine", [Geometry, Geometry] -> Geometry, Method);
mapping!(ST_UNION, "st_union" => "ST_Union", [Geometry, Geometry] -> Geometry, Method);

// Spatial relationships
mapping!(ST_CONTAINS, "st_contains" => "ST_Contains", [Geometry, Geometry] -> Boolean, Method);
mapping!(ST_DISJOINT, "st_disjoint" => "ST_Disjoint", [Geometry, Geometry] -> Boolean, Method);
mapping!(ST_D_WITHIN, "st_d_within" => "ST_DWithin", [Geometry, Geometry, Double] -> Boolean, Method);
mapping!(ST_EQUALS, "st_equals" => "ST_Equals", [Geometry, Geometry] -> Boolean, Method);
mapping!(ST_INTERSECTS, "st_intersects" => "ST_Intersects", [Geometry, Geometry] -> Boolean, Method);
mapping!(ST_OVERLAPS, "st_overlaps" => "ST_Overlaps", [Geometry, Geometry] -> Boolean, Method);
mapping!(ST_TOUCHES, "st_touches" => "ST_Touches", [Geometry, Geometry] -> Boolean, Method);
mapping!(ST_WITHIN, "st_within" => "ST_Within", [Geometry, Geometry] -> Boolean, Method);

// Accessors
mapping!(ST_COORD_DIM, "st_coord_dim" => "ST_CoordDim", [Geometry] -> Integer, PropertyGetter);
mapping!(ST_DIMENSION, "st_dimension" => "ST_Dimension", [Geometry] -> Integer, PropertyGetter);
mapping!(ST_END_POINT, "st_end_point" => "ST_EndPoint", [Geometry] -> Geometry, Method);
mapping!(ST_ENVELOPE, "st_envelope" => "ST_Envelope", [Geometry] -> Geometry, Method);
mapping!(ST_GEOMETRY_TYPE, "st_geometry_type" => "ST_GeometryType", [Geometry] -> Text, PropertyGetter);
mapping!(GEOMETRY_TYPE, "geometry_type" => "GeometryType", [Geometry] -> Text, PropertyGetter);
mapping!(ST_IS_EMPTY, "st_is_empty" => "ST_IsEmpty", [Geometry] -> Boolean, PropertyGetter);
mapping!(ST_IS_RING, "st_is_ring" => "ST_IsRing", [Geometry] -> Boolean, PropertyGetter);
mapping!(ST_IS_SIMPLE, "st_is_simple" => "ST_IsSimple", [Geometry] -> Boolean, PropertyGetter);
mapping!(ST_IS_VALID, "st_is_valid" => "ST_IsValid", [Geometry] -> Boolean, PropertyGetter);
mapping!(ST_N_DIMS, "st_n_dims" => "ST_NDims", [Geometry] -> Integer, PropertyGetter);
mapping!(ST_N_POINTS, "st_n_points" => "ST_NPoints", [Geometry] -> Integer, PropertyGetter);
mapping!(ST_N_RINGS, "st_n_rings" => "ST_NRings", [Geometry] -> Integer, PropertyGetter);
mapping!(ST_NUM_GEOMETRIES, "st_num_geometries" => "ST_NumGeometries", [Geometry] -> Integer, PropertyGetter);
mapping!(ST_POINT_N, "st_point_n" => "ST_PointN", [Geometry, Integer] -> Geometry, Method);
mapping!(ST_SRID, "st_srid" => "ST_SRID", [Geometry] -> Integer, PropertyGetter);
mapping!(ST_START_POINT, "st_start_point" => "ST_StartPoint", [Geometry] -> Geometry, Method);
mapping!(ST_X, "st_x" => "ST_X", [Geometry] -> Double, PropertyGetter);
mapping!(ST_Y, "st_y" => "ST_Y", [Geometry] -> Double, PropertyGetter);

// Editors
mapping!(ST_REVERSE, "st_reverse" => "ST_Reverse", [Geometry] -> Geometry, Method);
mapping!(ST_SET_SRID, "st_set_srid" => "ST_SetSRID", [Geometry, Integer] -> Geometry, Method);
mapping!(ST_TRANSFORM, "st_transform" => "ST_Transform", [Geometry, Integer] -> Geometry, Method);
mapping!(ST_TRANSLATE, "st_translate" => "ST_Translate", [Geometry, Double, Double] -> Geometry, Method);

// Constructors
mapping!(ST_GEOM_FROM_EWKT, "st_geom_from_ewkt" => "ST_GeomFromEWKT", [Text] -> Geometry, Function);
mapping!(ST_GEOM_FROM_TEXT, "st_geom_from_text" => "ST_GeomFromText", [Text] -> Geometry, Function);
mapping!(ST_GEOM_FROM_TEXT_SRID, "st_geom_from_text" => "ST_GeomFromText", [Text, Integer] -> Geometry, Function);
mapping!(ST_MAKE_ENVELOPE, "st_make_envelope" => "ST_MakeEnvelope", [Double, Double, Double, Double] -> Geometry, Function);
mapping!(ST_MAKE_ENVELOPE_SRID, "st_make_envelope" => "ST_MakeEnvelope", [Double, Double, Double, Double, Integer] -> Geometry, Function);
mapping!(ST_POINT, "st_point" => "ST_Point", [Double, Double] -> Geometry, Function);

// Version info
mapping!(POSTGIS_VERSION, "postgis_version" => "PostGIS_Version", [] -> Text, Function);
mapping!(POSTGIS_FULL_VERSION, "postgis_full_version" => "PostGIS_Full_Version", [] -> Text, Function);

pub static ALL_MAPPINGS: &[FunctionMapping] = &[
    ST_AREA,
    ST_DISTANCE,
    ST_LENGTH,
    ST_PERIMETER,
    ST_AS_BINARY,
    ST_AS_EWKT,
    ST_AS_GEO_JSON,
    ST_AS_TEXT,
    ST_BUFFER,
    ST_BUFFER_SEGMENTS,
    ST_CENTROID,
    ST_CONVEX_HULL,
    ST_MINIMUM_BOUNDING_CIRCLE,
    ST_MINIMUM_BOUNDING_CIRCLE_SEGMENTS,
    ST_SHORTEST_LINE,
    ST_UNION,
    ST_CONTAINS,
    ST_DISJOINT,
    ST_D_WITHIN,
    ST_EQUALS,
    ST_INTERSECTS,
    ST_OVERLAPS,
    ST_TOUCHES,
    ST_WITHIN,
    ST_COORD_DIM,
    ST_DIMENSION,
    ST_END_POINT,
    ST_ENVELOPE,
    ST_GEOMETRY_TYPE,
    GEOMETRY_TYPE,
    ST_IS_EMPTY,
    ST_IS_RING,
    ST_IS_SIMPLE,
    ST_IS_VALID,
    ST_N_DIMS,
    ST_N_POINTS,
    ST_N_RINGS,
    ST_NUM_GEOMETRIES,
    ST_POINT_N,
    ST_SRID,
    ST_START_POINT,
    ST_X,
    ST_Y,
    ST_REVERSE,
    ST_SET_SRID,
    ST_TRANSFORM,
    ST_TRANSLATE,
    ST_GEOM_FROM_EWKT,
    ST_GEOM_FROM_TEXT,
    ST_GEOM_FROM_TEXT_SRID,
    ST_MAKE_ENVELOPE,
    ST_MAKE_ENVELOPE_SRID,
    ST_POINT,
    POSTGIS_VERSION,
    POSTGIS_FULL_VERSION,
];

/// Entries with the given call shape, in table order
pub fn mappings_with_shape(shape: CallShape) -> impl Iterator<Item = &'static FunctionMapping> {
    ALL_MAPPINGS.iter().filter(move |m| m.call_shape == shape)
}
