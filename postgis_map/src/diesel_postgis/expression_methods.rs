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
//! Method and property getter call shapes: the receiver is rendered as the
//! first SQL argument.

use diesel::expression::{AsExpression, Expression};
use diesel::sql_types::{Binary, Bool, Double, Integer, Text};

use crate::registry::table;
use super::call::*;
use super::functions::Expr;
use super::types::Geometry;

pub trait GeometryExpressionMethods: Expression<SqlType = Geometry> + Sized {
    /// Area of a polygonal geometry in SRID units
    fn st_area(self) -> SpatialCall<Args1<Self>, Double> {
        SpatialCall::new(&table::ST_AREA, Args1(self))
    }

    fn st_length(self) -> SpatialCall<Args1<Self>, Double> {
        SpatialCall::new(&table::ST_LENGTH, Args1(self))
    }

    fn st_perimeter(self) -> SpatialCall<Args1<Self>, Double> {
        SpatialCall::new(&table::ST_PERIMETER, Args1(self))
    }

    /// WKB without SRID
    fn st_as_binary(self) -> SpatialCall<Args1<Self>, Binary> {
        SpatialCall::new(&table::ST_AS_BINARY, Args1(self))
    }

    fn st_as_ewkt(self) -> SpatialCall<Args1<Self>, Text> {
        SpatialCall::new(&table::ST_AS_EWKT, Args1(self))
    }

    fn st_as_geo_json(self) -> SpatialCall<Args1<Self>, Text> {
        SpatialCall::new(&table::ST_AS_GEO_JSON, Args1(self))
    }

    fn st_as_text(self) -> SpatialCall<Args1<Self>, Text> {
        SpatialCall::new(&table::ST_AS_TEXT, Args1(self))
    }

    fn st_centroid(self) -> SpatialCall<Args1<Self>, Geometry> {
        SpatialCall::new(&table::ST_CENTROID, Args1(self))
    }

    fn st_convex_hull(self) -> SpatialCall<Args1<Self>, Geometry> {
        SpatialCall::new(&table::ST_CONVEX_HULL, Args1(self))
    }

    /// Circle approximated with 48 segments per quarter circle
    fn st_minimum_bounding_circle(self) -> SpatialCall<Args1<Self>, Geometry> {
        SpatialCall::new(&table::ST_MINIMUM_BOUNDING_CIRCLE, Args1(self))
    }

    fn st_coord_dim(self) -> SpatialCall<Args1<Self>, Integer> {
        SpatialCall::new(&table::ST_COORD_DIM, Args1(self))
    }

    fn st_dimension(self) -> SpatialCall<Args1<Self>, Integer> {
        SpatialCall::new(&table::ST_DIMENSION, Args1(self))
    }

    fn st_end_point(self) -> SpatialCall<Args1<Self>, Geometry> {
        SpatialCall::new(&table::ST_END_POINT, Args1(self))
    }

    fn st_envelope(self) -> SpatialCall<Args1<Self>, Geometry> {
        SpatialCall::new(&table::ST_ENVELOPE, Args1(self))
    }

    /// `ST_Point`, `ST_Polygon`, ...
    fn st_geometry_type(self) -> SpatialCall<Args1<Self>, Text> {
        SpatialCall::new(&table::ST_GEOMETRY_TYPE, Args1(self))
    }

    /// `POINT`, `POLYGON`, ...
    fn geometry_type(self) -> SpatialCall<Args1<Self>, Text> {
        SpatialCall::new(&table::GEOMETRY_TYPE, Args1(self))
    }

    fn st_is_empty(self) -> SpatialCall<Args1<Self>, Bool> {
        SpatialCall::new(&table::ST_IS_EMPTY, Args1(self))
    }

    fn st_is_ring(self) -> SpatialCall<Args1<Self>, Bool> {
        SpatialCall::new(&table::ST_IS_RING, Args1(self))
    }

    fn st_is_simple(self) -> SpatialCall<Args1<Self>, Bool> {
        SpatialCall::new(&table::ST_IS_SIMPLE, Args1(self))
    }

    fn st_is_valid(self) -> SpatialCall<Args1<Self>, Bool> {
        SpatialCall::new(&table::ST_IS_VALID, Args1(self))
    }

    fn st_n_dims(self) -> SpatialCall<Args1<Self>, Integer> {
        SpatialCall::new(&table::ST_N_DIMS, Args1(self))
    }

    fn st_n_points(self) -> SpatialCall<Args1<Self>, Integer> {
        SpatialCall::new(&table::ST_N_POINTS, Args1(self))
    }

    fn st_n_rings(self) -> SpatialCall<Args1<Self>, Integer> {
        SpatialCall::new(&table::ST_N_RINGS, Args1(self))
    }

    fn st_num_geometries(self) -> SpatialCall<Args1<Self>, Integer> {
        SpatialCall::new(&table::ST_NUM_GEOMETRIES, Args1(self))
    }

    fn st_srid(self) -> SpatialCall<Args1<Self>, Integer> {
        SpatialCall::new(&table::ST_SRID, Args1(self))
    }

    fn st_start_point(self) -> SpatialCall<Args1<Self>, Geometry> {
        SpatialCall::new(&table::ST_START_POINT, Args1(self))
    }

    fn st_x(self) -> SpatialCall<Args1<Self>, Double> {
        SpatialCall::new(&table::ST_X, Args1(self))
    }

    fn st_y(self) -> SpatialCall<Args1<Self>, Double> {
        SpatialCall::new(&table::ST_Y, Args1(self))
    }

    fn st_reverse(self) -> SpatialCall<Args1<Self>, Geometry> {
        SpatialCall::new(&table::ST_REVERSE, Args1(self))
    }

    fn st_distance<T>(self, other: T) -> SpatialCall<Args2<Self, Expr<T, Geometry>>, Double>
        where T: AsExpression<Geometry>
    {
        SpatialCall::new(&table::ST_DISTANCE, Args2(self, other.as_expression()))
    }

    fn st_shortest_line<T>(self, other: T) -> SpatialCall<Args2<Self, Expr<T, Geometry>>, Geometry>
        where T: AsExpression<Geometry>
    {
        SpatialCall::new(&table::ST_SHORTEST_LINE, Args2(self, other.as_expression()))
    }

    fn st_union<T>(self, other: T) -> SpatialCall<Args2<Self, Expr<T, Geometry>>, Geometry>
        where T: AsExpression<Geometry>
    {
        SpatialCall::new(&table::ST_UNION, Args2(self, other.as_expression()))
    }

    fn st_contains<T>(self, other: T) -> SpatialCall<Args2<Self, Expr<T, Geometry>>, Bool>
        where T: AsExpression<Geometry>
    {
        SpatialCall::new(&table::ST_CONTAINS, Args2(self, other.as_expression()))
    }

    fn st_disjoint<T>(self, other: T) -> SpatialCall<Args2<Self, Expr<T, Geometry>>, Bool>
        where T: AsExpression<Geometry>
    {
        SpatialCall::new(&table::ST_DISJOINT, Args2(self, other.as_expression()))
    }

    /// Spatial equality, vertex order and SRID formatting do not matter
    fn st_equals<T>(self, other: T) -> SpatialCall<Args2<Self, Expr<T, Geometry>>, Bool>
        where T: AsExpression<Geometry>
    {
        SpatialCall::new(&table::ST_EQUALS, Args2(self, other.as_expression()))
    }

    fn st_intersects<T>(self, other: T) -> SpatialCall<Args2<Self, Expr<T, Geometry>>, Bool>
        where T: AsExpression<Geometry>
    {
        SpatialCall::new(&table::ST_INTERSECTS, Args2(self, other.as_expression()))
    }

    fn st_overlaps<T>(self, other: T) -> SpatialCall<Args2<Self, Expr<T, Geometry>>, Bool>
        where T: AsExpression<Geometry>
    {
        SpatialCall::new(&table::ST_OVERLAPS, Args2(self, other.as_expression()))
    }

    fn st_touches<T>(self, other: T) -> SpatialCall<Args2<Self, Expr<T, Geometry>>, Bool>
        where T: AsExpression<Geometry>
    {
        SpatialCall::new(&table::ST_TOUCHES, Args2(self, other.as_expression()))
    }

    fn st_within<T>(self, other: T) -> SpatialCall<Args2<Self, Expr<T, Geometry>>, Bool>
        where T: AsExpression<Geometry>
    {
        SpatialCall::new(&table::ST_WITHIN, Args2(self, other.as_expression()))
    }

    /// Buffer with the default 8 segments per quarter circle
    fn st_buffer<R>(self, radius: R) -> SpatialCall<Args2<Self, Expr<R, Double>>, Geometry>
        where R: AsExpression<Double>
    {
        SpatialCall::new(&table::ST_BUFFER, Args2(self, radius.as_expression()))
    }

    fn st_buffer_segments<R, N>(self, radius: R, quad_segs: N) -> SpatialCall<Args3<Self, Expr<R, Double>, Expr<N, Integer>>, Geometry>
        where R: AsExpression<Double>, N: AsExpression<Integer>
    {
        SpatialCall::new(&table::ST_BUFFER_SEGMENTS, Args3(self, radius.as_expression(), quad_segs.as_expression()))
    }

    fn st_minimum_bounding_circle_segments<N>(self, quad_segs: N) -> SpatialCall<Args2<Self, Expr<N, Integer>>, Geometry>
        where N: AsExpression<Integer>
    {
        SpatialCall::new(&table::ST_MINIMUM_BOUNDING_CIRCLE_SEGMENTS, Args2(self, quad_segs.as_expression()))
    }

    fn st_d_within<T, D>(self, other: T, distance: D) -> SpatialCall<Args3<Self, Expr<T, Geometry>, Expr<D, Double>>, Bool>
        where T: AsExpression<Geometry>, D: AsExpression<Double>
    {
        SpatialCall::new(&table::ST_D_WITHIN, Args3(self, other.as_expression(), distance.as_expression()))
    }

    /// 1-based index
    fn st_point_n<N>(self, n: N) -> SpatialCall<Args2<Self, Expr<N, Integer>>, Geometry>
        where N: AsExpression<Integer>
    {
        SpatialCall::new(&table::ST_POINT_N, Args2(self, n.as_expression()))
    }

    /// Sets the SRID without transforming coordinates
    fn st_set_srid<S>(self, srid: S) -> SpatialCall<Args2<Self, Expr<S, Integer>>, Geometry>
        where S: AsExpression<Integer>
    {
        SpatialCall::new(&table::ST_SET_SRID, Args2(self, srid.as_expression()))
    }

    fn st_transform<S>(self, srid: S) -> SpatialCall<Args2<Self, Expr<S, Integer>>, Geometry>
        where S: AsExpression<Integer>
    {
        SpatialCall::new(&table::ST_TRANSFORM, Args2(self, srid.as_expression()))
    }

    fn st_translate<X, Y>(self, dx: X, dy: Y) -> SpatialCall<Args3<Self, Expr<X, Double>, Expr<Y, Double>>, Geometry>
        where X: AsExpression<Double>, Y: AsExpression<Double>
    {
        SpatialCall::new(&table::ST_TRANSLATE, Args3(self, dx.as_expression(), dy.as_expression()))
    }
}

impl<T> GeometryExpressionMethods for T where T: Expression<SqlType = Geometry> {}
