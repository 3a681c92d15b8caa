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
use crate::geometry::Ewkb;
use crate::registry::{table, SqlArgType};
use super::{SpatialExpr, Value};

macro_rules! value_expr {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for SpatialExpr {
                fn from(v: $ty) -> Self {
                    SpatialExpr::Value(Value::from(v))
                }
            }
        )+
    };
}

value_expr!(f64, i32, &str, String, bool, Ewkb);

impl From<Value> for SpatialExpr {
    fn from(v: Value) -> Self {
        SpatialExpr::Value(v)
    }
}

impl SpatialExpr {
    pub fn call(host_name: &str, args: Vec<SpatialExpr>) -> Self {
        SpatialExpr::Call {
            host_name: host_name.to_string(),
            args,
        }
    }

    pub fn column(name: &str, sql_type: SqlArgType) -> Self {
        SpatialExpr::Column {
            qualifier: Vec::new(),
            name: name.to_string(),
            sql_type,
        }
    }

    pub fn qualified_column(qualifier: &str, name: &str, sql_type: SqlArgType) -> Self {
        SpatialExpr::Column {
            qualifier: vec![qualifier.to_string()],
            name: name.to_string(),
            sql_type,
        }
    }

    pub fn schema_column(schema: &str, table: &str, name: &str, sql_type: SqlArgType) -> Self {
        SpatialExpr::Column {
            qualifier: vec![schema.to_string(), table.to_string()],
            name: name.to_string(),
            sql_type,
        }
    }

    pub fn geometry(value: Ewkb) -> Self {
        SpatialExpr::Value(Value::Geometry(value))
    }

    /// Instance style call, `self` becomes the first argument
    pub fn method(self, host_name: &str, mut args: Vec<SpatialExpr>) -> Self {
        args.insert(0, self);
        SpatialExpr::call(host_name, args)
    }

    pub fn st_area(self) -> Self {
        self.method(table::ST_AREA.host_name, Vec::new())
    }

    pub fn st_length(self) -> Self {
        self.method(table::ST_LENGTH.host_name, Vec::new())
    }

    pub fn st_perimeter(self) -> Self {
        self.method(table::ST_PERIMETER.host_name, Vec::new())
    }

    pub fn st_as_binary(self) -> Self {
        self.method(table::ST_AS_BINARY.host_name, Vec::new())
    }

    pub fn st_as_ewkt(self) -> Self {
        self.method(table::ST_AS_EWKT.host_name, Vec::new())
    }

    pub fn st_as_geo_json(self) -> Self {
        self.method(table::ST_AS_GEO_JSON.host_name, Vec::new())
    }

    pub fn st_as_text(self) -> Self {
        self.method(table::ST_AS_TEXT.host_name, Vec::new())
    }

    pub fn st_centroid(self) -> Self {
        self.method(table::ST_CENTROID.host_name, Vec::new())
    }

    pub fn st_convex_hull(self) -> Self {
        self.method(table::ST_CONVEX_HULL.host_name, Vec::new())
    }

    pub fn st_minimum_bounding_circle(self) -> Self {
        self.method(table::ST_MINIMUM_BOUNDING_CIRCLE.host_name, Vec::new())
    }

    pub fn st_coord_dim(self) -> Self {
        self.method(table::ST_COORD_DIM.host_name, Vec::new())
    }

    pub fn st_dimension(self) -> Self {
        self.method(table::ST_DIMENSION.host_name, Vec::new())
    }

    pub fn st_end_point(self) -> Self {
        self.method(table::ST_END_POINT.host_name, Vec::new())
    }

    pub fn st_envelope(self) -> Self {
        self.method(table::ST_ENVELOPE.host_name, Vec::new())
    }

    pub fn st_geometry_type(self) -> Self {
        self.method(table::ST_GEOMETRY_TYPE.host_name, Vec::new())
    }

    pub fn geometry_type(self) -> Self {
        self.method(table::GEOMETRY_TYPE.host_name, Vec::new())
    }

    pub fn st_is_empty(self) -> Self {
        self.method(table::ST_IS_EMPTY.host_name, Vec::new())
    }

    pub fn st_is_ring(self) -> Self {
        self.method(table::ST_IS_RING.host_name, Vec::new())
    }

    pub fn st_is_simple(self) -> Self {
        self.method(table::ST_IS_SIMPLE.host_name, Vec::new())
    }

    pub fn st_is_valid(self) -> Self {
        self.method(table::ST_IS_VALID.host_name, Vec::new())
    }

    pub fn st_n_dims(self) -> Self {
        self.method(table::ST_N_DIMS.host_name, Vec::new())
    }

    pub fn st_n_points(self) -> Self {
        self.method(table::ST_N_POINTS.host_name, Vec::new())
    }

    pub fn st_n_rings(self) -> Self {
        self.method(table::ST_N_RINGS.host_name, Vec::new())
    }

    pub fn st_num_geometries(self) -> Self {
        self.method(table::ST_NUM_GEOMETRIES.host_name, Vec::new())
    }

    pub fn st_srid(self) -> Self {
        self.method(table::ST_SRID.host_name, Vec::new())
    }

    pub fn st_start_point(self) -> Self {
        self.method(table::ST_START_POINT.host_name, Vec::new())
    }

    pub fn st_x(self) -> Self {
        self.method(table::ST_X.host_name, Vec::new())
    }

    pub fn st_y(self) -> Self {
        self.method(table::ST_Y.host_name, Vec::new())
    }

    pub fn st_reverse(self) -> Self {
        self.method(table::ST_REVERSE.host_name, Vec::new())
    }

    pub fn st_distance(self, other: impl Into<SpatialExpr>) -> Self {
        self.method(table::ST_DISTANCE.host_name, vec![other.into()])
    }

    pub fn st_shortest_line(self, other: impl Into<SpatialExpr>) -> Self {
        self.method(table::ST_SHORTEST_LINE.host_name, vec![other.into()])
    }

    pub fn st_union(self, other: impl Into<SpatialExpr>) -> Self {
        self.method(table::ST_UNION.host_name, vec![other.into()])
    }

    pub fn st_contains(self, other: impl Into<SpatialExpr>) -> Self {
        self.method(table::ST_CONTAINS.host_name, vec![other.into()])
    }

    pub fn st_disjoint(self, other: impl Into<SpatialExpr>) -> Self {
        self.method(table::ST_DISJOINT.host_name, vec![other.into()])
    }

    pub fn st_equals(self, other: impl Into<SpatialExpr>) -> Self {
        self.method(table::ST_EQUALS.host_name, vec![other.into()])
    }

    pub fn st_intersects(self, other: impl Into<SpatialExpr>) -> Self {
        self.method(table::ST_INTERSECTS.host_name, vec![other.into()])
    }

    pub fn st_overlaps(self, other: impl Into<SpatialExpr>) -> Self {
        self.method(table::ST_OVERLAPS.host_name, vec![other.into()])
    }

    pub fn st_touches(self, other: impl Into<SpatialExpr>) -> Self {
        self.method(table::ST_TOUCHES.host_name, vec![other.into()])
    }

    pub fn st_within(self, other: impl Into<SpatialExpr>) -> Self {
        self.method(table::ST_WITHIN.host_name, vec![other.into()])
    }

    pub fn st_buffer(self, radius: impl Into<SpatialExpr>) -> Self {
        self.method(table::ST_BUFFER.host_name, vec![radius.into()])
    }

    pub fn st_buffer_segments(self, radius: impl Into<SpatialExpr>, quad_segs: impl Into<SpatialExpr>) -> Self {
        self.method(table::ST_BUFFER_SEGMENTS.host_name, vec![radius.into(), quad_segs.into()])
    }

    pub fn st_minimum_bounding_circle_segments(self, quad_segs: impl Into<SpatialExpr>) -> Self {
        self.method(table::ST_MINIMUM_BOUNDING_CIRCLE_SEGMENTS.host_name, vec![quad_segs.into()])
    }

    pub fn st_d_within(self, other: impl Into<SpatialExpr>, distance: impl Into<SpatialExpr>) -> Self {
        self.method(table::ST_D_WITHIN.host_name, vec![other.into(), distance.into()])
    }

    pub fn st_point_n(self, n: impl Into<SpatialExpr>) -> Self {
        self.method(table::ST_POINT_N.host_name, vec![n.into()])
    }

    pub fn st_set_srid(self, srid: impl Into<SpatialExpr>) -> Self {
        self.method(table::ST_SET_SRID.host_name, vec![srid.into()])
    }

    pub fn st_transform(self, srid: impl Into<SpatialExpr>) -> Self {
        self.method(table::ST_TRANSFORM.host_name, vec![srid.into()])
    }

    pub fn st_translate(self, dx: impl Into<SpatialExpr>, dy: impl Into<SpatialExpr>) -> Self {
        self.method(table::ST_TRANSLATE.host_name, vec![dx.into(), dy.into()])
    }
}

pub fn st_geom_from_text(wkt: impl Into<SpatialExpr>) -> SpatialExpr {
    SpatialExpr::call(table::ST_GEOM_FROM_TEXT.host_name, vec![wkt.into()])
}

pub fn st_geom_from_text_srid(wkt: impl Into<SpatialExpr>, srid: impl Into<SpatialExpr>) -> SpatialExpr {
    SpatialExpr::call(table::ST_GEOM_FROM_TEXT_SRID.host_name, vec![wkt.into(), srid.into()])
}

pub fn st_geom_from_ewkt(ewkt: impl Into<SpatialExpr>) -> SpatialExpr {
    SpatialExpr::call(table::ST_GEOM_FROM_EWKT.host_name, vec![ewkt.into()])
}

pub fn st_point(x: impl Into<SpatialExpr>, y: impl Into<SpatialExpr>) -> SpatialExpr {
    SpatialExpr::call(table::ST_POINT.host_name, vec![x.into(), y.into()])
}

pub fn st_make_envelope(xmin: impl Into<SpatialExpr>, ymin: impl Into<SpatialExpr>,
                        xmax: impl Into<SpatialExpr>, ymax: impl Into<SpatialExpr>) -> SpatialExpr {
    SpatialExpr::call(table::ST_MAKE_ENVELOPE.host_name, vec![xmin.into(), ymin.into(), xmax.into(), ymax.into()])
}

pub fn st_make_envelope_srid(xmin: impl Into<SpatialExpr>, ymin: impl Into<SpatialExpr>,
                             xmax: impl Into<SpatialExpr>, ymax: impl Into<SpatialExpr>,
                             srid: impl Into<SpatialExpr>) -> SpatialExpr {
    SpatialExpr::call(table::ST_MAKE_ENVELOPE_SRID.host_name, vec![xmin.into(), ymin.into(), xmax.into(), ymax.into(), srid.into()])
}

pub fn postgis_version() -> SpatialExpr {
    SpatialExpr::call(table::POSTGIS_VERSION.host_name, Vec::new())
}

pub fn postgis_full_version() -> SpatialExpr {
    SpatialExpr::call(table::POSTGIS_FULL_VERSION.host_name, Vec::new())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use itertools::Itertools;

    use super::*;
    use crate::registry::{FunctionRegistry, ALL_MAPPINGS};
    use crate::translate::Translator;

    fn geom() -> SpatialExpr {
        SpatialExpr::column("geom", SqlArgType::Geometry)
    }

    fn every_builder_call() -> Vec<SpatialExpr> {
        vec![
            geom().st_area(), geom().st_length(), geom().st_perimeter(),
            geom().st_as_binary(), geom().st_as_ewkt(), geom().st_as_geo_json(), geom().st_as_text(),
            geom().st_centroid(), geom().st_convex_hull(), geom().st_minimum_bounding_circle(),
            geom().st_coord_dim(), geom().st_dimension(), geom().st_end_point(), geom().st_envelope(),
            geom().st_geometry_type(), geom().geometry_type(), geom().st_is_empty(), geom().st_is_ring(),
            geom().st_is_simple(), geom().st_is_valid(), geom().st_n_dims(), geom().st_n_points(),
            geom().st_n_rings(), geom().st_num_geometries(), geom().st_srid(), geom().st_start_point(),
            geom().st_x(), geom().st_y(), geom().st_reverse(),
            geom().st_distance(geom()), geom().st_shortest_line(geom()), geom().st_union(geom()),
            geom().st_contains(geom()), geom().st_disjoint(geom()), geom().st_equals(geom()),
            geom().st_intersects(geom()), geom().st_overlaps(geom()), geom().st_touches(geom()),
            geom().st_within(geom()),
            geom().st_buffer(50.0), geom().st_buffer_segments(50.0, 8),
            geom().st_minimum_bounding_circle_segments(8), geom().st_d_within(geom(), 10.0),
            geom().st_point_n(1), geom().st_set_srid(4326), geom().st_transform(3857),
            geom().st_translate(1.0, 2.0),
            st_geom_from_text("POINT(1 2)"), st_geom_from_text_srid("POINT(1 2)", 4326),
            st_geom_from_ewkt("SRID=4326;POINT(1 2)"), st_point(1.0, 2.0),
            st_make_envelope(0.0, 0.0, 1.0, 1.0), st_make_envelope_srid(0.0, 0.0, 1.0, 1.0, 4326),
            postgis_version(), postgis_full_version(),
        ]
    }

    #[test]
    fn test_builder_reaches_every_mapping() {
        let registry = FunctionRegistry::standard();
        let translator = Translator::default();

        let mut reached = HashSet::new();
        for expr in every_builder_call() {
            let (host_name, args) = match &expr {
                SpatialExpr::Call { host_name, args } => (host_name, args),
                other => panic!("Expected a call, got {}", other),
            };
            let arg_types = args.iter()
                .map(|a| translator.translate(a).unwrap().sql_type)
                .collect_vec();

            let mapping = registry.resolve(host_name, &arg_types).unwrap();
            assert!(reached.insert(mapping.signature()), "{} reached twice", mapping.signature());
        }

        let all = ALL_MAPPINGS.iter().map(|m| m.signature()).collect::<HashSet<_>>();
        let missing = all.difference(&reached).sorted().collect_vec();
        assert!(missing.is_empty(), "not reachable from the builder: {:?}", missing);
        assert_eq!(reached.len(), ALL_MAPPINGS.len());
    }
}
