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
use std::io::Cursor;
use geo_types::{Coord, Geometry as GeoGeometry, GeometryCollection, LineString, MultiLineString,
                MultiPoint, MultiPolygon, Point, Polygon};
use itertools::Itertools;
use postgis::ewkb::{self, EwkbRead};

use crate::diesel_postgis::Geometry;

/// A geometry value exactly as the server sends it (EWKB).  The mapping layer
/// never looks inside, it only passes the bytes through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, FromSqlRow, AsExpression)]
#[sql_type = "Geometry"]
pub struct Ewkb(pub Vec<u8>);

impl Ewkb {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Ewkb {
    fn from(bytes: Vec<u8>) -> Self {
        Ewkb(bytes)
    }
}

/// A geometry decoded with the postgis EWKB reader into geo-types
#[derive(Debug, Clone, PartialEq, FromSqlRow)]
pub struct DbGeometry {
    pub geometry: GeoGeometry<f64>,
    /// 0 when the value carries no SRID
    pub srid: i32,
}

impl DbGeometry {
    pub fn from_ewkb(bytes: &[u8]) -> Result<Self, postgis::error::Error> {
        let mut rdr = Cursor::new(bytes);
        let geom = ewkb::Geometry::read_ewkb(&mut rdr)?;

        Ok(DbGeometry {
            srid: srid_of(&geom).unwrap_or(0),
            geometry: to_geo(&geom),
        })
    }

    /// Number of vertices over all parts, closing vertices included
    pub fn num_vertices(&self) -> usize {
        count_vertices(&self.geometry)
    }
}

fn srid_of(geom: &ewkb::Geometry) -> Option<i32> {
    match geom {
        ewkb::GeometryT::Point(p) => p.srid,
        ewkb::GeometryT::LineString(ls) => ls.srid,
        ewkb::GeometryT::Polygon(p) => p.srid,
        ewkb::GeometryT::MultiPoint(mp) => mp.srid,
        ewkb::GeometryT::MultiLineString(mls) => mls.srid,
        ewkb::GeometryT::MultiPolygon(mp) => mp.srid,
        ewkb::GeometryT::GeometryCollection(gc) => gc.srid,
    }
}

fn to_coord(p: &ewkb::Point) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

fn to_line_string(ls: &ewkb::LineString) -> LineString<f64> {
    LineString(ls.points.iter().map(to_coord).collect_vec())
}

fn to_polygon(polygon: &ewkb::Polygon) -> Polygon<f64> {
    let mut rings = polygon.rings.iter().map(to_line_string).collect_vec();

    //POLYGON EMPTY has no rings at all
    if rings.is_empty() {
        return Polygon::new(LineString(Vec::new()), Vec::new());
    }

    let exterior = rings.remove(0);
    Polygon::new(exterior, rings)
}

fn to_geo(geom: &ewkb::Geometry) -> GeoGeometry<f64> {
    match geom {
        ewkb::GeometryT::Point(p) => GeoGeometry::Point(Point(to_coord(p))),
        ewkb::GeometryT::LineString(ls) => GeoGeometry::LineString(to_line_string(ls)),
        ewkb::GeometryT::Polygon(p) => GeoGeometry::Polygon(to_polygon(p)),
        ewkb::GeometryT::MultiPoint(mp) => GeoGeometry::MultiPoint(
            MultiPoint(mp.points.iter().map(|p| Point(to_coord(p))).collect_vec())),
        ewkb::GeometryT::MultiLineString(mls) => GeoGeometry::MultiLineString(
            MultiLineString(mls.lines.iter().map(to_line_string).collect_vec())),
        ewkb::GeometryT::MultiPolygon(mp) => GeoGeometry::MultiPolygon(
            MultiPolygon(mp.polygons.iter().map(to_polygon).collect_vec())),
        ewkb::GeometryT::GeometryCollection(gc) => GeoGeometry::GeometryCollection(
            GeometryCollection(gc.geometries.iter().map(to_geo).collect_vec())),
    }
}

fn count_vertices(geometry: &GeoGeometry<f64>) -> usize {
    let polygon_vertices = |p: &Polygon<f64>| {
        p.exterior().0.len() + p.interiors().iter().map(|r| r.0.len()).sum::<usize>()
    };

    match geometry {
        GeoGeometry::Point(_) => 1,
        GeoGeometry::Line(_) => 2,
        GeoGeometry::LineString(ls) => ls.0.len(),
        GeoGeometry::Polygon(p) => polygon_vertices(p),
        GeoGeometry::MultiPoint(mp) => mp.0.len(),
        GeoGeometry::MultiLineString(mls) => mls.0.iter().map(|ls| ls.0.len()).sum(),
        GeoGeometry::MultiPolygon(mp) => mp.0.iter().map(polygon_vertices).sum(),
        GeoGeometry::GeometryCollection(gc) => gc.0.iter().map(count_vertices).sum(),
        GeoGeometry::Rect(_) => 5,
        GeoGeometry::Triangle(_) => 4,
    }
}
