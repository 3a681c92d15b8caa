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
//! Eager execution: one translated expression, one `SELECT`, first column of the first row

mod pg_types;

use itertools::Itertools;
use log::{debug, info};
use postgres::Client;
use postgres::types::{FromSqlOwned, ToSql};

use crate::config::DbConfig;
use crate::errors::Result;
use crate::geometry::Ewkb;
use crate::translate::{self, SpatialExpr, Translator};

/// Owns one connection for its whole life.  The connection is closed when the
/// session is dropped, whatever happened before.
pub struct SpatialSession {
    client: Client,
    translator: Translator<'static>,
}

impl SpatialSession {
    pub fn connect(config: &DbConfig) -> Result<Self> {
        let client = config.connect()?;
        info!("Connected to {}", config.database().as_deref().unwrap_or("default database"));
        Ok(Self::from_client(client))
    }

    pub fn from_client(client: Client) -> Self {
        SpatialSession {
            client,
            translator: Translator::default(),
        }
    }

    pub fn client_mut(&mut self) -> &mut Client {
        &mut self.client
    }

    /// Runs `SELECT <expr>` and decodes the first column of the single row.
    /// Errors raised by the server come back untouched.
    pub fn select_one<T: FromSqlOwned>(&mut self, expr: &SpatialExpr) -> Result<T> {
        let translated = self.translator.translate(expr)?;
        let query = format!("SELECT {}", translated.sql);

        debug!("{} -- binds: [{}]", query, translated.params.iter().map(|p| format!("{:?}", p.sql_type())).join(", "));

        let params = translated.params.iter()
            .map(|p| p as &(dyn ToSql + Sync))
            .collect_vec();

        let row = self.client.query_one(query.as_str(), &params)?;
        Ok(row.try_get(0)?)
    }

    pub fn batch_execute(&mut self, sql: &str) -> Result<()> {
        self.client.batch_execute(sql)?;
        Ok(())
    }

    pub fn geom_from_text(&mut self, wkt: &str) -> Result<Ewkb> {
        self.select_one(&translate::st_geom_from_text(wkt))
    }

    pub fn geom_from_text_srid(&mut self, wkt: &str, srid: i32) -> Result<Ewkb> {
        self.select_one(&translate::st_geom_from_text_srid(wkt, srid))
    }

    pub fn geom_from_ewkt(&mut self, ewkt: &str) -> Result<Ewkb> {
        self.select_one(&translate::st_geom_from_ewkt(ewkt))
    }

    pub fn as_text(&mut self, geom: &Ewkb) -> Result<String> {
        self.select_one(&SpatialExpr::geometry(geom.clone()).st_as_text())
    }

    pub fn as_ewkt(&mut self, geom: &Ewkb) -> Result<String> {
        self.select_one(&SpatialExpr::geometry(geom.clone()).st_as_ewkt())
    }

    /// Spatial equality as the server sees it
    pub fn equals(&mut self, lhs: &Ewkb, rhs: &Ewkb) -> Result<bool> {
        self.select_one(&SpatialExpr::geometry(lhs.clone()).st_equals(rhs.clone()))
    }

    pub fn postgis_version(&mut self) -> Result<String> {
        self.select_one(&translate::postgis_version())
    }

    pub fn postgis_full_version(&mut self) -> Result<String> {
        self.select_one(&translate::postgis_full_version())
    }
}

impl Drop for SpatialSession {
    fn drop(&mut self) {
        debug!("Dropping connection");
    }
}
