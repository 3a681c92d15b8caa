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
use anyhow::Result;
use log::info;

use crate::config::DbConfig;
use crate::entities::TableMeta;
use crate::session::SpatialSession;

pub struct TestDbProperties {
    pub test_db_config: DbConfig,
    pub test_db_name: String,
}

/// Drops and recreates `test_db_name` on the configured server with the postgis
/// extension enabled.  The admin connection comes from the environment or the default.
pub fn create_testdb(test_db_name: &str) -> Result<TestDbProperties>
{
    let admin_config = DbConfig::resolve(None)?;
    let props = TestDbProperties {
        test_db_config: admin_config.with_database(test_db_name)?,
        test_db_name: test_db_name.to_string(),
    };

    let mut pg_conn = admin_config.connect()?;

    let query = format!("

				SELECT pg_terminate_backend(pg_stat_activity.pid)
				FROM pg_stat_activity
				WHERE pg_stat_activity.datname = '{dbName}'  AND pid <> pg_backend_pid();


", dbName = test_db_name);

    pg_conn.batch_execute(&query)?;

    let query = format!("

				DROP DATABASE IF EXISTS {dbName}

", dbName = test_db_name);

    pg_conn.batch_execute(&query)?;

    let query = format!("

		CREATE DATABASE {dbName} ENCODING 'UTF8' TEMPLATE template0

", dbName = test_db_name);

    pg_conn.batch_execute(&query)?;

    let mut pg_conn = props.test_db_config.connect()?;
    pg_conn.batch_execute("CREATE EXTENSION IF NOT EXISTS postgis")?;

    info!("Created test database {}", test_db_name);

    Ok(props)
}

/// Opens a session on a fresh test database holding empty fixture tables
pub fn create_test_session(test_db_name: &str, tables: &[TableMeta]) -> Result<SpatialSession>
{
    let props = create_testdb(test_db_name)?;
    let mut session = SpatialSession::connect(&props.test_db_config)?;

    for table in tables.iter() {
        if let Some(schema) = table.schema {
            session.batch_execute(&format!("CREATE SCHEMA IF NOT EXISTS {}", schema))?;
        }
        session.batch_execute(&table.drop_table_sql())?;
        session.batch_execute(&table.create_table_sql())?;
    }

    Ok(session)
}
