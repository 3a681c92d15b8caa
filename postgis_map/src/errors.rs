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
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("No PostGIS mapping for '{host_name}', attempted signature {signature}")]
    UnmappedFunction {
        host_name: String,
        signature: String,
    },
    #[error("'{host_name}' only exists inside a translated query and cannot be invoked locally")]
    NotSupportedLocalInvocation {
        host_name: String,
    },
    #[error("{sql_name} takes {expected} arguments, {actual} given")]
    ArgumentCount {
        sql_name: String,
        expected: usize,
        actual: usize,
    },
    #[error("Invalid mapping table: {0}")]
    InvalidTable(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Connection(#[from] postgres::Error),
    #[error(transparent)]
    Query(#[from] diesel::result::Error),
}

pub type Result<T> = std::result::Result<T, MappingError>;
