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
use std::fmt;
use itertools::Itertools;

use crate::errors::{MappingError, Result};

/// SQL types a mapped function may take or return.  Every one of them can be
/// bound as a statement parameter by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlArgType {
    Geometry,
    Double,
    Integer,
    Text,
    Boolean,
    Bytea,
}

impl SqlArgType {
    /// Whether an argument of type `actual` can be passed where `self` is declared.
    /// Integers widen to double, nothing else is coerced.
    pub fn accepts(self, actual: SqlArgType) -> bool {
        self == actual || (self == SqlArgType::Double && actual == SqlArgType::Integer)
    }

    pub fn pg_name(self) -> &'static str {
        match self {
            SqlArgType::Geometry => "geometry",
            SqlArgType::Double => "double precision",
            SqlArgType::Integer => "integer",
            SqlArgType::Text => "text",
            SqlArgType::Boolean => "boolean",
            SqlArgType::Bytea => "bytea",
        }
    }
}

impl fmt::Display for SqlArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pg_name())
    }
}

/// How the host side spells the call.  All three shapes render to the same SQL,
/// `SQLNAME(arg1, ...)`, with a receiver becoming the first positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallShape {
    /// `geom.st_buffer(50.0)`
    Method,
    /// `st_geom_from_text("POINT(1 2)")`
    Function,
    /// `geom.st_srid()`, receiver only
    PropertyGetter,
}

impl CallShape {
    pub fn has_receiver(self) -> bool {
        self != CallShape::Function
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionMapping {
    pub host_name: &'static str,
    pub sql_name: &'static str,
    pub parameter_types: &'static [SqlArgType],
    pub return_type: SqlArgType,
    pub call_shape: CallShape,
}

impl FunctionMapping {
    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }

    /// True when `arg_types` can be bound, in order, to this entry's parameters
    pub fn matches(&self, arg_types: &[SqlArgType]) -> bool {
        self.arity() == arg_types.len()
            && self.parameter_types.iter()
                .zip(arg_types.iter())
                .all(|(declared, actual)| declared.accepts(*actual))
    }

    /// Renders the call given already rendered SQL arguments
    pub fn render(&self, sql_args: &[String]) -> Result<String> {
        if sql_args.len() != self.arity() {
            return Err(MappingError::ArgumentCount {
                sql_name: self.sql_name.to_string(),
                expected: self.arity(),
                actual: sql_args.len(),
            });
        }
        Ok(format!("{}({})", self.sql_name, sql_args.iter().join(", ")))
    }

    pub fn signature(&self) -> String {
        format!("{}({}) -> {}",
                self.host_name,
                self.parameter_types.iter().join(", "),
                self.return_type)
    }
}

impl fmt::Display for FunctionMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {} [{:?}]", self.signature(), self.sql_name, self.call_shape)
    }
}

/// Formats an attempted call for error messages
pub fn format_signature(host_name: &str, arg_types: &[SqlArgType]) -> String {
    format!("{}({})", host_name, arg_types.iter().join(", "))
}
