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
//! Static table of PostGIS functions and lookup by host signature

mod types;
pub mod table;

pub use types::*;
pub use table::{ALL_MAPPINGS, mappings_with_shape};

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use log::{debug, error};

use crate::errors::{MappingError, Result};

pub struct FunctionRegistry {
    entries: &'static [FunctionMapping],
    by_name: HashMap<&'static str, Vec<&'static FunctionMapping>>,
}

static STANDARD: OnceLock<FunctionRegistry> = OnceLock::new();

impl FunctionRegistry {

    /// Builds a registry over `entries` after checking the table invariants
    pub fn new(entries: &'static [FunctionMapping]) -> Result<Self> {
        validate(entries)?;
        Ok(Self::build(entries))
    }

    /// The registry over [`ALL_MAPPINGS`], built and validated once per process.
    /// Panics if the built-in table breaks its own invariants.
    pub fn standard() -> &'static FunctionRegistry {
        STANDARD.get_or_init(|| match Self::new(ALL_MAPPINGS) {
            Ok(registry) => registry,
            Err(e) => {
                error!("Built-in mapping table rejected: {}", e);
                panic!("{}", e);
            }
        })
    }

    fn build(entries: &'static [FunctionMapping]) -> Self {
        let mut by_name: HashMap<&'static str, Vec<&'static FunctionMapping>> = HashMap::new();
        for entry in entries.iter() {
            by_name.entry(entry.host_name).or_default().push(entry);
        }

        debug!("Function registry with {} entries, {} names", entries.len(), by_name.len());

        Self {
            entries,
            by_name,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static FunctionMapping> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_name(&self, host_name: &str) -> bool {
        self.by_name.contains_key(host_name)
    }

    /// All overloads registered under `host_name`, in table order
    pub fn overloads(&self, host_name: &str) -> &[&'static FunctionMapping] {
        self.by_name.get(host_name).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Picks the overload of `host_name` that accepts `arg_types`.
    /// An exact match wins over one needing integer to double widening.
    pub fn resolve(&self, host_name: &str, arg_types: &[SqlArgType]) -> Result<&'static FunctionMapping> {
        let candidates = self.overloads(host_name);

        let found = candidates.iter()
            .find(|m| m.parameter_types == arg_types)
            .or_else(|| candidates.iter().find(|m| m.matches(arg_types)));

        match found {
            Some(m) => Ok(*m),
            None => Err(MappingError::UnmappedFunction {
                host_name: host_name.to_string(),
                signature: format_signature(host_name, arg_types),
            })
        }
    }

    /// Resolves then renders with already rendered SQL arguments
    pub fn render_call(&self, host_name: &str, arg_types: &[SqlArgType], sql_args: &[String]) -> Result<String> {
        if sql_args.len() != arg_types.len() {
            return Err(MappingError::ArgumentCount {
                sql_name: host_name.to_string(),
                expected: arg_types.len(),
                actual: sql_args.len(),
            });
        }
        let mapping = self.resolve(host_name, arg_types)?;
        mapping.render(sql_args)
    }

    /// Mapped functions have no local implementation, the call is rejected once
    /// the signature is known to exist.
    pub fn invoke_local(&self, host_name: &str, arg_types: &[SqlArgType]) -> Result<()> {
        let mapping = self.resolve(host_name, arg_types)?;
        Err(MappingError::NotSupportedLocalInvocation {
            host_name: mapping.host_name.to_string()
        })
    }
}

/// Checks that signatures are unique and receiver shapes are well formed
pub fn validate(entries: &[FunctionMapping]) -> Result<()> {
    let mut seen = HashSet::new();

    for entry in entries.iter() {
        if !seen.insert((entry.host_name, entry.parameter_types)) {
            return Err(MappingError::InvalidTable(
                format!("duplicate signature {}", entry.signature())));
        }

        if entry.sql_name.is_empty() || entry.host_name.is_empty() {
            return Err(MappingError::InvalidTable(
                format!("empty name in {}", entry.signature())));
        }

        if entry.call_shape.has_receiver() && entry.parameter_types.first() != Some(&SqlArgType::Geometry) {
            return Err(MappingError::InvalidTable(
                format!("{} has a receiver shape but no geometry first parameter", entry.signature())));
        }

        if entry.call_shape == CallShape::PropertyGetter && entry.arity() != 1 {
            return Err(MappingError::InvalidTable(
                format!("property getter {} takes arguments", entry.signature())));
        }
    }

    Ok(())
}
