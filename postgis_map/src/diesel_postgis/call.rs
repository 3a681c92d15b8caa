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
use std::marker::PhantomData;
use diesel::expression::{AppearsOnTable, Expression, NonAggregate, SelectableExpression};
use diesel::pg::Pg;
use diesel::query_builder::{AstPass, QueryFragment, QueryId};
use diesel::result::QueryResult;

use crate::registry::FunctionMapping;

/// A PostGIS function call inside a diesel query.  The SQL name comes from the
/// mapping entry, arguments are rendered positionally with a receiver first.
#[derive(Debug, Clone)]
pub struct SpatialCall<Args, ST> {
    mapping: &'static FunctionMapping,
    args: Args,
    _sql_type: PhantomData<ST>,
}

impl<Args, ST> SpatialCall<Args, ST> {
    pub fn new(mapping: &'static FunctionMapping, args: Args) -> Self {
        SpatialCall {
            mapping,
            args,
            _sql_type: PhantomData,
        }
    }

    pub fn mapping(&self) -> &'static FunctionMapping {
        self.mapping
    }
}

impl<Args, ST> Expression for SpatialCall<Args, ST> {
    type SqlType = ST;
}

impl<Args, ST> QueryFragment<Pg> for SpatialCall<Args, ST>
    where Args: QueryFragment<Pg>
{
    fn walk_ast(&self, mut out: AstPass<Pg>) -> QueryResult<()> {
        out.push_sql(self.mapping.sql_name);
        out.push_sql("(");
        self.args.walk_ast(out.reborrow())?;
        out.push_sql(")");
        Ok(())
    }
}

//The SQL text depends on the mapping chosen at runtime, so no static id
impl<Args, ST> QueryId for SpatialCall<Args, ST> {
    type QueryId = ();
    const HAS_STATIC_QUERY_ID: bool = false;
}

impl<Args, ST, QS: ?Sized> AppearsOnTable<QS> for SpatialCall<Args, ST>
    where Args: AppearsOnTable<QS>
{}

impl<Args, ST, QS: ?Sized> SelectableExpression<QS> for SpatialCall<Args, ST>
    where Args: SelectableExpression<QS>
{}

impl<Args, ST> NonAggregate for SpatialCall<Args, ST>
    where Args: NonAggregate
{}

macro_rules! call_args {
    ($name:ident, $first_ty:ident: $first_idx:tt $(, $ty:ident: $idx:tt)*) => {
        /// Positional arguments of a spatial call
        #[derive(Debug, Clone, Copy)]
        pub struct $name<$first_ty $(, $ty)*>(pub $first_ty $(, pub $ty)*);

        impl<$first_ty $(, $ty)*> Expression for $name<$first_ty $(, $ty)*>
            where $first_ty: Expression $(, $ty: Expression)*
        {
            type SqlType = (<$first_ty as Expression>::SqlType, $(<$ty as Expression>::SqlType,)*);
        }

        impl<$first_ty $(, $ty)*> QueryFragment<Pg> for $name<$first_ty $(, $ty)*>
            where $first_ty: QueryFragment<Pg> $(, $ty: QueryFragment<Pg>)*
        {
            fn walk_ast(&self, mut out: AstPass<Pg>) -> QueryResult<()> {
                self.$first_idx.walk_ast(out.reborrow())?;
                $(
                    out.push_sql(", ");
                    self.$idx.walk_ast(out.reborrow())?;
                )*
                Ok(())
            }
        }

        impl<QS: ?Sized, $first_ty $(, $ty)*> AppearsOnTable<QS> for $name<$first_ty $(, $ty)*>
            where $first_ty: AppearsOnTable<QS> $(, $ty: AppearsOnTable<QS>)*
        {}

        impl<QS: ?Sized, $first_ty $(, $ty)*> SelectableExpression<QS> for $name<$first_ty $(, $ty)*>
            where $first_ty: SelectableExpression<QS> $(, $ty: SelectableExpression<QS>)*
        {}

        impl<$first_ty $(, $ty)*> NonAggregate for $name<$first_ty $(, $ty)*>
            where $first_ty: NonAggregate $(, $ty: NonAggregate)*
        {}
    };
}

call_args!(Args1, A: 0);
call_args!(Args2, A: 0, B: 1);
call_args!(Args3, A: 0, B: 1, C: 2);
call_args!(Args4, A: 0, B: 1, C: 2, D: 3);
call_args!(Args5, A: 0, B: 1, C: 2, D: 3, E: 4);
