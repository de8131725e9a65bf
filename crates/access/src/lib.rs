// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Row-level reads and writes against a named table.
//!
//! Every operation first confirms the table exists. A missing table turns
//! the operation into a logged no-op: writes report
//! [`WriteOutcome::TableNotFound`], reads come back empty.

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod delete;
mod get;
mod put;
mod resolve;
mod scan;

pub use scan::RowScanner;
use strata_catalog::SchemaManager;
use strata_core::interface::Connection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
	Applied,
	TableNotFound,
}

#[derive(Clone)]
pub struct DataAccessor<C: Connection> {
	schema: SchemaManager<C>,
}

impl<C: Connection> DataAccessor<C> {
	pub fn new(schema: SchemaManager<C>) -> Self {
		Self {
			schema,
		}
	}

	pub fn schema(&self) -> &SchemaManager<C> {
		&self.schema
	}

	fn connection(&self) -> &C {
		self.schema.connection()
	}
}
