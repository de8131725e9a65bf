// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Schema administration: namespaces and tables.
//!
//! Expected conditions (an empty name, a missing table, a duplicate create)
//! come back as outcome variants and are logged. Only store failures are
//! returned as errors.

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod namespace;
mod outcome;
mod table;

pub use outcome::{CreateTableOutcome, DeleteTableOutcome, NamespaceOutcome};
pub use table::resolve_table_name;
use strata_core::interface::Connection;

/// Administers namespaces and tables over a shared connection.
///
/// Every call acquires its own admin handle and releases it before
/// returning. The connection itself is never closed here.
#[derive(Clone)]
pub struct SchemaManager<C: Connection> {
	connection: C,
}

impl<C: Connection> SchemaManager<C> {
	pub fn new(connection: C) -> Self {
		Self {
			connection,
		}
	}

	pub fn connection(&self) -> &C {
		&self.connection
	}
}
