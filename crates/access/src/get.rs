// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::{
	Cell, Get, Result,
	interface::{Connection, Table},
};
use tracing::instrument;

use crate::DataAccessor;

impl<C: Connection> DataAccessor<C> {
	/// Every retained version of (row, family, column), newest first.
	/// Empty when the table is missing.
	#[instrument(name = "access::get", level = "debug", skip(self, row, family, column))]
	pub fn get(
		&self,
		namespace: Option<&str>,
		table: &str,
		row: impl Into<Vec<u8>>,
		family: impl Into<Vec<u8>>,
		column: impl Into<Vec<u8>>,
	) -> Result<Vec<Cell>> {
		let Some(handle) = self.resolve_table(namespace, table)? else {
			return Ok(Vec::new());
		};

		let result = handle.get(Get::new(row).add_column(family, column).read_all_versions())?;
		Ok(result.cells)
	}
}
