// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::iter::FusedIterator;

use strata_core::{
	Result, RowResult, Scan,
	interface::{Connection, Table},
};
use tracing::instrument;

use crate::DataAccessor;

/// Rows of `[start, stop)` in row-key byte order, read lazily.
///
/// Forward-only: once exhausted it stays exhausted. Holds a lease on the
/// table until dropped.
pub struct RowScanner<C: Connection> {
	inner: Option<<C::Table as Table>::Scanner>,
	table_missing: bool,
}

impl<C: Connection> RowScanner<C> {
	fn new(scanner: <C::Table as Table>::Scanner) -> Self {
		Self {
			inner: Some(scanner),
			table_missing: false,
		}
	}

	fn missing_table() -> Self {
		Self {
			inner: None,
			table_missing: true,
		}
	}

	/// `true` when the table was missing and nothing will be produced.
	pub fn is_table_missing(&self) -> bool {
		self.table_missing
	}
}

impl<C: Connection> Iterator for RowScanner<C> {
	type Item = Result<RowResult>;

	fn next(&mut self) -> Option<Self::Item> {
		let next = self.inner.as_mut()?.next();
		if next.is_none() {
			self.inner = None;
		}
		next
	}
}

impl<C: Connection> FusedIterator for RowScanner<C> {}

impl<C: Connection> DataAccessor<C> {
	/// Starts a scan over rows `start <= row < stop`. Each row carries all
	/// its cells across families and columns, newest version only. An empty
	/// `stop` reads to the end of the table.
	#[instrument(name = "access::scan", level = "debug", skip(self, start, stop))]
	pub fn scan(
		&self,
		namespace: Option<&str>,
		table: &str,
		start: impl Into<Vec<u8>>,
		stop: impl Into<Vec<u8>>,
	) -> Result<RowScanner<C>> {
		let Some(handle) = self.resolve_table(namespace, table)? else {
			return Ok(RowScanner::missing_table());
		};

		let scanner = handle.scan(Scan::new().with_start_row(start).with_stop_row(stop))?;
		Ok(RowScanner::new(scanner))
	}
}
