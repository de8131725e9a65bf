// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{iter::FusedIterator, sync::Arc};

use strata_core::{Result, RowResult, Scan};

use crate::{key::CellKey, lease::Lease, table::TableStore};

/// Reads one row per call to `next`, resuming after the last row returned.
/// Rows written ahead of the cursor while scanning are picked up.
pub struct MemoryScanner {
	lease: Lease,
	store: Arc<TableStore>,
	cursor: Option<CellKey>,
	stop: Option<Vec<u8>>,
	max_versions: u32,
}

impl MemoryScanner {
	pub(crate) fn new(lease: Lease, store: Arc<TableStore>, scan: Scan) -> Self {
		let start = scan.start.as_deref().unwrap_or_default();
		Self {
			lease,
			store,
			cursor: Some(CellKey::row_start(start)),
			stop: scan.stop,
			max_versions: scan.max_versions,
		}
	}

	fn past_stop(&self, row: &[u8]) -> bool {
		self.stop.as_deref().is_some_and(|stop| row >= stop)
	}
}

impl Iterator for MemoryScanner {
	type Item = Result<RowResult>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let from = self.cursor.take()?;
			if let Err(err) = self.lease.connection().ensure_open() {
				return Some(Err(err));
			}

			let row = self.store.first_row_from(&from)?;
			if self.past_stop(&row) {
				return None;
			}

			self.cursor = Some(CellKey::after_row(&row));
			let cells = self.store.read_row(&row, self.max_versions, |_, _| true);
			// the row may have been deleted since it was located
			if !cells.is_empty() {
				return Some(Ok(RowResult::new(row, cells)));
			}
		}
	}
}

impl FusedIterator for MemoryScanner {}
