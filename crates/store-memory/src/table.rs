// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::{
	Arc,
	atomic::{AtomicBool, Ordering},
};

use crossbeam_skiplist::SkipMap;
use parking_lot::Mutex;
use strata_core::{
	Cell, ColumnFamilyDescriptor, Delete, DeleteScope, Get, Put, Result, RowResult, Scan, StoreError,
	TableDescriptor, TableName, interface::Table,
};
use tracing::instrument;

use crate::{connection::MemoryConnection, key::CellKey, lease::Lease, scan::MemoryScanner};

/// Cells and state of one table.
pub(crate) struct TableStore {
	descriptor: TableDescriptor,
	enabled: AtomicBool,
	cells: SkipMap<CellKey, Vec<u8>>,
	// serializes writers so version pruning sees a stable column
	write: Mutex<()>,
}

impl TableStore {
	pub(crate) fn new(descriptor: TableDescriptor) -> Self {
		Self {
			descriptor,
			enabled: AtomicBool::new(true),
			cells: SkipMap::new(),
			write: Mutex::new(()),
		}
	}

	pub(crate) fn is_enabled(&self) -> bool {
		self.enabled.load(Ordering::Acquire)
	}

	/// Returns whether the table was enabled before the call.
	pub(crate) fn disable(&self) -> bool {
		self.enabled.swap(false, Ordering::AcqRel)
	}

	fn family(&self, family: &[u8]) -> Result<&ColumnFamilyDescriptor> {
		self.descriptor.family(family).ok_or_else(|| {
			StoreError::NoSuchColumnFamily {
				table: self.descriptor.name.clone(),
				family: String::from_utf8_lossy(family).into_owned(),
			}
			.into()
		})
	}

	/// Draws the version under the write lock, so versions of a column are
	/// stored in the order the writes were applied.
	fn put(&self, put: Put, next_version: impl FnOnce() -> u64) -> Result<()> {
		let families = put
			.columns
			.iter()
			.map(|(family, _, _)| self.family(family).map(|f| f.max_versions))
			.collect::<Result<Vec<_>>>()?;

		let _guard = self.write.lock();
		let version = next_version();
		for ((family, qualifier, value), max_versions) in put.columns.into_iter().zip(families) {
			let key = CellKey::new(put.row.clone(), family, qualifier, version);
			self.prune(&key, max_versions);
			self.cells.insert(key, value);
		}
		Ok(())
	}

	/// Keeps room for one more version of the column under `max_versions`.
	fn prune(&self, key: &CellKey, max_versions: u32) {
		let keep = (max_versions as usize).saturating_sub(1);
		let start = CellKey::column_start(&key.row, &key.family, &key.qualifier);
		let end = CellKey::column_end(&key.row, &key.family, &key.qualifier);
		for entry in self.cells.range(start..=end).skip(keep) {
			entry.remove();
		}
	}

	fn delete(&self, delete: Delete) -> Result<()> {
		for (family, _, _) in &delete.columns {
			self.family(family)?;
		}

		let _guard = self.write.lock();
		if delete.columns.is_empty() {
			let start = CellKey::row_start(&delete.row);
			for entry in self.cells.range(start..).take_while(|entry| entry.key().row == delete.row) {
				entry.remove();
			}
			return Ok(());
		}

		for (family, qualifier, scope) in delete.columns {
			let start = CellKey::column_start(&delete.row, &family, &qualifier);
			let end = CellKey::column_end(&delete.row, &family, &qualifier);
			let mut versions = self.cells.range(start..=end);
			match scope {
				DeleteScope::LatestVersion => {
					if let Some(entry) = versions.next() {
						entry.remove();
					}
				}
				DeleteScope::AllVersions => {
					for entry in versions {
						entry.remove();
					}
				}
			}
		}
		Ok(())
	}

	fn get(&self, get: &Get) -> Result<RowResult> {
		for selector in &get.columns {
			self.family(&selector.family)?;
		}
		let cells = self.read_row(&get.row, get.max_versions, |family, qualifier| get.selects(family, qualifier));
		Ok(RowResult::new(get.row.clone(), cells))
	}

	/// Cells of `row` in store order, at most `max_versions` per column.
	pub(crate) fn read_row<F>(&self, row: &[u8], max_versions: u32, select: F) -> Vec<Cell>
	where
		F: Fn(&[u8], &[u8]) -> bool,
	{
		let mut result = Vec::new();
		let mut previous: Option<CellKey> = None;
		let mut seen = 0u32;

		for entry in self.cells.range(CellKey::row_start(row)..).take_while(|entry| entry.key().row == row) {
			let key = entry.key();
			if !select(&key.family, &key.qualifier) {
				continue;
			}

			match &previous {
				Some(prev) if prev.same_column(key) => seen += 1,
				_ => {
					previous = Some(key.clone());
					seen = 1;
				}
			}
			if seen > max_versions {
				continue;
			}

			result.push(Cell {
				row: key.row.clone(),
				family: key.family.clone(),
				qualifier: key.qualifier.clone(),
				version: key.version(),
				value: entry.value().clone(),
			});
		}
		result
	}

	/// First row at or after `from` that holds any cell.
	pub(crate) fn first_row_from(&self, from: &CellKey) -> Option<Vec<u8>> {
		self.cells.lower_bound(std::ops::Bound::Included(from)).map(|entry| entry.key().row.clone())
	}
}

/// Per-operation handle on a table of a [`MemoryConnection`].
pub struct MemoryTable {
	lease: Lease,
	name: TableName,
}

impl MemoryTable {
	pub(crate) fn new(lease: Lease, name: TableName) -> Self {
		Self {
			lease,
			name,
		}
	}

	fn connection(&self) -> &MemoryConnection {
		self.lease.connection()
	}

	fn store(&self) -> Result<Arc<TableStore>> {
		let connection = self.connection();
		connection.ensure_open()?;

		let store = connection.find_table(&self.name).ok_or_else(|| StoreError::TableNotFound(self.name.clone()))?;
		if !store.is_enabled() {
			return Err(StoreError::TableNotEnabled(self.name.clone()).into());
		}
		Ok(store)
	}
}

impl Table for MemoryTable {
	type Scanner = MemoryScanner;

	fn name(&self) -> &TableName {
		&self.name
	}

	#[instrument(name = "store::memory::put", level = "trace", skip(self, put), fields(table = %self.name))]
	fn put(&self, put: Put) -> Result<()> {
		let store = self.store()?;
		store.put(put, || self.connection().next_version())
	}

	#[instrument(name = "store::memory::get", level = "trace", skip(self, get), fields(table = %self.name))]
	fn get(&self, get: Get) -> Result<RowResult> {
		self.store()?.get(&get)
	}

	#[instrument(name = "store::memory::delete", level = "trace", skip(self, delete), fields(table = %self.name))]
	fn delete(&self, delete: Delete) -> Result<()> {
		self.store()?.delete(delete)
	}

	#[instrument(name = "store::memory::scan", level = "trace", skip(self, scan), fields(table = %self.name))]
	fn scan(&self, scan: Scan) -> Result<MemoryScanner> {
		let store = self.store()?;
		Ok(MemoryScanner::new(Lease::acquire(self.connection()), store, scan))
	}
}
