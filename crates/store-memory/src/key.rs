// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Reverse;

/// Sort key of a stored cell. Field order defines the store's cell order:
/// row, family, qualifier ascending, then newest version first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct CellKey {
	pub(crate) row: Vec<u8>,
	pub(crate) family: Vec<u8>,
	pub(crate) qualifier: Vec<u8>,
	pub(crate) version: Reverse<u64>,
}

impl CellKey {
	pub(crate) fn new(row: Vec<u8>, family: Vec<u8>, qualifier: Vec<u8>, version: u64) -> Self {
		Self {
			row,
			family,
			qualifier,
			version: Reverse(version),
		}
	}

	/// Smallest key a row can hold.
	pub(crate) fn row_start(row: &[u8]) -> Self {
		Self::new(row.to_vec(), Vec::new(), Vec::new(), u64::MAX)
	}

	/// Smallest key of the first row sorting after `row`.
	pub(crate) fn after_row(row: &[u8]) -> Self {
		let mut next = Vec::with_capacity(row.len() + 1);
		next.extend_from_slice(row);
		next.push(0);
		Self::row_start(&next)
	}

	/// Newest possible version of a column.
	pub(crate) fn column_start(row: &[u8], family: &[u8], qualifier: &[u8]) -> Self {
		Self::new(row.to_vec(), family.to_vec(), qualifier.to_vec(), u64::MAX)
	}

	/// Oldest possible version of a column.
	pub(crate) fn column_end(row: &[u8], family: &[u8], qualifier: &[u8]) -> Self {
		Self::new(row.to_vec(), family.to_vec(), qualifier.to_vec(), 0)
	}

	pub(crate) fn version(&self) -> u64 {
		self.version.0
	}

	pub(crate) fn same_column(&self, other: &CellKey) -> bool {
		self.row == other.row && self.family == other.family && self.qualifier == other.qualifier
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_newest_version_first() {
		let old = CellKey::new(b"r".to_vec(), b"f".to_vec(), b"q".to_vec(), 1);
		let new = CellKey::new(b"r".to_vec(), b"f".to_vec(), b"q".to_vec(), 2);
		assert!(new < old);
	}

	#[test]
	fn test_order_row_family_qualifier() {
		let a = CellKey::new(b"1001".to_vec(), b"info".to_vec(), b"name".to_vec(), 9);
		let b = CellKey::new(b"1001".to_vec(), b"score".to_vec(), b"java".to_vec(), 1);
		let c = CellKey::new(b"1002".to_vec(), b"info".to_vec(), b"age".to_vec(), 1);
		assert!(a < b);
		assert!(b < c);
	}

	#[test]
	fn test_column_bounds() {
		let cell = CellKey::new(b"r".to_vec(), b"f".to_vec(), b"q".to_vec(), 42);
		assert!(CellKey::column_start(b"r", b"f", b"q") <= cell);
		assert!(cell <= CellKey::column_end(b"r", b"f", b"q"));
		assert!(CellKey::row_start(b"r") < CellKey::column_start(b"r", b"f", b"q"));
	}

	#[test]
	fn test_after_row() {
		let last = CellKey::new(b"r".to_vec(), b"\xff".to_vec(), b"\xff".to_vec(), 0);
		assert!(last < CellKey::after_row(b"r"));
		assert!(CellKey::after_row(b"r") <= CellKey::row_start(b"r\x00"));
		assert!(CellKey::after_row(b"r") < CellKey::row_start(b"s"));
	}
}
