// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

/// A value at one (row, family, qualifier, version) coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
	pub row: Vec<u8>,
	pub family: Vec<u8>,
	pub qualifier: Vec<u8>,
	pub version: u64,
	pub value: Vec<u8>,
}

impl Display for Cell {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"row: {}\tfamily:{}\tqualifier:{}\tvalue:{}",
			String::from_utf8_lossy(&self.row),
			String::from_utf8_lossy(&self.family),
			String::from_utf8_lossy(&self.qualifier),
			String::from_utf8_lossy(&self.value)
		)
	}
}

/// All cells of one row returned by a get or a scan, in store order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowResult {
	pub row: Vec<u8>,
	pub cells: Vec<Cell>,
}

impl RowResult {
	pub fn new(row: Vec<u8>, cells: Vec<Cell>) -> Self {
		Self {
			row,
			cells,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}
}
