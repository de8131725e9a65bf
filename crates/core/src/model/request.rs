// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Request objects handed to a [`Table`](crate::interface::Table).

/// Read every retained version.
pub const ALL_VERSIONS: u32 = u32::MAX;

/// A family, or a single column inside it when `qualifier` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelector {
	pub family: Vec<u8>,
	pub qualifier: Option<Vec<u8>>,
}

impl ColumnSelector {
	pub fn matches(&self, family: &[u8], qualifier: &[u8]) -> bool {
		self.family == family && self.qualifier.as_deref().is_none_or(|q| q == qualifier)
	}
}

/// Writes one or more cells of a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Put {
	pub row: Vec<u8>,
	pub columns: Vec<(Vec<u8>, Vec<u8>, Vec<u8>)>,
}

impl Put {
	pub fn new(row: impl Into<Vec<u8>>) -> Self {
		Self {
			row: row.into(),
			columns: Vec::new(),
		}
	}

	pub fn add_column(
		mut self,
		family: impl Into<Vec<u8>>,
		qualifier: impl Into<Vec<u8>>,
		value: impl Into<Vec<u8>>,
	) -> Self {
		self.columns.push((family.into(), qualifier.into(), value.into()));
		self
	}
}

/// Reads one row. Without selectors every column of the row is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Get {
	pub row: Vec<u8>,
	pub columns: Vec<ColumnSelector>,
	pub max_versions: u32,
}

impl Get {
	pub fn new(row: impl Into<Vec<u8>>) -> Self {
		Self {
			row: row.into(),
			columns: Vec::new(),
			max_versions: 1,
		}
	}

	pub fn add_family(mut self, family: impl Into<Vec<u8>>) -> Self {
		self.columns.push(ColumnSelector {
			family: family.into(),
			qualifier: None,
		});
		self
	}

	pub fn add_column(mut self, family: impl Into<Vec<u8>>, qualifier: impl Into<Vec<u8>>) -> Self {
		self.columns.push(ColumnSelector {
			family: family.into(),
			qualifier: Some(qualifier.into()),
		});
		self
	}

	pub fn read_versions(mut self, max_versions: u32) -> Self {
		self.max_versions = max_versions.max(1);
		self
	}

	pub fn read_all_versions(self) -> Self {
		self.read_versions(ALL_VERSIONS)
	}

	pub fn selects(&self, family: &[u8], qualifier: &[u8]) -> bool {
		self.columns.is_empty() || self.columns.iter().any(|c| c.matches(family, qualifier))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteScope {
	/// Only the newest version of the column.
	LatestVersion,
	/// Every version ever written to the column.
	AllVersions,
}

impl DeleteScope {
	pub fn all_versions(all: bool) -> Self {
		if all {
			DeleteScope::AllVersions
		} else {
			DeleteScope::LatestVersion
		}
	}
}

/// Removes columns of one row. Without columns the whole row goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delete {
	pub row: Vec<u8>,
	pub columns: Vec<(Vec<u8>, Vec<u8>, DeleteScope)>,
}

impl Delete {
	pub fn new(row: impl Into<Vec<u8>>) -> Self {
		Self {
			row: row.into(),
			columns: Vec::new(),
		}
	}

	pub fn add_column(
		mut self,
		family: impl Into<Vec<u8>>,
		qualifier: impl Into<Vec<u8>>,
		scope: DeleteScope,
	) -> Self {
		self.columns.push((family.into(), qualifier.into(), scope));
		self
	}
}

/// Row range `[start, stop)`; an absent or empty bound is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan {
	pub start: Option<Vec<u8>>,
	pub stop: Option<Vec<u8>>,
	pub max_versions: u32,
}

impl Scan {
	pub fn new() -> Self {
		Self {
			start: None,
			stop: None,
			max_versions: 1,
		}
	}

	pub fn with_start_row(mut self, row: impl Into<Vec<u8>>) -> Self {
		self.start = Some(row.into()).filter(|row| !row.is_empty());
		self
	}

	/// An empty stop row scans to the end of the table.
	pub fn with_stop_row(mut self, row: impl Into<Vec<u8>>) -> Self {
		self.stop = Some(row.into()).filter(|row| !row.is_empty());
		self
	}

	pub fn read_versions(mut self, max_versions: u32) -> Self {
		self.max_versions = max_versions.max(1);
		self
	}

	pub fn contains(&self, row: &[u8]) -> bool {
		self.start.as_deref().is_none_or(|start| row >= start) && self.stop.as_deref().is_none_or(|stop| row < stop)
	}
}

impl Default for Scan {
	fn default() -> Self {
		Self::new()
	}
}
