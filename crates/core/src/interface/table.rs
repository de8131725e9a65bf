// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{
	Result,
	model::{
		cell::RowResult,
		request::{Delete, Get, Put, Scan},
		table::TableName,
	},
};

pub trait Table {
	/// Lazy, forward-only row iterator. Holds its own lease on the table, so
	/// it stays usable after the handle that opened it is dropped.
	type Scanner: Iterator<Item = Result<RowResult>>;

	fn name(&self) -> &TableName;

	fn put(&self, put: Put) -> Result<()>;

	fn get(&self, get: Get) -> Result<RowResult>;

	fn delete(&self, delete: Delete) -> Result<()>;

	fn scan(&self, scan: Scan) -> Result<Self::Scanner>;
}
