// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{
	Result,
	interface::{Admin, Table},
	model::table::TableName,
};

pub trait Connection: Clone + Send + Sync + 'static {
	type Admin: Admin;
	type Table: Table;

	fn admin(&self) -> Result<Self::Admin>;

	/// Handle on a table. Does not check that the table exists; operations
	/// through the handle report that instead.
	fn table(&self, name: &TableName) -> Result<Self::Table>;

	/// Shuts the connection down for every clone. Idempotent.
	fn close(&self) -> Result<()>;

	fn is_closed(&self) -> bool;
}
