// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod create;
mod delete;
mod exists;

use strata_core::{Namespace, TableName};

/// Qualified name of `table`, with the namespace defaulted. `None` for an
/// empty table name.
pub fn resolve_table_name(namespace: Option<&str>, table: &str) -> Option<TableName> {
	if table.is_empty() {
		return None;
	}
	Some(TableName::new(Namespace::resolve(namespace), table))
}
