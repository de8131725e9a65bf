// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_catalog::resolve_table_name;
use strata_core::{Result, interface::Connection};
use tracing::{instrument, warn};

use crate::DataAccessor;

impl<C: Connection> DataAccessor<C> {
	/// Handle on the table, or `None` when it does not exist. Drop the
	/// handle to release it.
	#[instrument(name = "access::resolve_table", level = "trace", skip(self))]
	pub fn resolve_table(&self, namespace: Option<&str>, table: &str) -> Result<Option<C::Table>> {
		let Some(name) = resolve_table_name(namespace, table) else {
			warn!("table name must not be empty");
			return Ok(None);
		};

		if !self.schema.table_exists(Some(name.namespace.as_str()), &name.qualifier)? {
			warn!(table = %name, "table not found");
			return Ok(None);
		}

		self.connection().table(&name).map(Some)
	}
}
