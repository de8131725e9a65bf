// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::{
	Result,
	interface::{Admin, Connection},
};
use tracing::{debug, info, instrument, warn};

use crate::{DeleteTableOutcome, SchemaManager, table::resolve_table_name};

impl<C: Connection> SchemaManager<C> {
	/// Disables, then deletes `table`. A missing table is a no-op.
	///
	/// The two steps are not atomic: if the delete fails the table stays
	/// disabled. Calling this again finishes the job, since an already
	/// disabled table is not disabled twice.
	#[instrument(name = "catalog::table::delete", level = "debug", skip(self))]
	pub fn delete_table(&self, namespace: Option<&str>, table: &str) -> Result<DeleteTableOutcome> {
		let Some(name) = resolve_table_name(namespace, table) else {
			warn!("table name must not be empty");
			return Ok(DeleteTableOutcome::InvalidName);
		};

		let admin = self.connection.admin()?;
		if !admin.table_exists(&name)? {
			warn!(table = %name, "table does not exist");
			return Ok(DeleteTableOutcome::NotFound);
		}

		if admin.is_table_enabled(&name)? {
			admin.disable_table(&name)?;
			debug!(table = %name, "table disabled");
		}
		admin.delete_table(&name)?;

		info!(table = %name, "table deleted");
		Ok(DeleteTableOutcome::Deleted)
	}
}
