// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::{
	Result,
	interface::{Admin, Connection},
};
use tracing::{instrument, warn};

use crate::{SchemaManager, table::resolve_table_name};

impl<C: Connection> SchemaManager<C> {
	/// `false` for an empty table name or a namespace that does not exist.
	#[instrument(name = "catalog::table::exists", level = "trace", skip(self))]
	pub fn table_exists(&self, namespace: Option<&str>, table: &str) -> Result<bool> {
		let Some(name) = resolve_table_name(namespace, table) else {
			warn!("table name must not be empty");
			return Ok(false);
		};

		self.connection.admin()?.table_exists(&name)
	}
}

#[cfg(test)]
pub mod tests {
	use strata_core::{StoreError, interface::Connection};
	use strata_store_memory::test_utils::create_test_connection;

	use crate::SchemaManager;

	#[test]
	fn test_missing_table() {
		let schema = SchemaManager::new(create_test_connection());
		assert!(!schema.table_exists(Some("bi"), "student").unwrap());
		assert!(!schema.table_exists(None, "student").unwrap());
	}

	#[test]
	fn test_existing_table() {
		let schema = SchemaManager::new(create_test_connection());
		schema.create_namespace("bi").unwrap();
		schema.create_table(Some("bi"), "student", ["info"]).unwrap();

		assert!(schema.table_exists(Some("bi"), "student").unwrap());
		assert!(!schema.table_exists(None, "student").unwrap());
	}

	#[test]
	fn test_namespace_defaulting() {
		let schema = SchemaManager::new(create_test_connection());
		schema.create_table(None, "t", ["f"]).unwrap();

		assert!(schema.table_exists(None, "t").unwrap());
		assert!(schema.table_exists(Some(""), "t").unwrap());
		assert!(schema.table_exists(Some("default"), "t").unwrap());
	}

	#[test]
	fn test_empty_name_does_not_reach_store() {
		let connection = create_test_connection();
		connection.close().unwrap();

		let schema = SchemaManager::new(connection);
		assert!(!schema.table_exists(Some("bi"), "").unwrap());

		let err = schema.table_exists(Some("bi"), "student").unwrap_err();
		assert_eq!(err.store(), Some(&StoreError::ConnectionClosed));
	}
}
