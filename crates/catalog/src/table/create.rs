// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::{
	ColumnFamilyDescriptor, Error, Result, StoreError, TableDescriptor,
	interface::{Admin, Connection},
};
use tracing::{info, instrument, warn};

use crate::{CreateTableOutcome, SchemaManager, table::resolve_table_name};

impl<C: Connection> SchemaManager<C> {
	/// Creates `table` with one column family per entry of `families`.
	///
	/// An existing table is left untouched and reported as
	/// [`CreateTableOutcome::AlreadyExists`]; no create request is sent.
	#[instrument(name = "catalog::table::create", level = "debug", skip(self, families))]
	pub fn create_table<I, F>(&self, namespace: Option<&str>, table: &str, families: I) -> Result<CreateTableOutcome>
	where
		I: IntoIterator<Item = F>,
		F: Into<ColumnFamilyDescriptor>,
	{
		let Some(name) = resolve_table_name(namespace, table) else {
			warn!("table name must not be empty");
			return Ok(CreateTableOutcome::InvalidName);
		};

		let admin = self.connection.admin()?;
		if admin.table_exists(&name)? {
			warn!(table = %name, "table already exists");
			return Ok(CreateTableOutcome::AlreadyExists);
		}

		let descriptor = families
			.into_iter()
			.fold(TableDescriptor::builder(name), |builder, family| builder.column_family(family))
			.build();
		if descriptor.families.is_empty() {
			warn!(table = %descriptor.name, "creating table without column families");
		}

		match admin.create_table(&descriptor) {
			Ok(()) => {
				info!(table = %descriptor.name, families = descriptor.families.len(), "table created");
				Ok(CreateTableOutcome::Created)
			}
			// lost a race against another creator
			Err(Error::Store(StoreError::TableExists(_))) => {
				warn!(table = %descriptor.name, "table already exists");
				Ok(CreateTableOutcome::AlreadyExists)
			}
			Err(err) => Err(err),
		}
	}
}

#[cfg(test)]
pub mod tests {
	use strata_core::{
		ColumnFamilyDescriptor, Put, Scan, StoreError, TableName,
		interface::{Connection, Table},
	};
	use strata_store_memory::test_utils::create_test_connection;

	use crate::{CreateTableOutcome, SchemaManager};

	#[test]
	fn test_create_table() {
		let schema = SchemaManager::new(create_test_connection());
		schema.create_namespace("bi").unwrap();

		assert_eq!(schema.create_table(Some("bi"), "student", ["info", "score"]).unwrap(), CreateTableOutcome::Created);
		assert!(schema.table_exists(Some("bi"), "student").unwrap());
	}

	#[test]
	fn test_create_existing_is_noop() {
		let connection = create_test_connection();
		let schema = SchemaManager::new(connection.clone());
		schema.create_namespace("bi").unwrap();
		schema.create_table(Some("bi"), "student", ["info"]).unwrap();

		let table = connection.table(&TableName::new("bi", "student")).unwrap();
		table.put(Put::new("1001").add_column("info", "name", "louis")).unwrap();

		assert_eq!(
			schema.create_table(Some("bi"), "student", ["other"]).unwrap(),
			CreateTableOutcome::AlreadyExists
		);
		assert_eq!(table.scan(Scan::new()).unwrap().count(), 1);
	}

	#[test]
	fn test_empty_name() {
		let connection = create_test_connection();
		connection.close().unwrap();

		let schema = SchemaManager::new(connection);
		assert_eq!(schema.create_table(Some("bi"), "", ["info"]).unwrap(), CreateTableOutcome::InvalidName);
	}

	#[test]
	fn test_default_namespace_equivalence() {
		let schema = SchemaManager::new(create_test_connection());

		assert_eq!(schema.create_table(None, "t", ["f"]).unwrap(), CreateTableOutcome::Created);
		assert_eq!(schema.create_table(Some("default"), "t", ["f"]).unwrap(), CreateTableOutcome::AlreadyExists);
		assert_eq!(schema.create_table(Some(""), "t", ["f"]).unwrap(), CreateTableOutcome::AlreadyExists);
	}

	#[test]
	fn test_family_descriptors() {
		let connection = create_test_connection();
		let schema = SchemaManager::new(connection.clone());
		schema.create_namespace("bi").unwrap();
		schema
			.create_table(Some("bi"), "student", [ColumnFamilyDescriptor::new("score").with_max_versions(3)])
			.unwrap();

		let table = connection.table(&TableName::new("bi", "student")).unwrap();
		table.put(Put::new("1001").add_column("score", "java", "60")).unwrap();
		table.put(Put::new("1001").add_column("score", "java", "70")).unwrap();
		let row = table.scan(Scan::new().read_versions(3)).unwrap().next().unwrap().unwrap();
		assert_eq!(row.cells.len(), 2);
	}

	#[test]
	fn test_no_families() {
		let schema = SchemaManager::new(create_test_connection());
		assert_eq!(
			schema.create_table(None, "bare", Vec::<String>::new()).unwrap(),
			CreateTableOutcome::Created
		);
	}

	#[test]
	fn test_missing_namespace_propagates() {
		let schema = SchemaManager::new(create_test_connection());
		let err = schema.create_table(Some("nowhere"), "student", ["info"]).unwrap_err();
		assert_eq!(err.store(), Some(&StoreError::NamespaceNotFound("nowhere".to_string())));
	}

	#[test]
	fn test_admin_handle_released() {
		let connection = create_test_connection();
		let schema = SchemaManager::new(connection.clone());

		schema.create_table(None, "t", ["f"]).unwrap();
		schema.create_table(None, "t", ["f"]).unwrap();
		let _ = schema.create_table(Some("nowhere"), "t", ["f"]);
		assert_eq!(connection.open_handles(), 0);
	}
}
