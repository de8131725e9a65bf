// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::{
	Delete, DeleteScope, Result,
	interface::{Connection, Table},
};
use tracing::{debug, instrument};

use crate::{DataAccessor, WriteOutcome};

impl<C: Connection> DataAccessor<C> {
	/// Removes the newest version of (row, family, column), or every version
	/// when `all_versions` is set. Which older version becomes visible is up
	/// to the store's retention.
	#[instrument(name = "access::delete", level = "debug", skip(self, row, family, column))]
	pub fn delete(
		&self,
		namespace: Option<&str>,
		table: &str,
		row: impl Into<Vec<u8>>,
		family: impl Into<Vec<u8>>,
		column: impl Into<Vec<u8>>,
		all_versions: bool,
	) -> Result<WriteOutcome> {
		let Some(handle) = self.resolve_table(namespace, table)? else {
			return Ok(WriteOutcome::TableNotFound);
		};

		let scope = DeleteScope::all_versions(all_versions);
		handle.delete(Delete::new(row).add_column(family, column, scope))?;
		debug!(table = %handle.name(), ?scope, "cell deleted");
		Ok(WriteOutcome::Applied)
	}
}

#[cfg(test)]
pub mod tests {
	use strata_catalog::SchemaManager;
	use strata_core::ColumnFamilyDescriptor;
	use strata_store_memory::{MemoryConnection, test_utils::create_test_connection};

	use crate::{DataAccessor, WriteOutcome};

	fn setup() -> DataAccessor<MemoryConnection> {
		let data = DataAccessor::new(SchemaManager::new(create_test_connection()));
		data.schema().create_namespace("bi").unwrap();
		data.schema()
			.create_table(
				Some("bi"),
				"student",
				[ColumnFamilyDescriptor::new("info"), ColumnFamilyDescriptor::new("score").with_max_versions(5)],
			)
			.unwrap();
		data
	}

	fn values(data: &DataAccessor<MemoryConnection>, family: &str, column: &str) -> Vec<String> {
		data.get(Some("bi"), "student", "1001", family, column)
			.unwrap()
			.into_iter()
			.map(|cell| String::from_utf8(cell.value).unwrap())
			.collect()
	}

	#[test]
	fn test_delete_latest_single_version() {
		let data = setup();
		data.put(Some("bi"), "student", "1001", "info", "name", "louis").unwrap();

		assert_eq!(data.delete(Some("bi"), "student", "1001", "info", "name", false).unwrap(), WriteOutcome::Applied);
		assert!(values(&data, "info", "name").is_empty());
	}

	#[test]
	fn test_delete_latest_reveals_prior() {
		let data = setup();
		data.put(Some("bi"), "student", "1001", "score", "java", "60").unwrap();
		data.put(Some("bi"), "student", "1001", "score", "java", "70").unwrap();
		data.put(Some("bi"), "student", "1001", "score", "java", "80").unwrap();

		data.delete(Some("bi"), "student", "1001", "score", "java", false).unwrap();
		assert_eq!(values(&data, "score", "java"), vec!["70", "60"]);
	}

	#[test]
	fn test_delete_all_versions() {
		let data = setup();
		data.put(Some("bi"), "student", "1001", "score", "java", "60").unwrap();
		data.put(Some("bi"), "student", "1001", "score", "java", "70").unwrap();

		data.delete(Some("bi"), "student", "1001", "score", "java", true).unwrap();
		assert!(values(&data, "score", "java").is_empty());
	}

	#[test]
	fn test_delete_leaves_other_columns() {
		let data = setup();
		data.put(Some("bi"), "student", "1001", "info", "name", "louis").unwrap();
		data.put(Some("bi"), "student", "1001", "info", "age", "20").unwrap();

		data.delete(Some("bi"), "student", "1001", "info", "name", true).unwrap();
		assert_eq!(values(&data, "info", "age"), vec!["20"]);
	}

	#[test]
	fn test_delete_absent_cell() {
		let data = setup();
		assert_eq!(data.delete(Some("bi"), "student", "9999", "info", "name", true).unwrap(), WriteOutcome::Applied);
	}

	#[test]
	fn test_delete_missing_table() {
		let data = setup();
		assert_eq!(
			data.delete(Some("ai"), "teacher", "1002", "score", "JAVA", true).unwrap(),
			WriteOutcome::TableNotFound
		);
	}
}
