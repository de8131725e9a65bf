// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::{
	Put, Result,
	interface::{Connection, Table},
};
use tracing::{debug, instrument};

use crate::{DataAccessor, WriteOutcome};

impl<C: Connection> DataAccessor<C> {
	/// Writes one cell, replacing whatever is at (row, family, column) as the
	/// newest version. Writing to a family the table lacks is a store error.
	#[instrument(name = "access::put", level = "debug", skip(self, row, family, column, value))]
	pub fn put(
		&self,
		namespace: Option<&str>,
		table: &str,
		row: impl Into<Vec<u8>>,
		family: impl Into<Vec<u8>>,
		column: impl Into<Vec<u8>>,
		value: impl Into<Vec<u8>>,
	) -> Result<WriteOutcome> {
		let Some(handle) = self.resolve_table(namespace, table)? else {
			return Ok(WriteOutcome::TableNotFound);
		};

		handle.put(Put::new(row).add_column(family, column, value))?;
		debug!(table = %handle.name(), "cell written");
		Ok(WriteOutcome::Applied)
	}
}

#[cfg(test)]
pub mod tests {
	use strata_catalog::SchemaManager;
	use strata_core::{StoreError, TableName};
	use strata_store_memory::test_utils::create_test_connection;

	use crate::{DataAccessor, WriteOutcome};

	fn setup() -> DataAccessor<strata_store_memory::MemoryConnection> {
		let data = DataAccessor::new(SchemaManager::new(create_test_connection()));
		data.schema().create_namespace("bi").unwrap();
		data.schema().create_table(Some("bi"), "student", ["info", "score"]).unwrap();
		data
	}

	#[test]
	fn test_put() {
		let data = setup();
		assert_eq!(data.put(Some("bi"), "student", "1001", "info", "name", "louis").unwrap(), WriteOutcome::Applied);

		let cells = data.get(Some("bi"), "student", "1001", "info", "name").unwrap();
		assert_eq!(cells.len(), 1);
		assert_eq!(cells[0].value, b"louis");
	}

	#[test]
	fn test_put_overwrites() {
		let data = setup();
		data.put(Some("bi"), "student", "1001", "info", "name", "louis").unwrap();
		data.put(Some("bi"), "student", "1001", "info", "name", "eagle").unwrap();

		let cells = data.get(Some("bi"), "student", "1001", "info", "name").unwrap();
		assert_eq!(cells.len(), 1);
		assert_eq!(cells[0].value, b"eagle");
	}

	#[test]
	fn test_put_missing_table() {
		let data = setup();
		assert_eq!(
			data.put(Some("ai"), "teacher", "1002", "score", "PYTHON", "eagle").unwrap(),
			WriteOutcome::TableNotFound
		);
	}

	#[test]
	fn test_put_unknown_family() {
		let data = setup();
		let err = data.put(Some("bi"), "student", "1001", "extra", "name", "louis").unwrap_err();
		assert_eq!(
			err.store(),
			Some(&StoreError::NoSuchColumnFamily {
				table: TableName::new("bi", "student"),
				family: "extra".to_string(),
			})
		);
	}

	#[test]
	fn test_put_bytes() {
		let data = setup();
		data.put(Some("bi"), "student", vec![0u8, 1, 2], "info", "blob", vec![0xffu8, 0x00]).unwrap();

		let cells = data.get(Some("bi"), "student", vec![0u8, 1, 2], "info", "blob").unwrap();
		assert_eq!(cells[0].value, vec![0xff, 0x00]);
	}
}
