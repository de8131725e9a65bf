// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::io::Write;

use strata_access::DataAccessor;
use strata_catalog::SchemaManager;
use strata_core::{Cell, Result, RowResult, interface::Connection};

pub fn create_schema<C: Connection>(schema: &SchemaManager<C>) -> Result<()> {
	schema.create_namespace("bi")?;
	schema.create_table(Some("bi"), "student", ["info", "score"])?;
	Ok(())
}

pub fn drop_schema<C: Connection>(schema: &SchemaManager<C>) -> Result<()> {
	schema.delete_table(Some("bi"), "student")?;
	Ok(())
}

/// Writes, scans, deletes and reads back a student; then tries the same on
/// `ai:teacher`, which nobody created.
pub fn data<C: Connection>(data: &DataAccessor<C>, out: &mut impl Write) -> Result<()> {
	data.put(Some("bi"), "student", "1001", "info", "name", "louis")?;
	write_rows(out, data.scan(Some("bi"), "student", "1001", "1003")?)?;
	data.delete(Some("bi"), "student", "1001", "info", "name", false)?;
	write_cells(out, &data.get(Some("bi"), "student", "1001", "info", "name")?)?;

	data.put(Some("ai"), "teacher", "1002", "score", "PYTHON", "eagle")?;
	write_rows(out, data.scan(Some("ai"), "teacher", "1002", "1004")?)?;
	data.delete(Some("ai"), "teacher", "1002", "score", "JAVA", true)?;
	write_cells(out, &data.get(Some("ai"), "teacher", "1002", "score", "JAVA")?)?;
	Ok(())
}

/// One line per cell, blank line after each row.
fn write_rows(out: &mut impl Write, rows: impl Iterator<Item = Result<RowResult>>) -> Result<()> {
	for row in rows {
		write_cells(out, &row?.cells)?;
		writeln!(out)?;
	}
	Ok(())
}

fn write_cells(out: &mut impl Write, cells: &[Cell]) -> Result<()> {
	for cell in cells {
		writeln!(out, "{cell}")?;
	}
	Ok(())
}

#[cfg(test)]
pub mod tests {
	use strata_catalog::SchemaManager;
	use strata_store_memory::test_utils::create_test_connection;

	use super::*;

	#[test]
	fn test_full_walkthrough() {
		let connection = create_test_connection();
		let accessor = DataAccessor::new(SchemaManager::new(connection.clone()));
		let mut out = Vec::new();

		create_schema(accessor.schema()).unwrap();
		data(&accessor, &mut out).unwrap();
		drop_schema(accessor.schema()).unwrap();

		assert_eq!(String::from_utf8(out).unwrap(), "row: 1001\tfamily:info\tqualifier:name\tvalue:louis\n\n");
		assert!(!accessor.schema().table_exists(Some("bi"), "student").unwrap());
		assert_eq!(connection.open_handles(), 0);
	}

	#[test]
	fn test_data_without_schema() {
		let accessor = DataAccessor::new(SchemaManager::new(create_test_connection()));
		let mut out = Vec::new();

		data(&accessor, &mut out).unwrap();
		assert!(out.is_empty());
	}

	#[test]
	fn test_schema_flow_is_repeatable() {
		let schema = SchemaManager::new(create_test_connection());
		create_schema(&schema).unwrap();
		create_schema(&schema).unwrap();
		drop_schema(&schema).unwrap();
		drop_schema(&schema).unwrap();
	}
}
