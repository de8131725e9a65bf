// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{
	Result,
	model::{
		namespace::{Namespace, NamespaceDescriptor},
		table::{TableDescriptor, TableName},
	},
};

pub trait Admin {
	/// Fails with `StoreError::NamespaceExists` on a duplicate.
	fn create_namespace(&self, descriptor: &NamespaceDescriptor) -> Result<()>;

	fn namespace_exists(&self, namespace: &Namespace) -> Result<bool>;

	/// `false` for a table in a namespace that does not exist.
	fn table_exists(&self, name: &TableName) -> Result<bool>;

	/// New tables start enabled.
	fn create_table(&self, descriptor: &TableDescriptor) -> Result<()>;

	fn is_table_enabled(&self, name: &TableName) -> Result<bool>;

	fn disable_table(&self, name: &TableName) -> Result<()>;

	/// Only a disabled table can be deleted.
	fn delete_table(&self, name: &TableName) -> Result<()>;
}
