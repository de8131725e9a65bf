// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::btree_map::Entry, sync::Arc};

use strata_core::{
	Namespace, NamespaceDescriptor, Result, StoreError, TableDescriptor, TableName, interface::Admin,
};
use tracing::{debug, instrument};

use crate::{connection::MemoryConnection, lease::Lease, table::TableStore};

pub struct MemoryAdmin {
	lease: Lease,
}

impl MemoryAdmin {
	pub(crate) fn new(lease: Lease) -> Self {
		Self {
			lease,
		}
	}

	fn connection(&self) -> Result<&MemoryConnection> {
		let connection = self.lease.connection();
		connection.ensure_open()?;
		Ok(connection)
	}

	fn existing(&self, name: &TableName) -> Result<Arc<TableStore>> {
		self.connection()?.find_table(name).ok_or_else(|| StoreError::TableNotFound(name.clone()).into())
	}
}

impl Admin for MemoryAdmin {
	#[instrument(name = "store::memory::create_namespace", level = "trace", skip(self))]
	fn create_namespace(&self, descriptor: &NamespaceDescriptor) -> Result<()> {
		let connection = self.connection()?;
		let namespace = Namespace::from(descriptor.name.as_str());
		if !connection.namespaces.write().insert(namespace) {
			return Err(StoreError::NamespaceExists(descriptor.name.clone()).into());
		}
		debug!(namespace = %descriptor.name, "namespace stored");
		Ok(())
	}

	fn namespace_exists(&self, namespace: &Namespace) -> Result<bool> {
		Ok(self.connection()?.namespaces.read().contains(namespace))
	}

	fn table_exists(&self, name: &TableName) -> Result<bool> {
		Ok(self.connection()?.tables.read().contains_key(name))
	}

	#[instrument(name = "store::memory::create_table", level = "trace", skip(self, descriptor), fields(table = %descriptor.name))]
	fn create_table(&self, descriptor: &TableDescriptor) -> Result<()> {
		let connection = self.connection()?;
		if !connection.namespaces.read().contains(&descriptor.name.namespace) {
			return Err(StoreError::NamespaceNotFound(descriptor.name.namespace.to_string()).into());
		}

		match connection.tables.write().entry(descriptor.name.clone()) {
			Entry::Occupied(_) => Err(StoreError::TableExists(descriptor.name.clone()).into()),
			Entry::Vacant(slot) => {
				slot.insert(Arc::new(TableStore::new(descriptor.clone())));
				debug!(families = descriptor.families.len(), "table stored");
				Ok(())
			}
		}
	}

	fn is_table_enabled(&self, name: &TableName) -> Result<bool> {
		Ok(self.existing(name)?.is_enabled())
	}

	#[instrument(name = "store::memory::disable_table", level = "trace", skip(self))]
	fn disable_table(&self, name: &TableName) -> Result<()> {
		if !self.existing(name)?.disable() {
			return Err(StoreError::TableNotEnabled(name.clone()).into());
		}
		Ok(())
	}

	#[instrument(name = "store::memory::delete_table", level = "trace", skip(self))]
	fn delete_table(&self, name: &TableName) -> Result<()> {
		let connection = self.connection()?;
		let mut tables = connection.tables.write();
		let enabled = match tables.get(name) {
			Some(table) => table.is_enabled(),
			None => return Err(StoreError::TableNotFound(name.clone()).into()),
		};
		if enabled {
			return Err(StoreError::TableNotDisabled(name.clone()).into());
		}
		tables.remove(name);
		Ok(())
	}
}
