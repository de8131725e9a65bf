// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::{
	ClusterConfig, Namespace, NamespaceDescriptor, TableDescriptor,
	interface::{Admin, Connection},
};

use crate::MemoryConnection;

pub fn create_test_connection() -> MemoryConnection {
	MemoryConnection::open(&ClusterConfig::default()).unwrap()
}

/// Creates the table, and its namespace when missing.
pub fn create_test_table(connection: &MemoryConnection, descriptor: TableDescriptor) {
	let admin = connection.admin().unwrap();
	let namespace: &Namespace = &descriptor.name.namespace;
	if !admin.namespace_exists(namespace).unwrap() {
		admin.create_namespace(&NamespaceDescriptor::new(namespace.as_str())).unwrap();
	}
	admin.create_table(&descriptor).unwrap();
}
