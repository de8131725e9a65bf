// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use crate::model::namespace::Namespace;

/// Fully qualified table name. Renders as `namespace:qualifier`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableName {
	pub namespace: Namespace,
	pub qualifier: String,
}

impl TableName {
	pub fn new(namespace: impl Into<Namespace>, qualifier: impl Into<String>) -> Self {
		Self {
			namespace: namespace.into(),
			qualifier: qualifier.into(),
		}
	}
}

impl Display for TableName {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.namespace, self.qualifier)
	}
}

pub const DEFAULT_MAX_VERSIONS: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFamilyDescriptor {
	pub name: Vec<u8>,
	/// How many versions of a column the store retains. Never below 1.
	pub max_versions: u32,
}

impl ColumnFamilyDescriptor {
	pub fn new(name: impl Into<Vec<u8>>) -> Self {
		Self {
			name: name.into(),
			max_versions: DEFAULT_MAX_VERSIONS,
		}
	}

	pub fn with_max_versions(mut self, max_versions: u32) -> Self {
		self.max_versions = max_versions.max(1);
		self
	}
}

impl From<&str> for ColumnFamilyDescriptor {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

impl From<String> for ColumnFamilyDescriptor {
	fn from(name: String) -> Self {
		Self::new(name)
	}
}

impl From<&String> for ColumnFamilyDescriptor {
	fn from(name: &String) -> Self {
		Self::new(name.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDescriptor {
	pub name: TableName,
	pub families: Vec<ColumnFamilyDescriptor>,
}

impl TableDescriptor {
	pub fn builder(name: TableName) -> TableDescriptorBuilder {
		TableDescriptorBuilder::new(name)
	}

	pub fn family(&self, name: &[u8]) -> Option<&ColumnFamilyDescriptor> {
		self.families.iter().find(|family| family.name == name)
	}
}

pub struct TableDescriptorBuilder {
	name: TableName,
	families: Vec<ColumnFamilyDescriptor>,
}

impl TableDescriptorBuilder {
	pub fn new(name: TableName) -> Self {
		Self {
			name,
			families: Vec::new(),
		}
	}

	/// Adds a family, replacing an earlier one with the same name.
	pub fn column_family(mut self, family: impl Into<ColumnFamilyDescriptor>) -> Self {
		let family = family.into();
		match self.families.iter_mut().find(|existing| existing.name == family.name) {
			Some(existing) => *existing = family,
			None => self.families.push(family),
		}
		self
	}

	pub fn build(self) -> TableDescriptor {
		TableDescriptor {
			name: self.name,
			families: self.families,
		}
	}
}
