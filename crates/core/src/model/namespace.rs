// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

/// Namespace used whenever a caller leaves the namespace empty or unspecified.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Namespace reserved for the store's own bookkeeping tables.
pub const SYSTEM_NAMESPACE: &str = "system";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Namespace(String);

impl Namespace {
	/// Maps `None` and `""` to [`DEFAULT_NAMESPACE`].
	pub fn resolve(name: Option<&str>) -> Self {
		match name {
			Some(name) if !name.is_empty() => Self(name.to_string()),
			_ => Self::default(),
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Default for Namespace {
	fn default() -> Self {
		Self(DEFAULT_NAMESPACE.to_string())
	}
}

impl Display for Namespace {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for Namespace {
	fn from(name: &str) -> Self {
		Self::resolve(Some(name))
	}
}

impl From<Option<&str>> for Namespace {
	fn from(name: Option<&str>) -> Self {
		Self::resolve(name)
	}
}

impl From<String> for Namespace {
	fn from(name: String) -> Self {
		if name.is_empty() {
			Self::default()
		} else {
			Self(name)
		}
	}
}

impl AsRef<str> for Namespace {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDescriptor {
	pub name: String,
}

impl NamespaceDescriptor {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
		}
	}
}
