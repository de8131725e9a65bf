// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::io;

use crate::model::table::TableName;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Store(#[from] StoreError),

	#[error("invalid configuration: {0}")]
	Config(String),

	#[error(transparent)]
	Io(#[from] io::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

impl Error {
	/// The store-side failure behind this error, if any.
	pub fn store(&self) -> Option<&StoreError> {
		match self {
			Error::Store(err) => Some(err),
			_ => None,
		}
	}
}

/// Failures reported by the store itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
	#[error("connection is closed")]
	ConnectionClosed,

	#[error("namespace '{0}' already exists")]
	NamespaceExists(String),

	#[error("namespace '{0}' not found")]
	NamespaceNotFound(String),

	#[error("table '{0}' already exists")]
	TableExists(TableName),

	#[error("table '{0}' not found")]
	TableNotFound(TableName),

	#[error("table '{0}' is not enabled")]
	TableNotEnabled(TableName),

	#[error("table '{0}' is not disabled")]
	TableNotDisabled(TableName),

	#[error("column family '{family}' does not exist in table '{table}'")]
	NoSuchColumnFamily {
		table: TableName,
		family: String,
	},
}
