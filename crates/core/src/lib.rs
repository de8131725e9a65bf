// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Shared vocabulary of strata.
//!
//! The facade crates never talk to a concrete store. They speak the traits in
//! [`interface`] and exchange the types in [`model`]; a backend such as
//! `strata-store-memory` supplies the implementation.

pub mod config;
pub mod error;
pub mod interface;
pub mod model;

pub use config::ClusterConfig;
pub use error::{Error, Result, StoreError};
pub use model::{
	cell::{Cell, RowResult},
	namespace::{DEFAULT_NAMESPACE, Namespace, NamespaceDescriptor, SYSTEM_NAMESPACE},
	request::{ColumnSelector, Delete, DeleteScope, Get, Put, Scan},
	table::{ColumnFamilyDescriptor, TableDescriptor, TableDescriptorBuilder, TableName},
};
