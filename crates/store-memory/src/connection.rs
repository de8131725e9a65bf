// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::{BTreeMap, BTreeSet},
	ops::Deref,
	sync::{
		Arc,
		atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering},
	},
};

use parking_lot::RwLock;
use strata_core::{
	ClusterConfig, DEFAULT_NAMESPACE, Namespace, Result, SYSTEM_NAMESPACE, StoreError, TableName,
	interface::Connection,
};
use tracing::{debug, info, instrument};

use crate::{
	admin::MemoryAdmin,
	lease::Lease,
	table::{MemoryTable, TableStore},
};

#[derive(Clone)]
pub struct MemoryConnection(Arc<MemoryInner>);

pub struct MemoryInner {
	pub(crate) addresses: Vec<String>,
	pub(crate) namespaces: RwLock<BTreeSet<Namespace>>,
	pub(crate) tables: RwLock<BTreeMap<TableName, Arc<TableStore>>>,
	clock: AtomicU64,
	pub(crate) open_handles: AtomicUsize,
	closed: AtomicBool,
}

impl Deref for MemoryConnection {
	type Target = MemoryInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl MemoryConnection {
	#[instrument(name = "store::memory::open", level = "debug", skip(config))]
	pub fn open(config: &ClusterConfig) -> Result<Self> {
		config.validate()?;

		let addresses = config.addresses();
		info!(quorum = ?addresses, "opened in-memory store connection");

		let namespaces =
			[DEFAULT_NAMESPACE, SYSTEM_NAMESPACE].into_iter().map(Namespace::from).collect::<BTreeSet<_>>();

		Ok(Self(Arc::new(MemoryInner {
			addresses,
			namespaces: RwLock::new(namespaces),
			tables: RwLock::new(BTreeMap::new()),
			clock: AtomicU64::new(0),
			open_handles: AtomicUsize::new(0),
			closed: AtomicBool::new(false),
		})))
	}

	/// Addresses the connection was opened with.
	pub fn addresses(&self) -> &[String] {
		&self.addresses
	}

	/// Admin, table and scanner handles not yet dropped.
	pub fn open_handles(&self) -> usize {
		self.open_handles.load(Ordering::Acquire)
	}

	pub(crate) fn ensure_open(&self) -> Result<()> {
		if self.closed.load(Ordering::Acquire) {
			return Err(StoreError::ConnectionClosed.into());
		}
		Ok(())
	}

	pub(crate) fn next_version(&self) -> u64 {
		self.clock.fetch_add(1, Ordering::AcqRel) + 1
	}

	pub(crate) fn find_table(&self, name: &TableName) -> Option<Arc<TableStore>> {
		self.tables.read().get(name).cloned()
	}
}

impl Connection for MemoryConnection {
	type Admin = MemoryAdmin;
	type Table = MemoryTable;

	fn admin(&self) -> Result<MemoryAdmin> {
		self.ensure_open()?;
		Ok(MemoryAdmin::new(Lease::acquire(self)))
	}

	fn table(&self, name: &TableName) -> Result<MemoryTable> {
		self.ensure_open()?;
		Ok(MemoryTable::new(Lease::acquire(self), name.clone()))
	}

	#[instrument(name = "store::memory::close", level = "debug", skip(self))]
	fn close(&self) -> Result<()> {
		if self.closed.swap(true, Ordering::AcqRel) {
			debug!("connection already closed");
			return Ok(());
		}
		info!(open_handles = self.open_handles(), "closed in-memory store connection");
		Ok(())
	}

	fn is_closed(&self) -> bool {
		self.closed.load(Ordering::Acquire)
	}
}
