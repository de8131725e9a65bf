// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::atomic::Ordering;

use crate::connection::MemoryConnection;

/// Counts as one open handle on the connection until dropped.
pub(crate) struct Lease {
	connection: MemoryConnection,
}

impl Lease {
	pub(crate) fn acquire(connection: &MemoryConnection) -> Self {
		connection.open_handles.fetch_add(1, Ordering::AcqRel);
		Self {
			connection: connection.clone(),
		}
	}

	pub(crate) fn connection(&self) -> &MemoryConnection {
		&self.connection
	}
}

impl Drop for Lease {
	fn drop(&mut self) {
		self.connection.open_handles.fetch_sub(1, Ordering::AcqRel);
	}
}
