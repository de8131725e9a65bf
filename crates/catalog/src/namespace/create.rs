// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::{
	Error, NamespaceDescriptor, Result, StoreError,
	interface::{Admin, Connection},
};
use tracing::{info, instrument, warn};

use crate::{NamespaceOutcome, SchemaManager};

impl<C: Connection> SchemaManager<C> {
	/// Creating a namespace that already exists is not an error.
	#[instrument(name = "catalog::namespace::create", level = "debug", skip(self))]
	pub fn create_namespace(&self, name: &str) -> Result<NamespaceOutcome> {
		if name.is_empty() {
			warn!("namespace name must not be empty");
			return Ok(NamespaceOutcome::InvalidName);
		}

		let admin = self.connection.admin()?;
		match admin.create_namespace(&NamespaceDescriptor::new(name)) {
			Ok(()) => {
				info!(namespace = name, "namespace created");
				Ok(NamespaceOutcome::Created)
			}
			Err(Error::Store(StoreError::NamespaceExists(_))) => {
				warn!(namespace = name, "namespace already exists");
				Ok(NamespaceOutcome::AlreadyExists)
			}
			Err(err) => Err(err),
		}
	}
}
