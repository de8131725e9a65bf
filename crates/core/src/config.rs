// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const DEFAULT_CLIENT_PORT: u16 = 2181;

/// Where the store cluster lives. Read once when a connection is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
	pub quorum: Vec<String>,
	pub client_port: u16,
}

impl ClusterConfig {
	pub fn new() -> Self {
		Self {
			quorum: vec!["localhost".to_string()],
			client_port: DEFAULT_CLIENT_PORT,
		}
	}

	pub fn with_quorum<I, S>(mut self, quorum: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.quorum = quorum.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_client_port(mut self, port: u16) -> Self {
		self.client_port = port;
		self
	}

	pub fn from_json_str(json: &str) -> Result<Self> {
		let config: Self = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let json = fs::read_to_string(path)?;
		Self::from_json_str(&json)
	}

	pub fn validate(&self) -> Result<()> {
		if self.quorum.is_empty() {
			return Err(Error::Config("quorum must list at least one host".to_string()));
		}
		if let Some(blank) = self.quorum.iter().position(|host| host.trim().is_empty()) {
			return Err(Error::Config(format!("quorum entry {blank} is blank")));
		}
		if self.client_port == 0 {
			return Err(Error::Config("client port must not be 0".to_string()));
		}
		Ok(())
	}

	/// `host:port` for every quorum member.
	pub fn addresses(&self) -> Vec<String> {
		self.quorum.iter().map(|host| format!("{}:{}", host.trim(), self.client_port)).collect()
	}
}

impl Default for ClusterConfig {
	fn default() -> Self {
		Self::new()
	}
}
