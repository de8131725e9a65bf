// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod args;
mod flow;

use std::{io, process::ExitCode};

use clap::Parser;
use strata_access::DataAccessor;
use strata_catalog::SchemaManager;
use strata_core::{ClusterConfig, Result, interface::Connection};
use strata_store_memory::MemoryConnection;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::args::{Args, Flow};

fn setup_logging() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.with_writer(std::io::stderr)
		.try_init();
}

fn main() -> ExitCode {
	let args = Args::parse();

	setup_logging();

	match run(args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			error!(%err, "demo failed");
			ExitCode::FAILURE
		}
	}
}

fn run(args: Args) -> Result<()> {
	let config = match &args.config {
		Some(path) => ClusterConfig::load(path)?,
		None => ClusterConfig::default(),
	};

	let connection = MemoryConnection::open(&config)?;
	let data = DataAccessor::new(SchemaManager::new(connection.clone()));

	let mut out = io::stdout().lock();

	let result = match args.flow {
		Flow::Ddl => flow::create_schema(data.schema()).and_then(|()| flow::drop_schema(data.schema())),
		Flow::Dml => flow::data(&data, &mut out),
		Flow::All => flow::create_schema(data.schema())
			.and_then(|()| flow::data(&data, &mut out))
			.and_then(|()| flow::drop_schema(data.schema())),
	};

	connection.close()?;
	result
}
