// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Flow {
	/// Create the `bi` namespace and `bi:student`, then drop the table
	Ddl,
	/// Write, scan, delete and read cells
	Dml,
	/// Create the schema, run the data flow against it, then drop it
	All,
}

/// Walks through schema and data operations against an in-process store
#[derive(Debug, Parser)]
#[command(name = "strata-demo", version)]
pub struct Args {
	/// Which flow to run
	#[arg(value_enum, default_value_t = Flow::All)]
	pub flow: Flow,

	/// Cluster configuration file (JSON)
	#[arg(short = 'c', long, value_name = "FILE")]
	pub config: Option<PathBuf>,
}

#[cfg(test)]
pub mod tests {
	use clap::error::ErrorKind;

	use super::*;

	#[test]
	fn test_defaults() {
		let args = Args::try_parse_from(["strata-demo"]).unwrap();
		assert_eq!(args.flow, Flow::All);
		assert_eq!(args.config, None);
	}

	#[test]
	fn test_flow_and_config() {
		let args = Args::try_parse_from(["strata-demo", "dml", "--config", "cluster.json"]).unwrap();
		assert_eq!(args.flow, Flow::Dml);
		assert_eq!(args.config, Some(PathBuf::from("cluster.json")));

		let args = Args::try_parse_from(["strata-demo", "-c", "other.json", "ddl"]).unwrap();
		assert_eq!(args.flow, Flow::Ddl);
		assert_eq!(args.config, Some(PathBuf::from("other.json")));
	}

	#[test]
	fn test_errors() {
		let err = Args::try_parse_from(["strata-demo", "--config"]).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::InvalidValue);

		let err = Args::try_parse_from(["strata-demo", "ddl", "dml"]).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::UnknownArgument);

		let err = Args::try_parse_from(["strata-demo", "scan"]).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::InvalidValue);
	}
}
