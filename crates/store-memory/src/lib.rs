// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! In-process implementation of the strata store client interface.
//!
//! Keeps every table in a skip list ordered by row, family, qualifier and
//! descending version, which is the order a column-family store hands cells
//! back in.

mod admin;
mod connection;
mod key;
mod lease;
mod scan;
mod table;
pub mod test_utils;

pub use admin::MemoryAdmin;
pub use connection::MemoryConnection;
pub use scan::MemoryScanner;
pub use table::MemoryTable;
