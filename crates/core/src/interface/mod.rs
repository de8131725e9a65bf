// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Client-side view of a column-family store.
//!
//! A [`Connection`] is long-lived and shared. [`Admin`] and [`Table`] handles
//! are short-lived: acquire one per operation and let it drop. Dropping a
//! handle releases it, so every exit path (including `?`) gives it back.

mod admin;
mod connection;
mod table;

pub use admin::Admin;
pub use connection::Connection;
pub use table::Table;
