// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod cell;
pub mod namespace;
pub mod request;
pub mod table;
