// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceOutcome {
	Created,
	AlreadyExists,
	InvalidName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateTableOutcome {
	Created,
	AlreadyExists,
	InvalidName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTableOutcome {
	Deleted,
	NotFound,
	InvalidName,
}
