// Copyright 2026 Contour Contributors
// SPDX-License-Identifier: Apache-2.0

//! Contour library — Markdown outlines of Wikipedia country pages.
//!
//! This library crate exposes the core modules for integration testing.

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod outline;
pub mod rest;
