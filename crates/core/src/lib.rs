//! Core library for devtools
//!
//! This crate implements the **Functional Core** of the devtools application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The devtools project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`devtools_core`** (this crate): Pure transformation functions with zero I/O
//! - **`devtools`**: I/O operations and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: No clock reads and no RNG — functions that reason about
//!   "now" (JWT expiry, relative timestamps) take it as a parameter, and random
//!   generation (passwords, UUIDs) lives in the shell
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! One module per tool, each self-contained:
//!
//! - [`csv`]: Delimited-text parsing into a table plus advisory diagnostics
//! - [`json`]: JSON formatting, minification, and validation
//! - [`jwt`]: Unverified JWT decoding and claim timestamp rendering
//! - [`color`]: Hex / RGB / HSL color parsing and conversion
//! - [`password`]: Charset assembly and strength estimation for generation
//! - [`encode`]: Base64 and URL encoding/decoding
//! - [`hashes`]: MD5 / SHA-256 / SHA-512 hex digests
//! - [`timeconv`]: Timestamp parsing and conversion
//! - [`units`]: Unit-of-measure conversion
//! - [`textcase`]: Case conversion and text statistics
//! - [`minify`]: Best-effort regex-based CSS/JS minification
//!
//! Each module contains its domain models, its transformation functions, and
//! comprehensive unit tests using fixture data (no mocking).

pub mod color;
pub mod csv;
pub mod encode;
pub mod hashes;
pub mod json;
pub mod jwt;
pub mod minify;
pub mod password;
pub mod textcase;
pub mod timeconv;
pub mod units;
