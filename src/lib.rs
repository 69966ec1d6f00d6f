//! # Tome Architecture
//!
//! Tome is a **UI-agnostic catalog library** with a CLI client on top. The
//! binary parses arguments and prints; everything below it takes Rust types
//! and returns Rust types.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                        │
//! │  - Parses arguments, formats tables, owns stdout/exit codes│
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                             │
//! │  - One module per subcommand, pure logic                   │
//! │  - Returns CmdResult, never prints, never exits            │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                    │
//! │  - BookStore trait; JsonStore and SqliteStore behind it    │
//! │  - Backend chosen from the path extension                  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The leaves are pure and storage-free: [`model`] (the `Book` record and
//! its normalization rules), [`dedupe`] (duplicate detection shared by both
//! backends and the CSV import), [`filters`] (search and sort), and
//! [`resolver`] (full/prefix id resolution). [`csv_io`] and [`migrate`]
//! operate strictly through the [`store::BookStore`] contract, which is what
//! keeps the two backends from drifting apart.
//!
//! No function in this library writes to stdout or terminates the process:
//! missing records, ambiguous prefixes, and duplicate conflicts are values
//! in the return types, and only genuinely fatal conditions (an unwritable
//! path, a broken database file) surface as errors for the binary to report.

pub mod commands;
pub mod config;
pub mod csv_io;
pub mod dedupe;
pub mod error;
pub mod filters;
pub mod migrate;
pub mod model;
pub mod resolver;
pub mod store;
