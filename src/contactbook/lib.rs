//! # Contactbook Architecture
//!
//! A contact book driven by one-line text commands (`add Alice 0501234567`,
//! `birthdays`, ...). The library holds everything but the terminal: the binary only
//! reads lines, hands them to [`api::BookApi::execute`] and prints what comes back.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - clap flags, logging setup, prompt loop, coloured output  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ line of text
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) + interpreter.rs                              │
//! │  - tokenizes, dispatches, turns errors into messages        │
//! │  - owns the AddressBook and its store                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - one function per command, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (model.rs, book.rs)     Storage (store/)             │
//! │  - validated values, records   - BookStore trait            │
//! │  - upcoming birthdays          - FileStore, InMemoryStore   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`model`]: `Name`, `Phone`, `Birthday`, `Record`
//! - [`book`]: `AddressBook` and the upcoming-birthday query
//! - [`commands`]: one module per user command
//! - [`interpreter`]: line tokenizer
//! - [`api`]: session facade and error-to-message boundary
//! - [`store`]: persistence
//! - [`config`]: per-data-directory settings
//! - [`init`]: data directory resolution and session setup
//! - [`error`]: error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod interpreter;
pub mod model;
pub mod store;
