//! # CLI Layer
//!
//! The only place that knows about the terminal: it parses process flags, installs
//! the log subscriber, runs the prompt loop and colours the output. Every line the
//! user types goes straight to [`contactbook::api::BookApi::execute`].

mod args;
mod commands;
mod print;

pub use commands::run;
