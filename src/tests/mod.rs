//! Internal test modules.

mod cli;
mod error;
mod io;
mod resolver;
