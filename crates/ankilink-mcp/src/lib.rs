//! Tool handlers for the Anki MCP server.
//!
//! Every tool maps a set of arguments to an ordered sequence of plain-text
//! blocks. The handlers in this crate do all the work - issuing AnkiConnect
//! calls through [`ankilink`], rendering results with the pure formatters in
//! [`format`], and folding every failure into descriptive text per each
//! tool's propagation policy. The binary in `main.rs` only wires these
//! handlers to the MCP transport.

pub mod aggregate;
pub mod format;
pub mod handlers;
