//! File I/O for the line sorter.
//!
//! Reads input files into one ordered line sequence, feeds it through the
//! core classification pass and writes one result file per non-empty
//! category.

pub mod pipeline;
pub mod reader;
pub mod writer;

pub use sorter_core as core;
