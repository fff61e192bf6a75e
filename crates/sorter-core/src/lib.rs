//! Core classification and statistics for the line sorter.
//!
//! Classifies text lines as integers, decimal numbers or plain strings,
//! accumulates exact per-category statistics and renders them for display.
//! File handling lives in `sorter-data`; this crate never touches the disk.

pub mod classifier;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod sorter;
pub mod statistics;
