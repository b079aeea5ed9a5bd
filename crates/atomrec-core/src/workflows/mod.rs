//! # Workflows Module
//!
//! Downstream consumers of the records produced by the batch ingestor.
//!
//! ## Architecture
//!
//! - **Summary** ([`summary`]) - Counts of each record category, chains and centroid
//! - **Cleanup** ([`clean`]) - Removal of water, contaminants, ions or cofactors, and
//!   ion atom-name normalization
//! - **Fragment extraction** ([`extract`]) - Grouping of heteroatom residues into
//!   per-residue fragments ready to be written to their own files
//!
//! Workflows take ownership of, or borrow, already-ingested records and never
//! perform I/O.

pub mod clean;
pub mod extract;
pub mod summary;
