//! # Core Module
//!
//! The building blocks for working with PDB coordinate records.
//!
//! - **Records** ([`record`]) - The decoded `ATOM`/`HETATM` line, its column layout,
//!   parser, serializer and classification predicates
//! - **Chemistry tables** ([`chemistry`]) - Static element sets used for classification
//! - **Ingestion** ([`io`]) - Best-effort conversion of raw line sequences into records
//!
//! Every operation in this module is synchronous, allocation-light and free of
//! shared mutable state, so records may be parsed concurrently across threads
//! without coordination.

pub mod chemistry;
pub mod io;
pub mod record;
