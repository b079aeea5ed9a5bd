//! # atomrec Core Library
//!
//! A small, strict library for the coordinate records of the Protein Data Bank
//! text format: the fixed-column `ATOM` and `HETATM` lines.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers so that the record logic stays pure and
//! free of any file-system concern.
//!
//! - **[`core`]: The Foundation.** The [`Record`](core::record::Record) type with its
//!   parser, serializer, atom-name mutator and chemical classification predicates,
//!   the static element tables, and the batch ingestor that filters record lines
//!   out of an arbitrary line sequence.
//!
//! - **[`workflows`]: The Public API.** Downstream consumers of ingested records:
//!   structure summaries, solvent/contaminant cleanup, and per-residue fragment
//!   extraction.
//!
//! Reading and writing files is left entirely to the caller: the library consumes
//! lines and produces lines.

pub mod core;
pub mod workflows;
