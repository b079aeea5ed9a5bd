//! Turning raw line sequences into records.
//!
//! This module never touches the file system: callers hand it lines from any
//! source (a file reader, an in-memory buffer, a network stream) with trailing
//! line terminators already removed.

pub mod ingest;
