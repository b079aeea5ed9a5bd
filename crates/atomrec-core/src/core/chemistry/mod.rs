//! Static chemical knowledge used to classify coordinate records.

pub mod elements;
