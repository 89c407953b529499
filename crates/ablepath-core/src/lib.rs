//! ablepath-core
//!
//! Pure domain types shared by the rule tables, the engine and the HTTP
//! boundary: condition codes, code sets, candidate devices, ranked results,
//! effectiveness ratings, and parsing of the upstream code extraction.
//! No I/O lives here.

pub mod error;
pub mod extraction;
pub mod models;
