//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `apply.rs` - apply-move state transitions
//! - `movegen.rs` - move generation counts and castling rules
//! - `edge_cases.rs` - special positions and non-standard setups
//! - `proptest.rs` - property-based tests over random games

mod movegen;
