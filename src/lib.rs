//! Advent of Code 2025 solutions.  The binaries in `src/bin` are thin
//! wrappers around the puzzle code here.
pub mod cli;
pub mod dial;
pub mod input;
pub mod ranges;
