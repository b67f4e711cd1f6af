//! Day 02 part 1: sum of the IDs which are some number written twice.
use aor2025::cli;
use aor2025::ranges::{parse_ranges, total_doubled};

fn main() {
    cli::run("day02-part1", |input| total_doubled(&parse_ranges(input).ranges));
}
