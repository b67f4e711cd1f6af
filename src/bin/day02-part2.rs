//! Day 02 part 2: sum of the IDs which are some number written two or
//! more times.
use aor2025::cli;
use aor2025::ranges::{parse_ranges, total_repeated};

fn main() {
    cli::run("day02-part2", |input| total_repeated(&parse_ranges(input).ranges));
}
