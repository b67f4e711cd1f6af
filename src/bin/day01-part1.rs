//! Day 01 part 1: how many rotations leave the dial pointing at 0?
use aor2025::cli;
use aor2025::dial::{count_final_zeros, parse_instructions};

fn main() {
    cli::run("day01-part1", |input| {
        count_final_zeros(&parse_instructions(input).rotations)
    });
}
