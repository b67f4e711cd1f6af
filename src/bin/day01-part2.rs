//! Day 01 part 2: how many clicks, including those in the middle of a
//! rotation, leave the dial pointing at 0?
use aor2025::cli;
use aor2025::dial::{count_zero_clicks, parse_instructions};

fn main() {
    cli::run("day01-part2", |input| {
        count_zero_clicks(&parse_instructions(input).rotations)
    });
}
