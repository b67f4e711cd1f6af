//! Day 01: the safe dial.
//!
//! The dial has positions 0 to 99 and starts at 50.  Each input line
//! is a rotation such as `L68` or `R 48`.
use regex::Regex;
use tracing::{event, Level};

pub const DIAL_SIZE: u64 = 100;
pub const START_POSITION: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    pub direction: Direction,
    pub distance: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine {
    Valid(Rotation),
    Skipped,
}

pub struct InstructionParser {
    rotation_rx: Regex,
}

impl Default for InstructionParser {
    fn default() -> InstructionParser {
        InstructionParser::new()
    }
}

impl InstructionParser {
    pub fn new() -> InstructionParser {
        InstructionParser {
            // A sign is accepted but ignored; the distance is a magnitude.
            rotation_rx: Regex::new(r"^([LR])\s*[+-]?([0-9]+)$").unwrap(),
        }
    }

    pub fn parse_line(&self, line: &str) -> ParsedLine {
        let caps = match self.rotation_rx.captures(line.trim()) {
            Some(caps) => caps,
            None => {
                return ParsedLine::Skipped;
            }
        };
        let direction = match &caps[1] {
            "L" => Direction::Left,
            "R" => Direction::Right,
            _ => unreachable!(),
        };
        match caps[2].parse::<u64>() {
            Ok(distance) => ParsedLine::Valid(Rotation {
                direction,
                distance,
            }),
            Err(_) => ParsedLine::Skipped,
        }
    }
}

#[test]
fn test_parse_line() {
    let parser = InstructionParser::new();
    let left = |distance| {
        ParsedLine::Valid(Rotation {
            direction: Direction::Left,
            distance,
        })
    };
    let right = |distance| {
        ParsedLine::Valid(Rotation {
            direction: Direction::Right,
            distance,
        })
    };
    assert_eq!(parser.parse_line("L68"), left(68));
    assert_eq!(parser.parse_line("R 48"), right(48));
    assert_eq!(parser.parse_line("  R   48\r"), right(48));
    assert_eq!(parser.parse_line("R+5"), right(5));
    assert_eq!(parser.parse_line("L -5"), left(5));
    assert_eq!(parser.parse_line("L0"), left(0));
}

#[test]
fn test_parse_line_rejects() {
    let parser = InstructionParser::new();
    for bad in [
        "",
        "   ",
        "X12",
        "l12",
        "L",
        "L12a",
        "L 1 2",
        "LR 12",
        "12",
        "L +-3",
        "R 99999999999999999999999",
        "L٣",
        "R 1٣",
    ] {
        assert_eq!(parser.parse_line(bad), ParsedLine::Skipped, "input {:?}", bad);
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Instructions {
    pub rotations: Vec<Rotation>,
    pub skipped: usize,
}

pub fn parse_instructions(input: &str) -> Instructions {
    let parser = InstructionParser::new();
    let mut result = Instructions::default();
    for (lineno, line) in input.lines().enumerate() {
        match parser.parse_line(line) {
            ParsedLine::Valid(rotation) => result.rotations.push(rotation),
            ParsedLine::Skipped => {
                if !line.trim().is_empty() {
                    event!(Level::DEBUG, "skipping line {}: {:?}", lineno + 1, line);
                }
                result.skipped += 1;
            }
        }
    }
    if result.skipped > 0 {
        event!(Level::INFO, "skipped {} invalid or blank lines", result.skipped);
    }
    result
}

#[test]
fn test_parse_instructions_counts_skipped() {
    let parsed = parse_instructions("L68\n\nbogus\nR 48\nL 1 2\n");
    assert_eq!(parsed.rotations.len(), 2);
    assert_eq!(parsed.skipped, 3);
}

/// Returns the position reached by applying `rotation` at `position`.
pub fn rotate(position: u64, rotation: &Rotation) -> u64 {
    let position = position % DIAL_SIZE;
    let step = rotation.distance % DIAL_SIZE;
    match rotation.direction {
        Direction::Left => (position + DIAL_SIZE - step) % DIAL_SIZE,
        Direction::Right => (position + step) % DIAL_SIZE,
    }
}

#[test]
fn test_rotate() {
    let r = |direction, distance| Rotation {
        direction,
        distance,
    };
    assert_eq!(rotate(50, &r(Direction::Right, 10)), 60);
    assert_eq!(rotate(60, &r(Direction::Left, 20)), 40);
    assert_eq!(rotate(5, &r(Direction::Left, 10)), 95);
    assert_eq!(rotate(95, &r(Direction::Right, 5)), 0);
    assert_eq!(rotate(50, &r(Direction::Left, 50)), 0);
    assert_eq!(rotate(0, &r(Direction::Left, 1)), 99);
    assert_eq!(rotate(17, &r(Direction::Left, 0)), 17);
    for distance in [100, 200, 1000, 123400] {
        assert_eq!(rotate(37, &r(Direction::Left, distance)), 37);
        assert_eq!(rotate(37, &r(Direction::Right, distance)), 37);
    }
    for distance in 0..=250 {
        assert!(rotate(99, &r(Direction::Right, distance)) < DIAL_SIZE);
        assert!(rotate(0, &r(Direction::Left, distance)) < DIAL_SIZE);
    }
    // Positions outside the dial are reduced first, as in zero_clicks.
    assert_eq!(rotate(u64::MAX, &r(Direction::Left, 15)), 0);
    assert_eq!(rotate(u64::MAX, &r(Direction::Right, 85)), 0);
    assert_eq!(rotate(250, &r(Direction::Left, 0)), 50);
}

/// Counts the clicks `1..=distance` of `rotation` which leave the dial
/// pointing at 0.  The starting position itself (click 0) is never
/// counted.
pub fn zero_clicks(position: u64, rotation: &Rotation) -> u64 {
    if rotation.distance == 0 {
        return 0;
    }
    let first = match rotation.direction {
        Direction::Right => (DIAL_SIZE - position % DIAL_SIZE) % DIAL_SIZE,
        Direction::Left => position % DIAL_SIZE,
    };
    // Starting at 0, the next visit is a full lap away.
    let first = if first == 0 { DIAL_SIZE } else { first };
    if rotation.distance < first {
        0
    } else {
        1 + (rotation.distance - first) / DIAL_SIZE
    }
}

#[cfg(test)]
fn zero_clicks_by_stepping(mut position: u64, rotation: &Rotation) -> u64 {
    let mut hits = 0;
    for _ in 0..rotation.distance {
        position = rotate(
            position,
            &Rotation {
                direction: rotation.direction,
                distance: 1,
            },
        );
        if position == 0 {
            hits += 1;
        }
    }
    hits
}

#[test]
fn test_zero_clicks() {
    let r = |direction, distance| Rotation {
        direction,
        distance,
    };
    assert_eq!(zero_clicks(50, &r(Direction::Left, 50)), 1);
    assert_eq!(zero_clicks(50, &r(Direction::Left, 49)), 0);
    assert_eq!(zero_clicks(50, &r(Direction::Right, 1000)), 10);
    assert_eq!(zero_clicks(0, &r(Direction::Right, 100)), 1);
    assert_eq!(zero_clicks(0, &r(Direction::Left, 99)), 0);
    assert_eq!(zero_clicks(0, &r(Direction::Left, 0)), 0);
    assert_eq!(zero_clicks(0, &r(Direction::Right, 0)), 0);
}

#[test]
fn test_zero_clicks_matches_stepping() {
    for position in [0, 1, 49, 50, 99] {
        for distance in 0..=320 {
            for direction in [Direction::Left, Direction::Right] {
                let rotation = Rotation {
                    direction,
                    distance,
                };
                assert_eq!(
                    zero_clicks(position, &rotation),
                    zero_clicks_by_stepping(position, &rotation),
                    "position={} rotation={:?}",
                    position,
                    rotation
                );
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dial {
    pub position: u64,
}

impl Default for Dial {
    fn default() -> Dial {
        Dial::new()
    }
}

impl Dial {
    pub fn new() -> Dial {
        Dial {
            position: START_POSITION,
        }
    }

    /// Turns the dial, returning the number of clicks which pointed at 0.
    pub fn turn(&mut self, rotation: &Rotation) -> u64 {
        let hits = zero_clicks(self.position, rotation);
        self.position = rotate(self.position, rotation);
        event!(
            Level::TRACE,
            "turn {:?} {}: now at {}, {} zero clicks",
            rotation.direction,
            rotation.distance,
            self.position,
            hits,
        );
        hits
    }
}

/// Counts the rotations which finish with the dial at 0.
pub fn count_final_zeros(rotations: &[Rotation]) -> u64 {
    let mut dial = Dial::new();
    let mut count = 0;
    for rotation in rotations {
        dial.turn(rotation);
        if dial.position == 0 {
            count += 1;
        }
    }
    count
}

/// Counts every click, at any point in any rotation, which leaves the
/// dial at 0.  A single rotation can pass 0 about 1.8e17 times, so
/// the total is kept as a u128.
pub fn count_zero_clicks(rotations: &[Rotation]) -> u128 {
    let mut dial = Dial::new();
    rotations
        .iter()
        .map(|rotation| u128::from(dial.turn(rotation)))
        .sum()
}

#[cfg(test)]
const EXAMPLE: &str = concat!(
    "L68\n", "L30\n", "R48\n", "L5\n", "R60\n", "L55\n", "L1\n", "L99\n", "R14\n", "L82\n",
);

#[test]
fn test_example() {
    let parsed = parse_instructions(EXAMPLE);
    assert_eq!(parsed.skipped, 0);
    assert_eq!(count_final_zeros(&parsed.rotations), 3);
    assert_eq!(count_zero_clicks(&parsed.rotations), 6);
}

#[test]
fn test_positions_never_revisiting_zero() {
    let parsed = parse_instructions("R10\nL20\nR10\n");
    let mut dial = Dial::new();
    let positions: Vec<u64> = parsed
        .rotations
        .iter()
        .map(|r| {
            dial.turn(r);
            dial.position
        })
        .collect();
    assert_eq!(positions, vec![60, 40, 50]);
    assert_eq!(count_final_zeros(&parsed.rotations), 0);
    assert_eq!(count_zero_clicks(&parsed.rotations), 0);
}

#[test]
fn test_full_lap_from_zero() {
    let parsed = parse_instructions("L50\nR100\n");
    assert_eq!(count_final_zeros(&parsed.rotations), 2);
    // One hit for each rotation; resting at 0 before the lap is not counted.
    assert_eq!(count_zero_clicks(&parsed.rotations), 2);
}

#[test]
fn test_extended_count_at_least_basic() {
    for input in [EXAMPLE, "L50\nR100\n", "R50\nL300\nR1\nL1\n", "R250\nL0\nR0\n"] {
        let parsed = parse_instructions(input);
        assert!(
            count_zero_clicks(&parsed.rotations) >= u128::from(count_final_zeros(&parsed.rotations))
        );
    }
}

#[test]
fn test_huge_distances_do_not_overflow() {
    let input = "R18446744073709551615\n".repeat(110);
    let parsed = parse_instructions(&input);
    assert_eq!(parsed.rotations.len(), 110);
    let mut dial = Dial::new();
    let mut expected: u128 = 0;
    for rotation in &parsed.rotations {
        let hits = zero_clicks(dial.position, rotation);
        assert!(hits > 184_467_440_737_095_000);
        expected += u128::from(hits);
        dial.turn(rotation);
    }
    let total = count_zero_clicks(&parsed.rotations);
    assert_eq!(total, expected);
    assert!(total > u128::from(u64::MAX));
}
