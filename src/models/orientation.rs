use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::error::PosterError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown {kind} {value:?} (expected one of: {expected})")]
pub struct ParseDirectionError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

/// One of the four horizontal compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compass {
    North,
    East,
    South,
    West,
}

impl Compass {
    pub const ALL: [Compass; 4] = [Compass::North, Compass::East, Compass::South, Compass::West];

    pub fn as_str(self) -> &'static str {
        match self {
            Compass::North => "north",
            Compass::East => "east",
            Compass::South => "south",
            Compass::West => "west",
        }
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Compass {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Compass::North),
            "east" | "e" => Ok(Compass::East),
            "south" | "s" => Ok(Compass::South),
            "west" | "w" => Ok(Compass::West),
            _ => Err(ParseDirectionError {
                kind: "compass direction",
                value: s.to_string(),
                expected: "north, east, south, west",
            }),
        }
    }
}

/// The surface a poster is mounted on.
///
/// The four compass variants are walls whose frames face that direction.
/// `Floor` frames face up, `Ceiling` frames face down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    North,
    East,
    South,
    West,
    Floor,
    Ceiling,
}

impl Orientation {
    pub const ALL: [Orientation; 6] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
        Orientation::Floor,
        Orientation::Ceiling,
    ];

    /// A wall whose frames face `facing`.
    pub fn wall(facing: Compass) -> Self {
        match facing {
            Compass::North => Orientation::North,
            Compass::East => Orientation::East,
            Compass::South => Orientation::South,
            Compass::West => Orientation::West,
        }
    }

    /// Compass facing of a wall, `None` for floor and ceiling.
    pub fn wall_facing(self) -> Option<Compass> {
        match self {
            Orientation::North => Some(Compass::North),
            Orientation::East => Some(Compass::East),
            Orientation::South => Some(Compass::South),
            Orientation::West => Some(Compass::West),
            Orientation::Floor | Orientation::Ceiling => None,
        }
    }

    pub fn is_wall(self) -> bool {
        self.wall_facing().is_some()
    }

    /// Whether the column axis runs right-to-left in physical scan order.
    ///
    /// Only frames facing down (a ceiling) are mirrored.
    pub fn mirrors_columns(self) -> bool {
        matches!(self, Orientation::Ceiling)
    }

    /// Source cell `(column, row)` shown at physical scan position `slot`.
    ///
    /// Physical frames are scanned bottom-up, so the row axis is inverted on
    /// every surface.
    pub fn cell_for_slot(self, slot: usize, columns: u32, rows: u32) -> Result<(u32, u32), PosterError> {
        if columns == 0 || rows == 0 {
            return Err(PosterError::NoLayout);
        }
        let columns_us = columns as usize;
        if slot >= columns_us * rows as usize {
            return Err(PosterError::IndexOutOfBounds {
                index: slot,
                columns,
                rows,
            });
        }
        let scan_column = (slot % columns_us) as u32;
        let scan_row = (slot / columns_us) as u32;

        let column = if self.mirrors_columns() {
            columns - 1 - scan_column
        } else {
            scan_column
        };
        Ok((column, rows - 1 - scan_row))
    }

    /// Inverse of [`cell_for_slot`](Self::cell_for_slot).
    pub fn slot_for_cell(self, column: u32, row: u32, columns: u32, rows: u32) -> Result<usize, PosterError> {
        if columns == 0 || rows == 0 {
            return Err(PosterError::NoLayout);
        }
        if column >= columns || row >= rows {
            return Err(PosterError::CellOutOfBounds {
                column,
                row,
                columns,
                rows,
            });
        }
        let scan_column = if self.mirrors_columns() {
            columns - 1 - column
        } else {
            column
        };
        let scan_row = rows - 1 - row;
        Ok(scan_row as usize * columns as usize + scan_column as usize)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::North => "north",
            Orientation::East => "east",
            Orientation::South => "south",
            Orientation::West => "west",
            Orientation::Floor => "floor",
            Orientation::Ceiling => "ceiling",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "floor" | "up" => Ok(Orientation::Floor),
            "ceiling" | "down" => Ok(Orientation::Ceiling),
            other => other
                .parse::<Compass>()
                .map(Orientation::wall)
                .map_err(|_| ParseDirectionError {
                    kind: "orientation",
                    value: s.to_string(),
                    expected: "north, east, south, west, floor, ceiling",
                }),
        }
    }
}

/// Rotation of an item in a display frame, in 45 degree steps.
///
/// Maps only show four distinct orientations, but frames track eight
/// states, and placement steps through them one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameRotation {
    #[default]
    None,
    Clockwise45,
    Clockwise,
    Clockwise135,
    Flipped,
    Flipped45,
    CounterClockwise,
    CounterClockwise45,
}

impl FrameRotation {
    const STEPS: [FrameRotation; 8] = [
        FrameRotation::None,
        FrameRotation::Clockwise45,
        FrameRotation::Clockwise,
        FrameRotation::Clockwise135,
        FrameRotation::Flipped,
        FrameRotation::Flipped45,
        FrameRotation::CounterClockwise,
        FrameRotation::CounterClockwise45,
    ];

    /// Position in the eight-step cycle, 0 for `None`.
    pub fn steps(self) -> u8 {
        self as u8
    }

    pub fn from_steps(steps: u8) -> Self {
        Self::STEPS[(steps % 8) as usize]
    }

    pub fn rotate_clockwise(self) -> Self {
        Self::from_steps(self.steps() + 1)
    }

    pub fn rotate_counter_clockwise(self) -> Self {
        Self::from_steps(self.steps() + 7)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FrameRotation::None => "none",
            FrameRotation::Clockwise45 => "clockwise45",
            FrameRotation::Clockwise => "clockwise",
            FrameRotation::Clockwise135 => "clockwise135",
            FrameRotation::Flipped => "flipped",
            FrameRotation::Flipped45 => "flipped45",
            FrameRotation::CounterClockwise => "counter_clockwise",
            FrameRotation::CounterClockwise45 => "counter_clockwise45",
        }
    }
}

impl fmt::Display for FrameRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
