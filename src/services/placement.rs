use serde::Serialize;

use crate::error::PosterError;
use crate::models::{Compass, FrameRotation, Orientation, PosterGrid, TileId};

/// One frame of a mounted poster: which tile goes there and how it is turned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Position in physical scan order
    pub slot: usize,
    pub tile: TileId,
    pub rotation: FrameRotation,
}

/// Rotation of the frame at `slot`.
///
/// Wall frames are always upright. On floors and ceilings the image is kept
/// upright for a viewer looking toward `viewer`: ceiling frames start
/// flipped, and each facing turns the frame by a fixed number of steps.
/// Slot 0 is turned one step back, since the interaction that starts a
/// placement has already turned that frame once.
pub fn frame_rotation(slot: usize, orientation: Orientation, viewer: Compass) -> FrameRotation {
    let mut rotation = match orientation {
        Orientation::Floor => FrameRotation::None,
        Orientation::Ceiling => FrameRotation::Flipped,
        _ => return FrameRotation::None,
    };

    if slot == 0 {
        rotation = rotation.rotate_counter_clockwise();
    }

    match viewer {
        Compass::North if orientation == Orientation::Ceiling => {
            rotation.rotate_clockwise().rotate_clockwise()
        }
        Compass::East => rotation.rotate_clockwise(),
        Compass::South if orientation == Orientation::Floor => {
            rotation.rotate_clockwise().rotate_clockwise()
        }
        Compass::West => rotation.rotate_counter_clockwise(),
        Compass::North | Compass::South => rotation,
    }
}

/// Ordered placements for every frame of a poster mounted on one surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementPlan {
    orientation: Orientation,
    viewer: Compass,
    placements: Vec<Placement>,
}

impl PlacementPlan {
    /// Plan the placement of `grid` on a surface.
    ///
    /// `viewer` only affects rotation on floors and ceilings.
    pub fn new(grid: &PosterGrid, orientation: Orientation, viewer: Compass) -> Result<Self, PosterError> {
        if !grid.has_layout() {
            return Err(PosterError::NoLayout);
        }

        let placements = (0..grid.tile_count())
            .map(|slot| {
                Ok(Placement {
                    slot,
                    tile: grid.tile_for_slot(slot, orientation)?,
                    rotation: frame_rotation(slot, orientation, viewer),
                })
            })
            .collect::<Result<Vec<_>, PosterError>>()?;

        tracing::debug!(
            %orientation,
            %viewer,
            columns = grid.columns(),
            rows = grid.rows(),
            frames = placements.len(),
            "Planned poster placement"
        );

        Ok(Self {
            orientation,
            viewer,
            placements,
        })
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn viewer(&self) -> Compass {
        self.viewer
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn at_slot(&self, slot: usize) -> Option<&Placement> {
        self.placements.get(slot)
    }

    /// Placement holding `tile`, used when a frame is removed.
    pub fn find_tile(&self, tile: TileId) -> Result<&Placement, PosterError> {
        self.placements
            .iter()
            .find(|placement| placement.tile == tile)
            .ok_or(PosterError::TileNotFound(tile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PosterMeta;

    #[test]
    fn test_wall_frames_are_upright() {
        for facing in Compass::ALL {
            for viewer in Compass::ALL {
                for slot in 0..4 {
                    assert_eq!(
                        frame_rotation(slot, Orientation::wall(facing), viewer),
                        FrameRotation::None
                    );
                }
            }
        }
    }

    #[test]
    fn test_floor_rotations() {
        use FrameRotation::*;
        let floor = Orientation::Floor;

        assert_eq!(frame_rotation(1, floor, Compass::North), None);
        assert_eq!(frame_rotation(1, floor, Compass::East), Clockwise45);
        assert_eq!(frame_rotation(1, floor, Compass::South), Clockwise);
        assert_eq!(frame_rotation(1, floor, Compass::West), CounterClockwise45);

        assert_eq!(frame_rotation(0, floor, Compass::North), CounterClockwise45);
        assert_eq!(frame_rotation(0, floor, Compass::East), None);
        assert_eq!(frame_rotation(0, floor, Compass::South), Clockwise45);
        assert_eq!(frame_rotation(0, floor, Compass::West), CounterClockwise);
    }

    #[test]
    fn test_ceiling_rotations() {
        use FrameRotation::*;
        let ceiling = Orientation::Ceiling;

        assert_eq!(frame_rotation(1, ceiling, Compass::North), CounterClockwise);
        assert_eq!(frame_rotation(1, ceiling, Compass::East), Flipped45);
        assert_eq!(frame_rotation(1, ceiling, Compass::South), Flipped);
        assert_eq!(frame_rotation(1, ceiling, Compass::West), Clockwise135);

        assert_eq!(frame_rotation(0, ceiling, Compass::North), Flipped45);
        assert_eq!(frame_rotation(0, ceiling, Compass::West), Clockwise);
    }

    #[test]
    fn test_plan_requires_layout() {
        let grid = PosterGrid::unstructured(vec![1, 2], PosterMeta::default()).unwrap();
        assert_eq!(
            PlacementPlan::new(&grid, Orientation::North, Compass::North),
            Err(PosterError::NoLayout)
        );
    }

    #[test]
    fn test_find_tile() {
        let grid = PosterGrid::new(2, 2, vec![1, 2, 3, 4], PosterMeta::default()).unwrap();
        let plan = PlacementPlan::new(&grid, Orientation::Floor, Compass::East).unwrap();

        assert_eq!(plan.len(), 4);
        // bottom-left cell (index 2) is scanned first
        assert_eq!(plan.find_tile(3).unwrap().slot, 0);
        assert_eq!(plan.find_tile(9), Err(PosterError::TileNotFound(9)));
    }
}
