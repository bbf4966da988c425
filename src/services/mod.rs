pub mod import;
pub mod placement;

pub use import::{ImportService, ImportedPoster};
pub use placement::{frame_rotation, Placement, PlacementPlan};
