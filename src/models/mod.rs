pub mod config;
pub mod orientation;
pub mod poster;
pub mod record;

pub use config::{AppConfig, CONFIG_ENV};
pub use orientation::{Compass, FrameRotation, Orientation, ParseDirectionError};
pub use poster::{PosterGrid, PosterMeta, TileId};
pub use record::{PosterRecord, RecordFormat};
