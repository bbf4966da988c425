//! Reference map color table.
//!
//! Entry order matters: nearest-color ties resolve to the lower index, so
//! reordering this table changes dithered output.

use crate::color::Color;

/// The 58 base colors of the reference map renderer, in reference order.
pub const MAP_COLORS: [Color; 58] = [
    Color::new(127, 178, 56),
    Color::new(247, 233, 163),
    Color::new(188, 188, 188),
    Color::new(255, 0, 0),
    Color::new(160, 160, 225),
    Color::new(167, 167, 167),
    Color::new(0, 124, 0),
    Color::new(255, 255, 255),
    Color::new(164, 168, 184),
    Color::new(151, 109, 77),
    Color::new(112, 112, 112),
    Color::new(64, 64, 255),
    Color::new(143, 119, 72),
    Color::new(255, 252, 245),
    Color::new(216, 127, 51),
    Color::new(178, 76, 216),
    Color::new(102, 153, 216),
    Color::new(229, 229, 51),
    Color::new(127, 204, 25),
    Color::new(242, 127, 165),
    Color::new(76, 76, 76),
    Color::new(153, 153, 153),
    Color::new(76, 127, 153),
    Color::new(127, 63, 178),
    Color::new(51, 76, 178),
    Color::new(102, 76, 51),
    Color::new(102, 127, 5),
    Color::new(153, 51, 51),
    Color::new(25, 25, 25),
    Color::new(250, 238, 77),
    Color::new(92, 219, 213),
    Color::new(74, 128, 255),
    Color::new(0, 217, 58),
    Color::new(129, 86, 49),
    Color::new(112, 2, 0),
    Color::new(209, 177, 161),
    Color::new(159, 82, 36),
    Color::new(149, 87, 108),
    Color::new(112, 108, 138),
    Color::new(186, 113, 36),
    Color::new(103, 117, 53),
    Color::new(160, 77, 78),
    Color::new(57, 41, 35),
    Color::new(135, 107, 98),
    Color::new(87, 92, 92),
    Color::new(122, 73, 88),
    Color::new(76, 62, 92),
    Color::new(76, 50, 35),
    Color::new(76, 82, 42),
    Color::new(142, 60, 46),
    Color::new(37, 22, 16),
    Color::new(189, 48, 49),
    Color::new(148, 63, 97),
    Color::new(92, 25, 29),
    Color::new(22, 126, 134),
    Color::new(58, 142, 140),
    Color::new(86, 44, 62),
    Color::new(20, 180, 133),
];
