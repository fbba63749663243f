//! Routines spanning more than one primitive: intersections and axis tests.

pub mod axis;
pub mod circle_intersect;
pub mod line_line;
