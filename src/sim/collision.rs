//! Proximity tests for round entities
//!
//! Every entity is a disk; sizes are diameters, these helpers take radii.

use glam::Vec2;

/// Do two disks overlap (touching excluded)?
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    (a_pos - b_pos).length() < a_radius + b_radius
}

/// Is `point` strictly inside the disk?
#[inline]
pub fn contains_point(center: Vec2, radius: f32, point: Vec2) -> bool {
    (point - center).length() < radius
}
