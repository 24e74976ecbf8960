//! Per-algorithm card positions. Callers guarantee `count >= 1`.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::math::{sin_cos, sqrt};
use super::{CardLayoutSettings, fan_angles};

/// Evenly spaced along x, centered on the origin.
pub(super) fn line(count: usize, spacing: f32) -> Vec<Vec3> {
    let total_width = (count - 1) as f32 * spacing;

    (0..count)
        .map(|i| Vec3::new(-total_width / 2.0 + i as f32 * spacing, 0.0, 0.0))
        .collect()
}

/// Diagonal pile offset.
pub(super) fn stack(count: usize, step: f32) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let offset = i as f32 * step;
            Vec3::new(offset, offset, 0.0)
        })
        .collect()
}

/// Rows of `columns` cards. Each row is centered on its own card count and
/// the block of rows is centered vertically, first row on top.
pub(super) fn grid(count: usize, settings: &CardLayoutSettings) -> Vec<Vec3> {
    let columns = settings.effective_columns();
    let rows = count.div_ceil(columns);
    let total_height = (rows - 1) as f32 * settings.row_spacing;

    (0..count)
        .map(|i| {
            let row = i / columns;
            let column = i % columns;
            let in_row = columns.min(count - row * columns);
            let row_width = (in_row - 1) as f32 * settings.spacing;

            Vec3::new(
                -row_width / 2.0 + column as f32 * settings.spacing,
                total_height / 2.0 - row as f32 * settings.row_spacing,
                0.0,
            )
        })
        .collect()
}

/// Circular arc whose lowest point sits at the origin.
pub(super) fn fan(count: usize, settings: &CardLayoutSettings) -> Vec<Vec3> {
    if count == 1 {
        return vec![Vec3::ZERO];
    }

    let radius = settings.arc_radius;
    fan_angles(count, settings.arc_angle_step)
        .map(|degrees| {
            let (sin, cos) = sin_cos(degrees.to_radians());
            Vec3::new(sin * radius, -cos * radius + radius, 0.0)
        })
        .collect()
}

/// Uniform samples inside a disk in the xy plane.
pub(super) fn scattered<R: Rng + ?Sized>(count: usize, radius: f32, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let (sin, cos) = sin_cos(rng.random::<f32>() * TAU);
            let distance = radius * sqrt(rng.random::<f32>());
            Vec3::new(cos * distance, sin * distance, 0.0)
        })
        .collect()
}
