extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use glam::Quat;
use rand::Rng;

use super::fan_angles;
use super::jitter::symmetric;

/// Each card tilts against its angular offset on the arc.
pub(super) fn fan(count: usize, arc_angle_step: f32) -> Vec<Quat> {
    fan_angles(count, arc_angle_step)
        .map(|degrees| Quat::from_rotation_z(-degrees.to_radians()))
        .collect()
}

pub(super) fn scattered<R: Rng + ?Sized>(count: usize, range: f32, rng: &mut R) -> Vec<Quat> {
    (0..count)
        .map(|_| Quat::from_rotation_z(symmetric(rng, range).to_radians()))
        .collect()
}

pub(super) fn flat(count: usize) -> Vec<Quat> {
    vec![Quat::IDENTITY; count]
}
