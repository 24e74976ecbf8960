//! Random perturbation applied after a layout is computed.

use glam::{EulerRot, Quat, Vec3};
use rand::Rng;

/// Samples uniformly from `[-extent, extent)`.
///
/// Zero yields zero and a negative extent mirrors the interval, so this never
/// panics the way an empty `random_range` would.
pub(super) fn symmetric<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    (rng.random::<f32>() * 2.0 - 1.0) * extent
}

/// Offsets every position by up to `jitter` on each axis.
///
/// A zero jitter leaves positions untouched and draws nothing from `rng`.
pub(super) fn positions<R: Rng + ?Sized>(positions: &mut [Vec3], jitter: Vec3, rng: &mut R) {
    if jitter == Vec3::ZERO {
        return;
    }

    for position in positions {
        *position += Vec3::new(
            symmetric(rng, jitter.x),
            symmetric(rng, jitter.y),
            symmetric(rng, jitter.z),
        );
    }
}

/// Composes every rotation with a tilt of up to `jitter` degrees per axis.
///
/// A zero jitter leaves rotations untouched and draws nothing from `rng`.
pub(super) fn rotations<R: Rng + ?Sized>(rotations: &mut [Quat], jitter: Vec3, rng: &mut R) {
    if jitter == Vec3::ZERO {
        return;
    }

    for rotation in rotations {
        let x = symmetric(rng, jitter.x).to_radians();
        let y = symmetric(rng, jitter.y).to_radians();
        let z = symmetric(rng, jitter.z).to_radians();
        // z, then x, then y about the world axes.
        *rotation *= Quat::from_euler(EulerRot::YXZ, y, x, z);
    }
}
