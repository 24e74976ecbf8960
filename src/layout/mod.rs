//! Card layout geometry.
//!
//! Given a card count and [`CardLayoutSettings`], the layout functions return
//! one position and one rotation per card, index-aligned with presentation
//! order. Line, slots, stack, grid and fan layouts are deterministic.
//! Scattered layouts and jitter draw from the random source passed in, so a
//! seeded generator reproduces them exactly.
//!
//! # Example
//!
//! ```
//! use cardkit::{CardLayoutSettings, LayoutType, layout};
//! use glam::Vec3;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let settings = CardLayoutSettings::default().with_spacing(1.0);
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let positions = layout::calculate_positions(LayoutType::Line, 3, &settings, &mut rng);
//! assert_eq!(positions, [Vec3::new(-1.0, 0.0, 0.0), Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)]);
//! ```

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use glam::{Quat, Vec3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::sync::Mutex;

mod jitter;
mod math;
mod positions;
mod rotations;
mod settings;

pub use settings::CardLayoutSettings;

/// Widest angle a fan may span, in degrees.
pub const MAX_FAN_ANGLE: f32 = 60.0;

/// Layout algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutType {
    /// A centered row.
    #[default]
    Line,
    /// Fixed slots; laid out like [`LayoutType::Line`].
    Slots,
    /// A diagonal pile.
    Stack,
    /// Centered rows of a fixed width.
    Grid,
    /// A hand held as an arc.
    Fan,
    /// Random positions and tilts within a disk.
    Scattered,
}

impl LayoutType {
    /// Parses a layout name, ignoring ASCII case.
    ///
    /// Unrecognized names fall back to [`LayoutType::Line`].
    ///
    /// ```
    /// use cardkit::LayoutType;
    ///
    /// assert_eq!(LayoutType::from_name("fan"), LayoutType::Fan);
    /// assert_eq!(LayoutType::from_name("spiral"), LayoutType::Line);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        const NAMED: [(&str, LayoutType); 6] = [
            ("line", LayoutType::Line),
            ("slots", LayoutType::Slots),
            ("stack", LayoutType::Stack),
            ("grid", LayoutType::Grid),
            ("fan", LayoutType::Fan),
            ("scattered", LayoutType::Scattered),
        ];

        NAMED
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map_or_else(
                || {
                    debug!(layout = name, "unknown layout name, using line");
                    Self::Line
                },
                |&(_, layout)| layout,
            )
    }

    /// Returns whether the layout draws from the random source even without
    /// jitter.
    #[must_use]
    pub const fn is_random(self) -> bool {
        matches!(self, Self::Scattered)
    }
}

/// Where and how one card is placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlacement {
    /// Card position.
    pub position: Vec3,
    /// Card rotation.
    pub rotation: Quat,
}

/// Fan angles in degrees, card 0 at minus half the total spread.
fn fan_angles(count: usize, arc_angle_step: f32) -> impl Iterator<Item = f32> {
    let gaps = count.saturating_sub(1);
    let total = (arc_angle_step * gaps as f32).min(MAX_FAN_ANGLE);
    let per_card = total / gaps.max(1) as f32;

    (0..count).map(move |i| -total / 2.0 + i as f32 * per_card)
}

/// Computes the position of each of `card_count` cards.
///
/// Returns an empty vector for zero cards. Position jitter is applied after
/// the layout when `settings.position_jitter` is non-zero.
pub fn calculate_positions<R: Rng + ?Sized>(
    layout: LayoutType,
    card_count: usize,
    settings: &CardLayoutSettings,
    rng: &mut R,
) -> Vec<Vec3> {
    if card_count == 0 {
        return Vec::new();
    }

    if layout == LayoutType::Grid && settings.grid_columns < 1 {
        debug!(columns = settings.grid_columns, "grid columns clamped to 1");
    }

    let mut positions = match layout {
        LayoutType::Line | LayoutType::Slots => positions::line(card_count, settings.spacing),
        LayoutType::Stack => positions::stack(card_count, settings.stack_step),
        LayoutType::Grid => positions::grid(card_count, settings),
        LayoutType::Fan => positions::fan(card_count, settings),
        LayoutType::Scattered => {
            positions::scattered(card_count, settings.scattered_radius, rng)
        }
    };

    jitter::positions(&mut positions, settings.position_jitter, rng);
    trace!(?layout, card_count, "positions calculated");
    positions
}

/// Computes the rotation of each of `card_count` cards.
///
/// Only fan and scattered layouts tilt cards. Rotation jitter is composed on
/// top when `settings.rotation_jitter` is non-zero.
pub fn calculate_rotations<R: Rng + ?Sized>(
    layout: LayoutType,
    card_count: usize,
    settings: &CardLayoutSettings,
    rng: &mut R,
) -> Vec<Quat> {
    if card_count == 0 {
        return Vec::new();
    }

    let mut rotations = match layout {
        LayoutType::Fan => rotations::fan(card_count, settings.arc_angle_step),
        LayoutType::Scattered => {
            rotations::scattered(card_count, settings.scattered_rotation_range, rng)
        }
        LayoutType::Line | LayoutType::Slots | LayoutType::Stack | LayoutType::Grid => {
            rotations::flat(card_count)
        }
    };

    jitter::rotations(&mut rotations, settings.rotation_jitter, rng);
    trace!(?layout, card_count, "rotations calculated");
    rotations
}

/// Computes positions and then rotations, paired per card.
pub fn calculate_placements<R: Rng + ?Sized>(
    layout: LayoutType,
    card_count: usize,
    settings: &CardLayoutSettings,
    rng: &mut R,
) -> Vec<CardPlacement> {
    let positions = calculate_positions(layout, card_count, settings, rng);
    let rotations = calculate_rotations(layout, card_count, settings, rng);

    positions
        .into_iter()
        .zip(rotations)
        .map(|(position, rotation)| CardPlacement { position, rotation })
        .collect()
}

/// A layout calculator owning a seeded random source.
///
/// The generator sits behind a lock, so one engine can serve several
/// threads. Results for random layouts then depend on call order.
///
/// ```
/// use cardkit::{CardLayoutEngine, CardLayoutSettings, LayoutType};
///
/// let settings = CardLayoutSettings::default();
/// let a = CardLayoutEngine::new(3).calculate_positions(LayoutType::Scattered, 5, &settings);
/// let b = CardLayoutEngine::new(3).calculate_positions(LayoutType::Scattered, 5, &settings);
/// assert_eq!(a, b);
/// ```
pub struct CardLayoutEngine {
    rng: Mutex<ChaCha8Rng>,
}

impl CardLayoutEngine {
    /// Creates an engine with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Restarts the random sequence from `seed`.
    pub fn reseed(&self, seed: u64) {
        self.rng
            .with(|rng| *rng = ChaCha8Rng::seed_from_u64(seed));
    }

    /// See [`calculate_positions`].
    pub fn calculate_positions(
        &self,
        layout: LayoutType,
        card_count: usize,
        settings: &CardLayoutSettings,
    ) -> Vec<Vec3> {
        self.rng
            .with(|rng| calculate_positions(layout, card_count, settings, rng))
    }

    /// See [`calculate_rotations`].
    pub fn calculate_rotations(
        &self,
        layout: LayoutType,
        card_count: usize,
        settings: &CardLayoutSettings,
    ) -> Vec<Quat> {
        self.rng
            .with(|rng| calculate_rotations(layout, card_count, settings, rng))
    }

    /// See [`calculate_placements`].
    pub fn calculate_placements(
        &self,
        layout: LayoutType,
        card_count: usize,
        settings: &CardLayoutSettings,
    ) -> Vec<CardPlacement> {
        self.rng
            .with(|rng| calculate_placements(layout, card_count, settings, rng))
    }
}

impl fmt::Debug for CardLayoutEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardLayoutEngine").finish_non_exhaustive()
    }
}
