//! Layout configuration.

use glam::Vec3;

/// Geometry parameters for every layout algorithm.
///
/// Angles are in degrees. Values are not validated: zero or negative
/// distances produce collapsed or mirrored layouts, and only the grid column
/// count is clamped (to at least one).
///
/// Use the builder methods to customize settings:
///
/// ```
/// use cardkit::CardLayoutSettings;
///
/// let settings = CardLayoutSettings::default()
///     .with_spacing(1.5)
///     .with_arc_radius(8.0)
///     .with_grid_columns(4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLayoutSettings {
    /// Distance between neighbouring cards in line and grid layouts.
    pub spacing: f32,
    /// Radius of the fan arc.
    pub arc_radius: f32,
    /// Angle between neighbouring cards in a fan, in degrees.
    pub arc_angle_step: f32,
    /// Cards per grid row.
    pub grid_columns: i32,
    /// Distance between grid rows.
    pub row_spacing: f32,
    /// Per-card diagonal offset in a stack.
    pub stack_step: f32,
    /// Radius of the disk cards are scattered in.
    pub scattered_radius: f32,
    /// Maximum scattered tilt either way around the z axis, in degrees.
    pub scattered_rotation_range: f32,
    /// Maximum random offset per axis added to every position.
    pub position_jitter: Vec3,
    /// Maximum random tilt per axis, in degrees, added to every rotation.
    pub rotation_jitter: Vec3,
}

impl Default for CardLayoutSettings {
    fn default() -> Self {
        Self {
            spacing: 0.8,
            arc_radius: 5.0,
            arc_angle_step: 8.0,
            grid_columns: 5,
            row_spacing: 1.2,
            stack_step: 0.02,
            scattered_radius: 1.5,
            scattered_rotation_range: 30.0,
            position_jitter: Vec3::ZERO,
            rotation_jitter: Vec3::ZERO,
        }
    }
}

impl CardLayoutSettings {
    /// Sets the card spacing.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::CardLayoutSettings;
    ///
    /// let settings = CardLayoutSettings::default().with_spacing(1.0);
    /// assert_eq!(settings.spacing, 1.0);
    /// ```
    #[must_use]
    pub const fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the fan arc radius.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::CardLayoutSettings;
    ///
    /// let settings = CardLayoutSettings::default().with_arc_radius(3.0);
    /// assert_eq!(settings.arc_radius, 3.0);
    /// ```
    #[must_use]
    pub const fn with_arc_radius(mut self, radius: f32) -> Self {
        self.arc_radius = radius;
        self
    }

    /// Sets the angle between neighbouring fan cards, in degrees.
    ///
    /// The whole fan never spans more than
    /// [`MAX_FAN_ANGLE`](crate::layout::MAX_FAN_ANGLE) degrees.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::CardLayoutSettings;
    ///
    /// let settings = CardLayoutSettings::default().with_arc_angle_step(12.0);
    /// assert_eq!(settings.arc_angle_step, 12.0);
    /// ```
    #[must_use]
    pub const fn with_arc_angle_step(mut self, degrees: f32) -> Self {
        self.arc_angle_step = degrees;
        self
    }

    /// Sets the number of cards per grid row.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::CardLayoutSettings;
    ///
    /// let settings = CardLayoutSettings::default().with_grid_columns(3);
    /// assert_eq!(settings.grid_columns, 3);
    /// ```
    #[must_use]
    pub const fn with_grid_columns(mut self, columns: i32) -> Self {
        self.grid_columns = columns;
        self
    }

    /// Sets the distance between grid rows.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::CardLayoutSettings;
    ///
    /// let settings = CardLayoutSettings::default().with_row_spacing(2.0);
    /// assert_eq!(settings.row_spacing, 2.0);
    /// ```
    #[must_use]
    pub const fn with_row_spacing(mut self, spacing: f32) -> Self {
        self.row_spacing = spacing;
        self
    }

    /// Sets the per-card stack offset.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::CardLayoutSettings;
    ///
    /// let settings = CardLayoutSettings::default().with_stack_step(0.05);
    /// assert_eq!(settings.stack_step, 0.05);
    /// ```
    #[must_use]
    pub const fn with_stack_step(mut self, step: f32) -> Self {
        self.stack_step = step;
        self
    }

    /// Sets the scatter disk radius.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::CardLayoutSettings;
    ///
    /// let settings = CardLayoutSettings::default().with_scattered_radius(4.0);
    /// assert_eq!(settings.scattered_radius, 4.0);
    /// ```
    #[must_use]
    pub const fn with_scattered_radius(mut self, radius: f32) -> Self {
        self.scattered_radius = radius;
        self
    }

    /// Sets the scattered tilt range, in degrees.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::CardLayoutSettings;
    ///
    /// let settings = CardLayoutSettings::default().with_scattered_rotation_range(45.0);
    /// assert_eq!(settings.scattered_rotation_range, 45.0);
    /// ```
    #[must_use]
    pub const fn with_scattered_rotation_range(mut self, degrees: f32) -> Self {
        self.scattered_rotation_range = degrees;
        self
    }

    /// Sets the per-axis position jitter.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::CardLayoutSettings;
    /// use glam::Vec3;
    ///
    /// let settings = CardLayoutSettings::default().with_position_jitter(Vec3::splat(0.1));
    /// assert_eq!(settings.position_jitter, Vec3::splat(0.1));
    /// ```
    #[must_use]
    pub const fn with_position_jitter(mut self, jitter: Vec3) -> Self {
        self.position_jitter = jitter;
        self
    }

    /// Sets the per-axis rotation jitter, in degrees.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::CardLayoutSettings;
    /// use glam::Vec3;
    ///
    /// let settings = CardLayoutSettings::default().with_rotation_jitter(Vec3::new(0.0, 0.0, 5.0));
    /// assert_eq!(settings.rotation_jitter.z, 5.0);
    /// ```
    #[must_use]
    pub const fn with_rotation_jitter(mut self, jitter: Vec3) -> Self {
        self.rotation_jitter = jitter;
        self
    }

    /// Returns the grid column count, floored to at least one.
    #[must_use]
    pub const fn effective_columns(&self) -> usize {
        if self.grid_columns < 1 {
            1
        } else {
            self.grid_columns as usize
        }
    }
}
