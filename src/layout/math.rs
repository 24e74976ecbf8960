#[cfg(feature = "std")]
pub(super) fn sin_cos(radians: f32) -> (f32, f32) {
    radians.sin_cos()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub(super) fn sin_cos(radians: f32) -> (f32, f32) {
    (libm::sinf(radians), libm::cosf(radians))
}

#[cfg(feature = "std")]
pub(super) fn sqrt(value: f32) -> f32 {
    value.sqrt()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub(super) fn sqrt(value: f32) -> f32 {
    libm::sqrtf(value)
}
