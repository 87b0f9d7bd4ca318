//! Small math helpers shared by the state machines.
//!
//! These mirror the interpolation semantics the combat and item code relies
//! on: exponential-decay smoothing (`interp_to`), clamped range remapping,
//! and keyframed curves sampled by elapsed time.
mod curve;

pub use curve::{FloatCurve, VectorCurve};

/// RGBA color in linear space, used for rarity glow/widget tints.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl LinearColor {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Plain 3-component vector. Z is up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const UP: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Length of the horizontal (XY) component.
    pub fn horizontal_length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn normalized(self) -> Self {
        let len = self.length();
        if len <= f32::EPSILON {
            Self::ZERO
        } else {
            self.scaled(1.0 / len)
        }
    }

    /// Unit vector pointing along `yaw_degrees` in the horizontal plane.
    pub fn from_yaw(yaw_degrees: f32) -> Self {
        let (sin, cos) = yaw_degrees.to_radians().sin_cos();
        Self::new(cos, sin, 0.0)
    }

    /// Rotates this vector around `axis` by `degrees` (Rodrigues' formula).
    /// `axis` must be unit length.
    pub fn rotate_around(self, axis: Self, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let dot = self.x * axis.x + self.y * axis.y + self.z * axis.z;
        let cross = Self::new(
            axis.y * self.z - axis.z * self.y,
            axis.z * self.x - axis.x * self.z,
            axis.x * self.y - axis.y * self.x,
        );
        self.scaled(cos)
            .add(cross.scaled(sin))
            .add(axis.scaled(dot * (1.0 - cos)))
    }
}

/// Exponential-decay interpolation toward `target`.
///
/// `value += (target - value) * clamp(speed * dt, 0, 1)`; a non-positive
/// speed snaps to the target. Frame-rate dependent by design, matching the
/// smoothing semantics the crosshair and camera code expects.
pub fn interp_to(current: f32, target: f32, dt: f32, speed: f32) -> f32 {
    if speed <= 0.0 {
        return target;
    }
    current + (target - current) * (speed * dt).clamp(0.0, 1.0)
}

/// Remaps `value` from `[in_min, in_max]` to `[out_min, out_max]`, clamping
/// to the output range.
pub fn map_range_clamped(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    if (in_max - in_min).abs() <= f32::EPSILON {
        return out_min;
    }
    let alpha = ((value - in_min) / (in_max - in_min)).clamp(0.0, 1.0);
    out_min + alpha * (out_max - out_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interp_to_converges_and_clamps() {
        // One big step cannot overshoot: alpha is clamped to 1.
        assert_eq!(interp_to(0.0, 10.0, 1.0, 5.0), 10.0);

        let mut value = 0.0;
        for _ in 0..100 {
            value = interp_to(value, 1.0, 1.0 / 60.0, 30.0);
        }
        assert!((value - 1.0).abs() < 1e-4);
    }

    #[test]
    fn map_range_clamps_outside_input() {
        assert_eq!(map_range_clamped(-5.0, 0.0, 600.0, 0.0, 1.0), 0.0);
        assert_eq!(map_range_clamped(900.0, 0.0, 600.0, 0.0, 1.0), 1.0);
        assert!((map_range_clamped(300.0, 0.0, 600.0, 0.0, 1.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn rotate_around_up_turns_in_plane() {
        let v = Vec3::new(1.0, 0.0, 0.0);
        let rotated = v.rotate_around(Vec3::UP, 90.0);
        assert!(rotated.x.abs() < 1e-6);
        assert!((rotated.y - 1.0).abs() < 1e-6);
    }
}
