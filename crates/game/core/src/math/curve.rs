//! Keyframed curves sampled by elapsed time.
//!
//! The item interpolation and glow-pulse systems are driven by curve assets
//! in the host project; here they are plain keyframe lists with linear
//! interpolation and clamped ends, which is enough to reproduce the motion.

/// Piecewise-linear float curve. Keys must be sorted by time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloatCurve {
    keys: Vec<(f32, f32)>,
}

impl FloatCurve {
    /// Builds a curve from `(time, value)` keys sorted by time.
    pub fn new(keys: Vec<(f32, f32)>) -> Self {
        debug_assert!(keys.windows(2).all(|w| w[0].0 <= w[1].0));
        Self { keys }
    }

    /// Samples the curve at `time`, clamping outside the keyed range.
    pub fn sample(&self, time: f32) -> f32 {
        let Some(first) = self.keys.first() else {
            return 0.0;
        };
        if time <= first.0 {
            return first.1;
        }
        let last = self.keys[self.keys.len() - 1];
        if time >= last.0 {
            return last.1;
        }
        for window in self.keys.windows(2) {
            let (t0, v0) = window[0];
            let (t1, v1) = window[1];
            if time <= t1 {
                let span = t1 - t0;
                if span <= f32::EPSILON {
                    return v1;
                }
                let alpha = (time - t0) / span;
                return v0 + alpha * (v1 - v0);
            }
        }
        last.1
    }

    /// Time of the last key; zero for an empty curve.
    pub fn duration(&self) -> f32 {
        self.keys.last().map(|key| key.0).unwrap_or(0.0)
    }
}

/// Three-component curve used for the glow-pulse material parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VectorCurve {
    keys: Vec<(f32, [f32; 3])>,
}

impl VectorCurve {
    /// Builds a curve from `(time, [x, y, z])` keys sorted by time.
    pub fn new(keys: Vec<(f32, [f32; 3])>) -> Self {
        debug_assert!(keys.windows(2).all(|w| w[0].0 <= w[1].0));
        Self { keys }
    }

    /// Samples the curve at `time`, clamping outside the keyed range.
    pub fn sample(&self, time: f32) -> [f32; 3] {
        let Some(first) = self.keys.first() else {
            return [0.0; 3];
        };
        if time <= first.0 {
            return first.1;
        }
        let last = self.keys[self.keys.len() - 1];
        if time >= last.0 {
            return last.1;
        }
        for window in self.keys.windows(2) {
            let (t0, v0) = window[0];
            let (t1, v1) = window[1];
            if time <= t1 {
                let span = t1 - t0;
                if span <= f32::EPSILON {
                    return v1;
                }
                let alpha = (time - t0) / span;
                return [
                    v0[0] + alpha * (v1[0] - v0[0]),
                    v0[1] + alpha * (v1[1] - v0[1]),
                    v0[2] + alpha * (v1[2] - v0[2]),
                ];
            }
        }
        last.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_between_keys() {
        let curve = FloatCurve::new(vec![(0.0, 0.0), (1.0, 2.0)]);
        assert!((curve.sample(0.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn clamps_outside_range() {
        let curve = FloatCurve::new(vec![(0.0, 1.0), (0.7, 0.2)]);
        assert_eq!(curve.sample(-1.0), 1.0);
        assert_eq!(curve.sample(5.0), 0.2);
        assert!((curve.duration() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn empty_curve_samples_zero() {
        let curve = FloatCurve::new(Vec::new());
        assert_eq!(curve.sample(0.3), 0.0);
        let vector = VectorCurve::new(Vec::new());
        assert_eq!(vector.sample(0.3), [0.0; 3]);
    }
}
