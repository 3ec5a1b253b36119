//! Baseline-wander removal with a first-order Butterworth high-pass.
//!
//! Design
//! - Analog prototype H(s) = s / (s + ωc), discretized with the bilinear
//!   transform and frequency prewarping.
//! - Applied as a single cascaded second-order section in direct form II
//!   transposed, zero initial state; the stable form, even though one
//!   section would also fit a first-order difference equation.
//! - The row-energy signal is filtered independently per channel.
//!
//! The default design (cutoff 1 Hz at a nominal 5 Hz sample rate, i.e.
//! 0.4 × Nyquist) removes the slow drift the wide box kernel leaves in
//! the row sums while keeping the sharp gridline responses.

/// One biquad section: y = (b0 x + b1 x⁻¹ + b2 x⁻²) / (1 + a1 y⁻¹ + a2 y⁻²).
#[derive(Clone, Copy, Debug)]
pub struct HighPass {
    b: [f64; 3],
    a: [f64; 2],
}

impl HighPass {
    /// First-order Butterworth high-pass, `cutoff_hz` at `sample_rate_hz`.
    ///
    /// `cutoff_hz` must lie strictly between 0 and the Nyquist frequency.
    pub fn butterworth(cutoff_hz: f64, sample_rate_hz: f64) -> Self {
        debug_assert!(cutoff_hz > 0.0 && cutoff_hz < sample_rate_hz / 2.0);
        // prewarped normalized cutoff; wn in (0, 1) of Nyquist
        let wn = cutoff_hz / (sample_rate_hz / 2.0);
        let c = (std::f64::consts::PI * wn / 2.0).tan();
        let b0 = 1.0 / (1.0 + c);
        Self {
            b: [b0, -b0, 0.0],
            a: [(c - 1.0) / (1.0 + c), 0.0],
        }
    }

    /// Filter one channel, zero initial state, output length == input length.
    pub fn filter(&self, input: &[f32]) -> Vec<f32> {
        let mut z = [0.0f64; 2];
        let mut out = Vec::with_capacity(input.len());
        for &xin in input {
            let x = xin as f64;
            let y = self.b[0] * x + z[0];
            z[0] = self.b[1] * x - self.a[0] * y + z[1];
            z[1] = self.b[2] * x - self.a[1] * y;
            out.push(y as f32);
        }
        out
    }
}

/// Remove baseline drift from a multi-channel row signal, channel by
/// channel, with the default 1 Hz / 5 Hz Butterworth design.
pub fn remove_baseline_wander(signal: &[[f32; 3]], cutoff_hz: f64, sample_rate_hz: f64) -> Vec<[f32; 3]> {
    let hp = HighPass::butterworth(cutoff_hz, sample_rate_hz);
    let mut out = vec![[0.0f32; 3]; signal.len()];
    for ch in 0..3 {
        let channel: Vec<f32> = signal.iter().map(|v| v[ch]).collect();
        for (slot, y) in out.iter_mut().zip(hp.filter(&channel)) {
            slot[ch] = y;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficients_match_reference_design() {
        // scipy.signal.butter(1, 1, 'hp', fs=5, output='sos')
        let hp = HighPass::butterworth(1.0, 5.0);
        let c = (0.2 * std::f64::consts::PI).tan();
        assert!((hp.b[0] - 1.0 / (1.0 + c)).abs() < 1e-12);
        assert!((hp.b[0] - 0.579_192_2).abs() < 1e-6);
        assert!((hp.b[1] + hp.b[0]).abs() < 1e-12);
        assert!((hp.a[0] + 0.158_384_44).abs() < 1e-6);
    }

    #[test]
    fn constant_input_decays_to_zero() {
        let hp = HighPass::butterworth(1.0, 5.0);
        let out = hp.filter(&[10.0; 200]);
        // DC is rejected: the tail must be essentially zero
        assert!(out[0] > 1.0, "first sample passes the step edge");
        assert!(out.last().unwrap().abs() < 1e-3, "tail={:?}", out.last());
    }

    #[test]
    fn impulse_response_matches_difference_equation() {
        let hp = HighPass::butterworth(1.0, 5.0);
        let out = hp.filter(&[1.0, 0.0, 0.0, 0.0]);
        let b0 = 1.0 / (1.0 + (0.2 * std::f64::consts::PI).tan());
        let a1 = -(1.0 - (0.2 * std::f64::consts::PI).tan()) / (1.0 + (0.2 * std::f64::consts::PI).tan());
        let expected = [b0, -b0 - a1 * b0, -a1 * (-b0 - a1 * b0)];
        for i in 0..3 {
            assert!(
                (out[i] as f64 - expected[i]).abs() < 1e-6,
                "sample {i}: {} vs {}",
                out[i],
                expected[i]
            );
        }
    }

    #[test]
    fn channels_are_filtered_independently() {
        let signal = vec![[1.0f32, 0.0, -1.0]; 50];
        let out = remove_baseline_wander(&signal, 1.0, 5.0);
        assert_eq!(out.len(), 50);
        let last = out.last().unwrap();
        for c in 0..3 {
            assert!(last[c].abs() < 1e-3);
        }
        // first sample keeps the per-channel sign of the step
        assert!(out[0][0] > 0.0);
        assert_eq!(out[0][1], 0.0);
        assert!(out[0][2] < 0.0);
    }
}
