use crate::dsp::waveform::{sample_of, Waveform};

/*
Waveform Morphing
=================

A morph position is a single control value that walks across the waveform
ordering: the integer part picks the "low" waveform, the next one up is the
"high" waveform, and the fractional part is how far we have faded toward it.

    position   low        high       fraction
    0.0        Sine       Square     0.0       pure sine
    0.5        Sine       Square     0.5       half sine, half square
    1.5        Square     Triangle   0.5
    2.0        Triangle   Sawtooth   0.0       pure triangle
    3.0        Sawtooth   Sawtooth   0.0       pure sawtooth

The crossfade is linear, not equal-power:

    mixed = low * (1 - fraction) + high * fraction

so two uncorrelated shapes at fraction 0.5 come out a little quieter than
either on its own.

Positions outside [0, 3] saturate: anything below zero is pure sine and
anything at or above three (infinity included) is pure sawtooth. NaN from a
misbehaving control falls back to pure sine.
*/

/// Resolved blend between two adjacent waveforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphPosition {
    pub low: Waveform,
    pub high: Waveform,
    /// Weight of `high`, always in [0, 1].
    pub fraction: f64,
}

impl MorphPosition {
    /// Pure sine, the rest position of the morph control.
    pub const SINE: MorphPosition = MorphPosition {
        low: Waveform::Sine,
        high: Waveform::Square,
        fraction: 0.0,
    };

    pub fn from_position(position: f64) -> Self {
        if position.is_nan() || position <= 0.0 {
            return Self::SINE;
        }

        let last = Waveform::LAST_INDEX as f64;
        if position >= last {
            return MorphPosition {
                low: Waveform::Sawtooth,
                high: Waveform::Sawtooth,
                fraction: 0.0,
            };
        }

        let floor = position.floor();
        let low = Waveform::from_index(floor as i64);
        MorphPosition {
            low,
            high: low.next(),
            fraction: (position - floor).clamp(0.0, 1.0),
        }
    }

    /// Morph position this blend corresponds to.
    pub fn position(&self) -> f64 {
        self.low.index() as f64 + self.fraction
    }

    /// Blend the two waveforms at `angle`.
    #[inline]
    pub fn sample(&self, angle: f64) -> f64 {
        let a = sample_of(self.low, angle);
        let b = sample_of(self.high, angle);
        blend(a, b, self.fraction)
    }
}

impl Default for MorphPosition {
    fn default() -> Self {
        Self::SINE
    }
}

/// Linear crossfade from `a` (fraction 0) to `b` (fraction 1).
#[inline]
pub fn blend(a: f64, b: f64, fraction: f64) -> f64 {
    a * (1.0 - fraction) + b * fraction
}
