#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/*
Waveform Generator
==================

Every waveform here is a pure function of a phase angle in radians. The
angle can be any real value: the voice never wraps its phase accumulator,
so each shape is periodic in 2π on its own.

  Sine       sin(x)
  Square     +1 while sin(x) >= 0, -1 while sin(x) < 0
  Triangle   asin(sin(x)) scaled to a peak of 1
  Sawtooth   ramp from -1 up to +1 across each period, then reset

     sine        square       triangle     sawtooth
     .-.         +--+          /\            /|  /|
    /   \        |  |         /  \          / | / |
   '     '-'     +  +--+     '    \/       /  |/  |

All four share the same zero crossing at x = 0 (sawtooth passes through -1
there and crosses zero at x = π, the center of its ramp) and sit in [-1, 1].

Ordering
--------

The integer index of each waveform is what the morph control sweeps over:
0 = sine, 1 = square, 2 = triangle, 3 = sawtooth. Position 0.0 is pure sine
and 3.0 is pure sawtooth.
*/

/// The four waveform kinds a morphing voice can blend between.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Waveform {
    Sine = 0,
    Square = 1,
    Triangle = 2,
    Sawtooth = 3,
}

impl Waveform {
    /// All kinds in morph order.
    pub const ALL: [Waveform; 4] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Triangle,
        Waveform::Sawtooth,
    ];

    /// Highest valid morph index.
    pub const LAST_INDEX: i64 = 3;

    /// Map an integer index to a waveform, saturating at both ends.
    ///
    /// Negative indices select sine and anything above 3 selects sawtooth.
    #[inline]
    pub fn from_index(index: i64) -> Self {
        match index.clamp(0, Self::LAST_INDEX) {
            0 => Waveform::Sine,
            1 => Waveform::Square,
            2 => Waveform::Triangle,
            _ => Waveform::Sawtooth,
        }
    }

    #[inline]
    pub fn index(self) -> i64 {
        self as i64
    }

    /// The next waveform in morph order; sawtooth is its own successor.
    #[inline]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

#[inline]
pub fn sine(angle: f64) -> f64 {
    angle.sin()
}

/// 50% duty square with the same zero crossings as the sine.
#[inline]
pub fn square(angle: f64) -> f64 {
    if angle.sin() < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Closed-form triangle, in phase with the sine.
#[inline]
pub fn triangle(angle: f64) -> f64 {
    // asin never exceeds FRAC_PI_2 so the quotient stays within [-1, 1]
    angle.sin().asin() / FRAC_PI_2
}

/// Rising ramp, -1 at the start of each period, 0 at π.
#[inline]
pub fn sawtooth(angle: f64) -> f64 {
    (angle.rem_euclid(TAU) - PI) / PI
}

/// Evaluate one waveform at `angle`.
#[inline]
pub fn sample_of(kind: Waveform, angle: f64) -> f64 {
    match kind {
        Waveform::Sine => sine(angle),
        Waveform::Square => square(angle),
        Waveform::Triangle => triangle(angle),
        Waveform::Sawtooth => sawtooth(angle),
    }
}
