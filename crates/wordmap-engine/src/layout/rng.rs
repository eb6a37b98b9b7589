//! Jitter sources for the path layout.
//!
//! The layout pulls all of its randomness through [`JitterSource`], so tests can
//! pin it down with a seed or a scripted sequence.

/// Random input to the layout: one uniform sample for the jitter magnitude
/// and one coin flip for its sign, per step.
pub trait JitterSource {
    /// Uniform sample in `[0, 1)`.
    fn next_unit(&mut self) -> f32;
    /// Fair coin: `true` means a positive deflection.
    fn next_sign(&mut self) -> bool;
}

impl<J: JitterSource + ?Sized> JitterSource for &mut J {
    fn next_unit(&mut self) -> f32 {
        (**self).next_unit()
    }

    fn next_sign(&mut self) -> bool {
        (**self).next_sign()
    }
}

/// Seedable pseudo-random number generator (xorshift64).
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Seed from the operating system's entropy source.
    #[cfg(feature = "entropy")]
    pub fn from_entropy() -> Self {
        use rand::Rng as _;
        Self::new(rand::rng().random())
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl JitterSource for Rng {
    fn next_unit(&mut self) -> f32 {
        // Top 24 bits fill an f32 mantissa exactly, so the result stays below 1.0.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    fn next_sign(&mut self) -> bool {
        self.next_u64() >> 63 == 1
    }
}

/// Replays a fixed list of samples, cycling when it runs out.
/// Used for golden-output tests.
#[derive(Debug, Clone)]
pub struct ScriptedJitter {
    units: Vec<f32>,
    signs: Vec<bool>,
    unit_pos: usize,
    sign_pos: usize,
}

impl ScriptedJitter {
    pub fn new(units: Vec<f32>, signs: Vec<bool>) -> Self {
        Self {
            units,
            signs,
            unit_pos: 0,
            sign_pos: 0,
        }
    }

    /// Same magnitude and sign on every draw.
    pub fn constant(unit: f32, positive: bool) -> Self {
        Self::new(vec![unit], vec![positive])
    }

    /// How many magnitude samples have been drawn so far.
    pub fn draws(&self) -> usize {
        self.unit_pos
    }
}

impl JitterSource for ScriptedJitter {
    fn next_unit(&mut self) -> f32 {
        let value = if self.units.is_empty() {
            0.0
        } else {
            self.units[self.unit_pos % self.units.len()]
        };
        self.unit_pos += 1;
        value.clamp(0.0, 1.0)
    }

    fn next_sign(&mut self) -> bool {
        let value = if self.signs.is_empty() {
            true
        } else {
            self.signs[self.sign_pos % self.signs.len()]
        };
        self.sign_pos += 1;
        value
    }
}
