//! Randomness seam for brush decisions

/// Source of uniform random numbers.
///
/// Implemented for every [`rand::Rng`], so `StdRng`, `ThreadRng` and friends
/// can be passed directly.
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`
    fn uniform01(&mut self) -> f64;

    /// Uniform integer in `[0, bound)`. `bound` must be non-zero.
    fn uniform_int(&mut self, bound: u32) -> u32;
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn uniform01(&mut self) -> f64 {
        self.r#gen::<f64>()
    }

    fn uniform_int(&mut self, bound: u32) -> u32 {
        self.gen_range(0..bound)
    }
}

/// Deterministic random source replaying fixed values, for tests.
#[cfg(test)]
pub(crate) mod scripted {
    use std::collections::VecDeque;

    use super::RandomSource;

    #[derive(Debug, Default)]
    pub struct ScriptedRandom {
        floats: VecDeque<f64>,
        ints: VecDeque<u32>,
        /// Bounds passed to `uniform_int`, in call order
        pub int_bounds: Vec<u32>,
    }

    impl ScriptedRandom {
        pub fn new(floats: &[f64], ints: &[u32]) -> Self {
            Self {
                floats: floats.iter().copied().collect(),
                ints: ints.iter().copied().collect(),
                int_bounds: Vec::new(),
            }
        }

        pub fn exhausted(&self) -> bool {
            self.floats.is_empty() && self.ints.is_empty()
        }
    }

    impl RandomSource for ScriptedRandom {
        fn uniform01(&mut self) -> f64 {
            self.floats.pop_front().expect("script ran out of floats")
        }

        fn uniform_int(&mut self, bound: u32) -> u32 {
            self.int_bounds.push(bound);
            let value = self.ints.pop_front().expect("script ran out of ints");
            assert!(value < bound, "scripted {} not below bound {}", value, bound);
            value
        }
    }
}
