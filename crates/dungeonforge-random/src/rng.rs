use rand::{rngs::StdRng, Rng as RandRng, RngCore, SeedableRng};

/// A random number generator wrapper used throughout the generation pipeline.
///
/// Injectable so that a caller can request either reproducible (seeded) or
/// ad hoc (thread-local) randomness from the same API.
pub struct Rng {
    rng: RngImpl,
}

enum RngImpl {
    Seeded(Box<StdRng>),
    ThreadLocal(rand::rngs::ThreadRng),
}

impl Rng {
    /// Creates a new random number generator using the thread-local RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use dungeonforge_random::Rng;
    ///
    /// let mut rng = Rng::new();
    /// let value = rng.range(1, 10);
    /// assert!(value >= 1 && value <= 10);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: RngImpl::ThreadLocal(rand::rng()),
        }
    }

    /// Creates a new random number generator with a specific seed.
    ///
    /// This is useful for deterministic generation and reproducible tests:
    /// a `Map` built with the same seed and options always produces the
    /// same layout (including the same sequence of retry attempts).
    ///
    /// # Examples
    ///
    /// ```
    /// use dungeonforge_random::Rng;
    ///
    /// let mut rng1 = Rng::with_seed(12345);
    /// let mut rng2 = Rng::with_seed(12345);
    ///
    /// assert_eq!(rng1.range(1, 100), rng2.range(1, 100));
    /// assert_eq!(rng1.range(1, 100), rng2.range(1, 100));
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: RngImpl::Seeded(Box::new(StdRng::seed_from_u64(seed))),
        }
    }

    /// Generates a random integer in the inclusive range `[min, max]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dungeonforge_random::Rng;
    ///
    /// let mut rng = Rng::new();
    /// let value = rng.range(1, 6);
    /// assert!(value >= 1 && value <= 6);
    /// ```
    #[inline]
    pub fn range(&mut self, min: i32, max: i32) -> i32 {
        self.with_rng(|r| r.random_range(min..=max))
    }

    /// Generates a random floating-point number in the range `[0.0, 1.0)`.
    #[inline]
    pub fn float(&mut self) -> f32 {
        self.with_rng(|r| r.random())
    }

    /// Returns `true` with the given probability (0.0 to 1.0).
    #[inline]
    pub fn chance(&mut self, probability: f32) -> bool {
        self.with_rng(|r| r.random::<f32>()) < probability
    }

    /// Helper to run a closure with the underlying RNG.
    #[inline]
    fn with_rng<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut dyn RngCore) -> T,
    {
        match &mut self.rng {
            RngImpl::ThreadLocal(r) => f(r),
            RngImpl::Seeded(r) => f(r),
        }
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}
