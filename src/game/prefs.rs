use std::fmt::{Display, Formatter};
use std::time::Duration;

#[derive(Debug, Error)]
#[must_use]
pub struct PrefsError(pub Box<Prefs>, pub &'static str);

impl Display for PrefsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "game prefs error: {}", self.1)?;
        write!(f, "prefs: {:?}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Prefs {
    /// Cube half-extent H; the grid spans -H..=H per axis
    pub half_extent: i32,
    /// Tick interval at speed multiplier 1
    pub base_tick_interval: Duration,
    /// Runtime-mutable speed factor; 0 pauses the simulation
    pub speed_multiplier: f64,
    /// Score at which the game is won; must leave at least one free
    /// surface cell so food spawning can't be exhausted
    pub win_score: u32,
    /// Fixed seed for reproducible runs, `None` for entropy
    pub rng_seed: Option<u64>,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            half_extent: 4,
            base_tick_interval: Duration::from_millis(200),
            speed_multiplier: 1.,
            win_score: 380,
            rng_seed: None,
        }
    }
}

// builder
impl Prefs {
    #[must_use]
    pub fn half_extent(mut self, value: i32) -> Self {
        self.half_extent = value;
        self
    }

    #[must_use]
    pub fn base_tick_interval(mut self, value: Duration) -> Self {
        self.base_tick_interval = value;
        self
    }

    #[must_use]
    pub fn speed_multiplier(mut self, value: f64) -> Self {
        self.speed_multiplier = value;
        self
    }

    #[must_use]
    pub fn win_score(mut self, value: u32) -> Self {
        self.win_score = value;
        self
    }

    #[must_use]
    pub fn rng_seed(mut self, value: u64) -> Self {
        self.rng_seed = Some(value);
        self
    }
}
