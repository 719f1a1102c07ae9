pub use prefs::{Prefs, PrefsError};
pub use snapshot::Snapshot;

mod control;
mod prefs;
mod snapshot;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::autopilot;
use crate::basic::{Side, Vec3};
use crate::food::{self, Food};
use crate::snake::{Body, Segment};
use crate::surface::Surface;
use crate::transition;
use control::TickControl;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Status {
    NotStarted,
    Playing,
    Lost,
    Won,
}

/// The tick scheduler: owns the mutable game state, drives one
/// simulation step per tick interval and is the only thing external
/// collaborators talk to. Everything else sees immutable snapshots.
pub struct Game {
    prefs: Prefs,
    surface: Surface,
    control: TickControl,
    rng: StdRng,

    body: Body,
    food: Food,
    direction: Vec3,
    pending_direction: Vec3,
    score: u32,
    high_score: u32,
    status: Status,
    elapsed_time: u64,
    autoplay: bool,
}

impl Game {
    const START_DIRECTION: Vec3 = Vec3::new(0, 1, 0);

    fn start_segment(surface: &Surface) -> Segment {
        let h = surface.half_extent();
        // a fixed spot on the +z face, a little below center
        let pos = Vec3::new(0, -h / 2, h);
        Segment {
            pos,
            normal: surface.normal_at(pos),
        }
    }

    pub fn new(prefs: Prefs) -> Result<Self, PrefsError> {
        if prefs.half_extent < 1 {
            return Err(PrefsError(Box::new(prefs), "half_extent must be at least 1"));
        }
        if prefs.base_tick_interval.is_zero() {
            return Err(PrefsError(
                Box::new(prefs),
                "base_tick_interval must be nonzero (pause via speed_multiplier 0)",
            ));
        }
        if prefs.speed_multiplier < 0. {
            return Err(PrefsError(
                Box::new(prefs),
                "speed_multiplier must be nonnegative",
            ));
        }

        let surface = Surface::new(prefs.half_extent);

        // growing to win_score takes win_score + 1 cells plus one for
        // the next food, so this keeps food spawning unexhaustible
        if prefs.win_score == 0 || prefs.win_score as usize >= surface.cell_count() {
            return Err(PrefsError(
                Box::new(prefs),
                "win_score must be between 1 and the surface cell count minus one",
            ));
        }

        let rng = match prefs.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let control = TickControl::new(prefs.base_tick_interval, prefs.speed_multiplier);
        let body = Body::new(Self::start_segment(&surface));

        Ok(Self {
            prefs,
            surface,
            control,
            rng,
            body,
            food: Food::FALLBACK,
            direction: Self::START_DIRECTION,
            pending_direction: Self::START_DIRECTION,
            score: 0,
            high_score: 0,
            status: Status::NotStarted,
            elapsed_time: 0,
            autoplay: false,
        })
    }

    /// Start a fresh game: new snake, food, score and clock; the high
    /// score carries over. Works from any state, including Lost/Won.
    pub fn start(&mut self) {
        self.body = Body::new(Self::start_segment(&self.surface));
        self.food = food::spawn_food(&self.surface, &self.body, &mut self.rng);
        self.direction = Self::START_DIRECTION;
        self.pending_direction = Self::START_DIRECTION;
        self.score = 0;
        self.elapsed_time = 0;
        self.status = Status::Playing;
        self.control.reset();
    }

    /// Forfeit the current game
    pub fn force_end(&mut self) {
        if self.status == Status::Playing {
            self.status = Status::Lost;
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    /// Takes effect at the next tick's decision step; while enabled,
    /// manual input is ignored
    pub fn set_autoplay(&mut self, autoplay: bool) {
        self.autoplay = autoplay;
    }

    /// 0 pauses; negative values are ignored
    pub fn set_speed_multiplier(&mut self, multiplier: f64) {
        if multiplier < 0. {
            return;
        }
        self.prefs.speed_multiplier = multiplier;
        self.control.set_multiplier(multiplier);
    }

    /// Rotate the buffered direction 90° around the head's normal.
    /// Advisory: ignored outside Playing or while autoplay is on.
    pub fn turn(&mut self, side: Side) {
        if self.status != Status::Playing || self.autoplay {
            return;
        }

        let normal = self.body.head().normal.as_vec();
        self.pending_direction = match side {
            Side::Left => normal.cross(self.pending_direction),
            Side::Right => self.pending_direction.cross(normal),
        };
    }

    /// Set the buffered direction outright. Advisory: ignored outside
    /// Playing, while autoplay is on, for non-tangent or non-cardinal
    /// directions, and for exact reversals.
    pub fn set_direction(&mut self, dir: Vec3) {
        if self.status != Status::Playing || self.autoplay {
            return;
        }
        if !Vec3::CARDINALS.contains(&dir) {
            return;
        }
        if !self.body.head().normal.is_tangent(dir) {
            return;
        }
        if dir == -self.pending_direction {
            return;
        }
        self.pending_direction = dir;
    }

    /// Host-driven pump: fires however many simulation ticks are due
    /// and advances the elapsed-time counter. Cheap to call often.
    pub fn update(&mut self) {
        if self.status != Status::Playing {
            return;
        }

        self.elapsed_time += self.control.elapsed_seconds();

        while self.status == Status::Playing && self.control.can_tick() {
            self.tick();
        }
    }

    /// One simulation step. Public so hosts (and tests) can drive the
    /// game without wall-clock timing.
    pub fn tick(&mut self) {
        if self.status != Status::Playing {
            return;
        }

        // at most one buffered direction change is consumed per tick
        let move_dir = if self.autoplay {
            autopilot::next_dir(
                &self.body,
                self.direction,
                &self.food,
                self.surface.half_extent(),
            )
        } else {
            self.pending_direction
        };

        let head = *self.body.head();
        let s = transition::step(head.pos, head.normal, move_dir, self.surface.half_extent());

        // the normal plays no part in eating, only the cell matters
        let eating = s.pos == self.food.pos;

        if self.body.collides_with(s.pos, s.normal, !eating) {
            self.status = Status::Lost;
            return;
        }

        self.body.advance(
            Segment {
                pos: s.pos,
                normal: s.normal,
            },
            eating,
        );

        if eating {
            self.score += 1;
            self.high_score = self.high_score.max(self.score);

            if self.score >= self.prefs.win_score {
                self.status = Status::Won;
                return;
            }

            self.food = food::spawn_food(&self.surface, &self.body, &mut self.rng);
        }

        // sync the buffer so a pivot doesn't resurrect a stale input
        self.direction = s.dir;
        self.pending_direction = s.dir;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            segments: self.body.segments.iter().copied().collect(),
            food: self.food,
            direction: self.direction,
            score: self.score,
            high_score: self.high_score,
            status: self.status,
            elapsed_time: self.elapsed_time,
        }
    }
}
