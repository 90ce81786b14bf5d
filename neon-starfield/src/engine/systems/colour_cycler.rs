use std::time::Duration;

use bevy::prelude::*;
use constants::scene::{COLOUR_CYCLE_PERIOD_MS, MAX_RGB_COLOUR};
use rand::Rng;
use rand::rngs::StdRng;

use crate::engine::scene::particles::StarFieldState;

/// Picks a new random star colour every period, independent of frame rate.
#[derive(Resource, Debug)]
pub struct ColourCycler {
    timer: Timer,
    rng: StdRng,
    fired: u64,
}

impl ColourCycler {
    pub fn new(rng: StdRng) -> Self {
        Self::with_period(Duration::from_millis(COLOUR_CYCLE_PERIOD_MS), rng)
    }

    pub fn with_period(period: Duration, rng: StdRng) -> Self {
        Self {
            timer: Timer::new(period, TimerMode::Repeating),
            rng,
            fired: 0,
        }
    }

    /// Advance by `elapsed`. Draws one colour per completed period and
    /// returns the last one drawn, if any.
    pub fn tick(&mut self, elapsed: Duration) -> Option<u32> {
        self.timer.tick(elapsed);

        let mut colour = None;
        for _ in 0..self.timer.times_finished_this_tick() {
            colour = Some(self.rng.gen_range(0..=MAX_RGB_COLOUR));
            self.fired += 1;
        }
        colour
    }

    pub fn fired(&self) -> u64 {
        self.fired
    }
}

/// Runs outside the frame sets; it only rewrites the shared colour.
pub fn cycle_particle_colour(
    time: Res<Time>,
    mut cycler: ResMut<ColourCycler>,
    star_field: Option<ResMut<StarFieldState>>,
) {
    let Some(colour) = cycler.tick(time.delta()) else {
        return;
    };

    if let Some(mut star_field) = star_field {
        star_field.field.set_colour(colour);
        debug!("Star colour changed to #{colour:06x}");
    }
}
