use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Cadence of the animation ticker.
pub struct AnimationOptions {
    /// Rotation about X added on every tick, in degrees.
    pub degrees_per_tick: f32,
    /// Delay between ticks in milliseconds.
    pub tick_interval_ms: u64,
}

impl AnimationOptions {
    /// Tick interval as a [`Duration`]. A zero interval is bumped to 1 ms.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            degrees_per_tick: 1.0,
            tick_interval_ms: 10,
        }
    }
}
