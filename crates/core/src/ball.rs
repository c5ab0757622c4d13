//! Ball module - position, velocity and wall reflection
//!
//! The ball moves in continuous coordinates inside the box and is reflected
//! off the walls. Reflection is checked only after integrating a step, so a
//! very large `delta_time` produces a single bounce and a clamp to the wall
//! instead of the several bounces the ball would have made in real time.

use crate::types::{Config, BALL_SPEED};

/// Axes that reflected during one physics step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounce {
    pub x: bool,
    pub y: bool,
}

impl Bounce {
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

/// Ball state in box coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Ball {
    pub fn new(x: f64, y: f64, dx: f64, dy: f64) -> Self {
        Self { x, y, dx, dy }
    }

    /// Starting state for a box: an eighth of the way across, a quarter of the
    /// way down, moving right and slightly down.
    pub fn spawn(config: &Config) -> Self {
        Self {
            x: f64::from(config.width) * 0.125,
            y: f64::from(config.height) * 0.25,
            dx: 1.0,
            dy: 0.5,
        }
    }

    /// Advance by `delta_time` seconds and reflect off the walls.
    ///
    /// After this returns, `0 <= x <= width - 1` and `0 <= y <= height - 1`.
    pub fn update(&mut self, delta_time: f64, config: &Config) -> Bounce {
        self.x += self.dx * BALL_SPEED * delta_time;
        self.y += self.dy * BALL_SPEED * delta_time;

        let bounce = Bounce {
            x: reflect(&mut self.x, &mut self.dx, config.max_x()),
            y: reflect(&mut self.y, &mut self.dy, config.max_y()),
        };

        if bounce.any() {
            log::trace!(
                "bounce x={} y={} at ({:.2}, {:.2})",
                bounce.x,
                bounce.y,
                self.x,
                self.y
            );
        }
        bounce
    }

    /// Cell the ball occupies, if it lies inside a `width` x `height` grid.
    pub fn cell(&self, width: u16, height: u16) -> Option<(u16, u16)> {
        let in_x = self.x >= 0.0 && self.x < f64::from(width);
        let in_y = self.y >= 0.0 && self.y < f64::from(height);
        if in_x && in_y {
            // In range, so the truncating casts are floor and cannot overflow.
            Some((self.x as u16, self.y as u16))
        } else {
            None
        }
    }
}

/// Flip the velocity and clamp the position when it reaches either wall.
fn reflect(pos: &mut f64, vel: &mut f64, max: f64) -> bool {
    if *pos <= 0.0 || *pos >= max {
        *vel = -*vel;
        *pos = if *pos <= 0.0 { 0.0 } else { max };
        true
    } else {
        false
    }
}
