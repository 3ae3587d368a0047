//! Tilt integration and clamping for the sprite position.
//!
//! Every tick the latest acceleration sample, corrected by a per axis drift,
//! is truncated to whole pixels and added to the position. The result is then
//! clamped so the sprite stays on the panel.

use crate::imu::Imu;
use crate::sprite::SpriteSurface;

/// Top left corner of the sprite in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

/// Calibration bias added to the raw sample so a board lying flat stays put.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Drift {
    pub x: f32,
    pub y: f32,
}

impl Drift {
    pub const fn new(x: f32, y: f32) -> Self {
        Drift { x, y }
    }
}

/// One acceleration reading in m/s².
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Sample {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Sample { x, y, z }
    }
}

/// Drawable area of the panel and the footprint of the sprite on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
    pub sprite_width: i32,
    pub sprite_height: i32,
}

impl Bounds {
    pub const fn new(width: i32, height: i32, sprite_width: i32, sprite_height: i32) -> Self {
        Bounds {
            width,
            height,
            sprite_width,
            sprite_height,
        }
    }

    /// Largest x the sprite's top left corner may take.
    pub const fn max_x(&self) -> i32 {
        self.width - self.sprite_width
    }

    /// Largest y the sprite's top left corner may take.
    pub const fn max_y(&self) -> i32 {
        self.height - self.sprite_height
    }

    pub fn contains(&self, position: Position) -> bool {
        (0..=self.max_x()).contains(&position.x) && (0..=self.max_y()).contains(&position.y)
    }

    pub fn clamp(&self, position: Position) -> Position {
        Position {
            x: clamp_axis(position.x, self.max_x()),
            y: clamp_axis(position.y, self.max_y()),
        }
    }
}

/// Upper bound first, then the lower bound on whatever is left. A sprite
/// wider than the panel (negative `max`) therefore ends up pinned at 0.
fn clamp_axis(value: i32, max: i32) -> i32 {
    let value = if value >= max { max } else { value };

    if value <= 0 {
        0
    } else {
        value
    }
}

/// Whole pixel step for one axis. `as` truncates toward zero, saturates on
/// overflow and maps NaN to 0.
fn step(reading: f32, drift: f32) -> i32 {
    (reading + drift) as i32
}

/// Position after applying one sample, already clamped into `bounds`.
///
/// The y axis is inverted: tilting toward positive y moves the sprite up the
/// screen.
pub fn next_position(current: Position, sample: Sample, drift: Drift, bounds: Bounds) -> Position {
    let moved = Position {
        x: current.x.saturating_add(step(sample.x, drift.x)),
        y: current.y.saturating_sub(step(sample.y, drift.y)),
    };

    bounds.clamp(moved)
}

/// What a single tick did, handy for tracing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub sample: Sample,
    /// drift corrected, truncated step (x, y) before inversion
    pub step: (i32, i32),
    pub position: Position,
}

#[derive(Debug, PartialEq)]
pub enum TickError<I, S> {
    Imu(I),
    Surface(S),
}

/// Owns the moving position together with the constants it is updated with.
#[derive(Debug, Clone, Copy)]
pub struct Tracker {
    position: Position,
    drift: Drift,
    bounds: Bounds,
}

impl Tracker {
    /// The start position is kept as given; the first tick clamps it.
    pub const fn new(start: Position, drift: Drift, bounds: Bounds) -> Self {
        Tracker {
            position: start,
            drift,
            bounds,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn drift(&self) -> Drift {
        self.drift
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn update(&mut self, sample: Sample) -> Position {
        self.position = next_position(self.position, sample, self.drift, self.bounds);
        self.position
    }

    /// Read the sensor, move, and hand the clamped position to the surface.
    /// The surface is told every tick, moved or not.
    pub fn tick<I, S>(
        &mut self,
        imu: &mut I,
        surface: &mut S,
    ) -> Result<Tick, TickError<I::Error, S::Error>>
    where
        I: Imu,
        S: SpriteSurface,
    {
        let sample = imu.read_acceleration().map_err(TickError::Imu)?;
        let position = self.update(sample);

        surface
            .set_sprite_position(position)
            .map_err(TickError::Surface)?;

        Ok(Tick {
            sample,
            step: (step(sample.x, self.drift.x), step(sample.y, self.drift.y)),
            position,
        })
    }
}
