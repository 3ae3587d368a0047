//! Roll a sprite around a small display by tilting the board.
//!
//! The hardware free parts of the meatball demo: integrating accelerometer
//! samples into a clamped screen position, finding the sensor on the bus,
//! moving the logo on an embedded-graphics target. The
//! firmware in `demos/` wires these up on a PyGamer.

#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod config;
pub mod imu;
pub mod probe;
pub mod sprite;
pub mod tracker;

pub use config::{Panel, Profile};
pub use imu::{GravityScaled, Imu};
pub use sprite::{SpriteLayer, SpriteSurface};
pub use tracker::{next_position, Bounds, Drift, Position, Sample, Tick, TickError, Tracker};
