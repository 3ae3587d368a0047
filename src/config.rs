//! Compile time constants for the two variants of the demo and the panels it
//! runs on.

use crate::board::Polarity;
use crate::probe::AddressPair;
use crate::tracker::{Bounds, Drift, Position};

/// Everything that differs between the finished demo and the workshop one.
///
/// `probe` and `backlight` describe the ICM20948 ruler board. Firmware for
/// other boards overrides both with its own wiring, see `demos/meatball.rs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    pub start: Position,
    pub drift: Drift,
    /// pause after every tick
    pub period_ms: u32,
    pub probe: AddressPair,
    pub backlight: Polarity,
}

impl Profile {
    /// Tuned so the meatball sits still when the board lies flat.
    pub const REFERENCE: Profile = Profile {
        start: Position::new(150, 70),
        drift: Drift::new(0.15, 0.7),
        period_ms: 50,
        probe: AddressPair::ICM20948_REFERENCE,
        backlight: Polarity::ActiveHigh,
    };

    /// Drift left at zero for attendees to tune.
    pub const WORKSHOP: Profile = Profile {
        start: Position::new(150, 70),
        drift: Drift::new(0.0, 0.0),
        period_ms: 20,
        probe: AddressPair::ICM20948_WORKSHOP,
        backlight: Polarity::ActiveLow,
    };

    /// The profile picked by the `workshop` feature.
    pub const fn selected() -> Profile {
        if cfg!(feature = "workshop") {
            Profile::WORKSHOP
        } else {
            Profile::REFERENCE
        }
    }
}

/// Panel rotation in degrees clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

/// Geometry of the display after rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    pub width: u16,
    pub height: u16,
    pub rotation: Rotation,
    /// controller ram offsets for panels smaller than the driver ic
    pub row_start: u16,
    pub col_start: u16,
}

impl Panel {
    /// 1.14" 240x135 ST7789 on the ruler board the logo was drawn for
    pub const ST7789_240X135: Panel = Panel {
        width: 240,
        height: 135,
        rotation: Rotation::Deg90,
        row_start: 40,
        col_start: 53,
    };

    /// PyGamer's 160x128 ST7735, the bsp takes care of the offsets
    pub const PYGAMER_ST7735: Panel = Panel {
        width: 160,
        height: 128,
        rotation: Rotation::Deg90,
        row_start: 0,
        col_start: 0,
    };

    pub const fn bounds(&self, sprite: SpriteSize) -> Bounds {
        Bounds::new(
            self.width as i32,
            self.height as i32,
            sprite.width as i32,
            sprite.height as i32,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSize {
    pub width: u16,
    pub height: u16,
}

/// The Meatball logo, must match the bitmap in use
pub const MEATBALL: SpriteSize = SpriteSize {
    width: 32,
    height: 30,
};
