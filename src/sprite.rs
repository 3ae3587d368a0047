//! A single tile sprite layer on top of an embedded-graphics draw target.
//!
//! The sprite is a raw little endian RGB565 image, see `demos/meatball.rs`
//! for how to produce one.

use embedded_graphics::{
    image::{Image, ImageDimensions, ImageRawLE},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
    style::PrimitiveStyle,
};

use crate::tracker::Position;

/// Anything that can put the sprite's top left corner somewhere on screen.
pub trait SpriteSurface {
    type Error;

    fn set_sprite_position(&mut self, at: Position) -> Result<(), Self::Error>;
}

/// One sprite over a solid background. Nothing is drawn before [`show`],
/// after that every move repaints only what changed.
///
/// [`show`]: SpriteLayer::show
pub struct SpriteLayer<'a, D> {
    display: D,
    image: ImageRawLE<'a, Rgb565>,
    background: Rgb565,
    position: Position,
    shown: bool,
}

impl<'a, D> SpriteLayer<'a, D>
where
    D: DrawTarget<Rgb565>,
{
    pub fn new(
        display: D,
        image: ImageRawLE<'a, Rgb565>,
        background: Rgb565,
        at: Position,
    ) -> Self {
        SpriteLayer {
            display,
            image,
            background,
            position: at,
            shown: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn release(self) -> D {
        self.display
    }

    /// Paint the background and the sprite at its current position.
    pub fn show(&mut self) -> Result<(), D::Error> {
        self.display.clear(self.background)?;
        self.draw_sprite()?;
        self.shown = true;
        Ok(())
    }

    fn draw_sprite(&mut self) -> Result<(), D::Error> {
        let origin = Point::new(self.position.x, self.position.y);
        Image::new(&self.image, origin).draw(&mut self.display)
    }

    /// Background over `left..right`, `top..bottom`, nothing if empty.
    fn fill(&mut self, left: i32, top: i32, right: i32, bottom: i32) -> Result<(), D::Error> {
        if right <= left || bottom <= top {
            return Ok(());
        }

        Rectangle::new(Point::new(left, top), Point::new(right - 1, bottom - 1))
            .into_styled(PrimitiveStyle::with_fill(self.background))
            .draw(&mut self.display)
    }

    /// Background back over the part of the old spot the sprite left: a
    /// full width band for the rows it left and a side band for the rest.
    fn uncover(&mut self, from: Position) -> Result<(), D::Error> {
        let w = self.image.width() as i32;
        let h = self.image.height() as i32;
        let to = self.position;

        let apart = (to.x - from.x).abs() >= w || (to.y - from.y).abs() >= h;
        if apart {
            return self.fill(from.x, from.y, from.x + w, from.y + h);
        }

        if to.y > from.y {
            self.fill(from.x, from.y, from.x + w, to.y)?;
        } else {
            self.fill(from.x, to.y + h, from.x + w, from.y + h)?;
        }

        let top = from.y.max(to.y);
        let bottom = from.y.min(to.y) + h;
        if to.x > from.x {
            self.fill(from.x, top, to.x, bottom)
        } else {
            self.fill(to.x + w, top, from.x + w, bottom)
        }
    }
}

impl<'a, D> SpriteSurface for SpriteLayer<'a, D>
where
    D: DrawTarget<Rgb565>,
{
    type Error = D::Error;

    fn set_sprite_position(&mut self, at: Position) -> Result<(), D::Error> {
        let from = self.position;
        self.position = at;

        if !self.shown || from == at {
            return Ok(());
        }

        self.uncover(from)?;
        self.draw_sprite()
    }
}
