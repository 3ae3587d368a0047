//! Roll the Meatball logo around the screen by tilting the PyGamer.
//!
//! Draws a black background with the logo on it and moves the logo from the
//! LIS3DH accelerometer readings, keeping it within the display.
//!
//! Upload:
//! * `cargo hf2 --example meatball --features=firmware`
//!
//! With `--features=firmware,workshop` the workshop constants are used: no
//! drift correction and a faster loop. Add `debug` to get every sample printed.
//! Watch the output with any rtt viewer, e.g. `probe-rs attach`.
//!
//! The logo lives in `demos/assets/meatball.raw` as little endian rgb565, its
//! size has to match `config::MEATBALL`. To swap it for another picture:
//! * `convert logo.png -resize 32x30! -flip -type truecolor -define
//!   bmp:subtype=RGB565 -depth 16 -strip logo.bmp`
//! * then `tail -c 1920 logo.bmp > meatball.raw`, 32*30*2 bytes of pixels
//!
//! If the accelerometer gets stuck you'll see the panic led, toggle the power
//! switch.

#![no_std]
#![no_main]

use pygamer as hal;
use pygamer_panic_led as _;

use embedded_graphics::image::ImageRawLE;
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use hal::clock::GenericClockController;
use hal::delay::Delay;
use hal::pac::{CorePeripherals, Peripherals};
use hal::prelude::*;
use hal::time::KiloHertz;
use hal::timer::SpinTimer;
use lis3dh::{Lis3dh, SlaveAddr};
use rtt_target::{rprint, rprintln, rtt_init_print};
use st7735_lcd::Orientation;

use pygamer_meatball::board::{self, Polarity};
use pygamer_meatball::config::{Panel, Profile, Rotation, MEATBALL};
use pygamer_meatball::probe::{self, AddressPair, Identity};
use pygamer_meatball::{GravityScaled, SpriteLayer, Tracker};

const NUM_PIXELS: usize = 5;
const LOGO: &[u8] = include_bytes!("./assets/meatball.raw");
// the profile's probe and backlight are for the ruler board, these are the pygamer's
const PANEL: Panel = Panel::PYGAMER_ST7735;
const SENSOR: AddressPair = AddressPair::LIS3DH;
const BACKLIGHT: Polarity = Polarity::ActiveHigh;

/// rtt as a `core::fmt::Write` sink for the library diagnostics
struct Rtt;

impl core::fmt::Write for Rtt {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        rprint!("{}", s);
        Ok(())
    }
}

fn orientation(rotation: Rotation) -> Orientation {
    match rotation {
        Rotation::Deg0 => Orientation::Portrait,
        Rotation::Deg90 => Orientation::Landscape,
        Rotation::Deg180 => Orientation::PortraitSwapped,
        Rotation::Deg270 => Orientation::LandscapeSwapped,
    }
}

#[hal::entry]
fn main() -> ! {
    rtt_init_print!();

    let profile = Profile {
        probe: SENSOR,
        backlight: BACKLIGHT,
        ..Profile::selected()
    };

    let mut peripherals = Peripherals::take().unwrap();
    let core = CorePeripherals::take().unwrap();

    let mut clocks = GenericClockController::with_internal_32kosc(
        peripherals.GCLK,
        &mut peripherals.MCLK,
        &mut peripherals.OSC32KCTRL,
        &mut peripherals.OSCCTRL,
        &mut peripherals.NVMCTRL,
    );

    let mut pins = hal::Pins::new(peripherals.PORT).split();

    // neopixels, in case a previous program left them on
    let timer = SpinTimer::new(4);
    let mut neopixel = pins.neopixel.init(timer, &mut pins.port);
    let _ = board::indicators_off(&mut neopixel, NUM_PIXELS);

    let mut delay = Delay::new(core.SYST, &mut clocks);
    delay.delay_ms(255u8);

    // i2c
    let mut i2c = pins.i2c.init(
        &mut clocks,
        KiloHertz(400),
        peripherals.SERCOM2,
        &mut peripherals.MCLK,
        &mut pins.port,
    );

    // ask who is there before handing the bus over, a failed Lis3dh::new would eat it
    let address = match probe::connect(
        "LIS3DH",
        profile.probe,
        |address| probe::check_identity(&mut i2c, address, Identity::LIS3DH),
        &mut Rtt,
    ) {
        Ok((_, address)) => address,
        Err(_) => panic!("no LIS3DH on the bus, can't go on without it"),
    };

    let slave = if address == profile.probe.secondary {
        SlaveAddr::Default
    } else {
        SlaveAddr::Alternate
    };
    let mut lis3dh = Lis3dh::new(i2c, slave).ok().unwrap();
    lis3dh.set_range(lis3dh::Range::G2).unwrap();
    // has to keep up with the fastest loop period
    lis3dh.set_datarate(lis3dh::DataRate::Hz_100).unwrap();
    let mut imu = GravityScaled::new(lis3dh);

    if cfg!(feature = "debug") {
        rprintln!("LIS3DH at {:#04x}", address);
        rprintln!("Create display");
    }

    let (mut display, mut backlight) = pins
        .display
        .init(
            &mut clocks,
            peripherals.SERCOM4,
            &mut peripherals.MCLK,
            peripherals.TC2,
            &mut delay,
            &mut pins.port,
        )
        .unwrap();
    display.set_orientation(&orientation(PANEL.rotation)).unwrap();
    board::backlight_on_pwm(&mut backlight, profile.backlight);

    if cfg!(feature = "debug") {
        rprintln!("Load sprite");
    }

    let logo: ImageRawLE<Rgb565> =
        ImageRawLE::new(LOGO, MEATBALL.width as u32, MEATBALL.height as u32);

    // a start that doesn't fit this panel is pulled in before anything is drawn
    let bounds = PANEL.bounds(MEATBALL);
    let start = bounds.clamp(profile.start);

    let mut layer = SpriteLayer::new(display, logo, Rgb565::BLACK, start);
    layer.show().unwrap();

    let mut tracker = Tracker::new(start, profile.drift, bounds);

    loop {
        let tick = tracker.tick(&mut imu, &mut layer).unwrap();

        if cfg!(feature = "debug") {
            rprintln!("X: {:.2}", tick.sample.x);
            rprintln!("Y: {:.2}", tick.sample.y);
            rprintln!("Z: {:.2}", tick.sample.z);
            rprintln!("step {:?} -> {:?}", tick.step, tick.position);
        }

        delay.delay_ms(profile.period_ms);
    }
}
