use embedded_hal::digital::v2::OutputPin;
use embedded_hal::PwmPin;
use smart_leds::{hsv::RGB8, SmartLedsWrite};

/// Which level lights the backlight up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

/// Turn a plain gpio backlight on.
pub fn backlight_on<P: OutputPin>(pin: &mut P, polarity: Polarity) -> Result<(), P::Error> {
    match polarity {
        Polarity::ActiveHigh => pin.set_high(),
        Polarity::ActiveLow => pin.set_low(),
    }
}

/// Turn a pwm driven backlight fully on.
pub fn backlight_on_pwm<P: PwmPin<Duty = u16>>(pin: &mut P, polarity: Polarity) {
    let duty = match polarity {
        Polarity::ActiveHigh => pin.get_max_duty(),
        Polarity::ActiveLow => 0,
    };
    pin.set_duty(duty);
    pin.enable();
}

/// A previous program may have left the neopixels lit.
pub fn indicators_off<S>(strip: &mut S, count: usize) -> Result<(), S::Error>
where
    S: SmartLedsWrite<Color = RGB8>,
{
    strip.write((0..count).map(|_| RGB8::default()))
}
