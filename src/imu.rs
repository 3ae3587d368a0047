use accelerometer::Accelerometer;

use crate::tracker::Sample;

/// Standard gravity, m/s² per g.
pub const STANDARD_GRAVITY: f32 = 9.806_65;

/// The only thing the tracker needs from a motion sensor.
pub trait Imu {
    type Error;

    /// Blocking read of the current acceleration in m/s².
    fn read_acceleration(&mut self) -> Result<Sample, Self::Error>;
}

/// Wraps a driver reporting normalized g (like the lis3dh) so it reads in
/// m/s², the unit the drift values were tuned in.
pub struct GravityScaled<A> {
    inner: A,
}

impl<A> GravityScaled<A> {
    pub fn new(inner: A) -> Self {
        GravityScaled { inner }
    }

    pub fn inner(&mut self) -> &mut A {
        &mut self.inner
    }

    pub fn release(self) -> A {
        self.inner
    }
}

impl<A: Accelerometer> Imu for GravityScaled<A> {
    type Error = accelerometer::Error<A::Error>;

    fn read_acceleration(&mut self) -> Result<Sample, Self::Error> {
        let g = self.inner.accel_norm()?;

        Ok(Sample::new(
            g.x * STANDARD_GRAVITY,
            g.y * STANDARD_GRAVITY,
            g.z * STANDARD_GRAVITY,
        ))
    }
}
