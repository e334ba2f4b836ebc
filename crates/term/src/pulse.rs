//! Highlight pulse - a frame-driven color interpolator.
//!
//! The selected region is drawn in a color that swings back and forth between
//! a darker and a brighter variant of its tile color. [`ColorPulse::update`] is
//! called once per frame; [`ColorPulse::current`] is the color to draw.

use crate::fb::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPulse {
    min: Rgb,
    max: Rgb,
    /// Frames from `min` to `max`. At least 2.
    speed: u32,
    frame: u32,
    current: Rgb,
}

impl ColorPulse {
    /// Pulse between `min` and `max`, starting halfway up the ramp.
    pub fn new(min: Rgb, max: Rgb, speed: u32) -> Self {
        let speed = speed.max(2);
        let mut pulse = Self {
            min,
            max,
            speed,
            frame: speed / 2,
            current: min,
        };
        pulse.current = pulse.color_at(pulse.frame);
        pulse
    }

    /// Pulse `spread` levels below and above `base` on every channel.
    pub fn around(base: Rgb, spread: u8, speed: u32) -> Self {
        let spread = spread as i16;
        Self::new(base.offset(-spread), base.offset(spread), speed)
    }

    /// Advance one frame.
    pub fn update(&mut self) {
        self.frame = (self.frame + 1) % self.period();
        self.current = self.color_at(self.frame);
    }

    pub fn current(&self) -> Rgb {
        self.current
    }

    /// Frames in one full dark-bright-dark cycle.
    pub fn period(&self) -> u32 {
        2 * self.speed - 2
    }

    /// Triangle wave: ramps up for `speed` frames, then back down.
    fn color_at(&self, frame: u32) -> Rgb {
        let step = if frame < self.speed {
            frame
        } else {
            self.speed - 2 - (frame - self.speed)
        };
        let lerp = |lo: u8, hi: u8| {
            let lo = lo as i32;
            let hi = hi as i32;
            (lo + (hi - lo) * step as i32 / self.speed as i32) as u8
        };
        Rgb::new(
            lerp(self.min.r, self.max.r),
            lerp(self.min.g, self.max.g),
            lerp(self.min.b, self.max.b),
        )
    }
}

impl Default for ColorPulse {
    fn default() -> Self {
        let grey = Rgb::new(200, 200, 200);
        Self::around(grey, 48, 60)
    }
}
