//! Decorative drifting-circle field for renderers.
//!
//! Seeded from the universe seed on its own stream; nothing in game logic
//! reads it.

use crate::rng::Mulberry32;
use serde::Serialize;

/// Horizontal pixels per circle when sizing the field.
const PIXELS_PER_CIRCLE: f64 = 120.0;

/// Minimum number of circles regardless of width.
const MIN_CIRCLES: usize = 12;

/// One translucent circle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    /// Centre x.
    pub x: f64,
    /// Centre y.
    pub y: f64,
    /// Radius in pixels.
    pub radius: f64,
    /// Velocity along x per step.
    pub vx: f64,
    /// Velocity along y per step.
    pub vy: f64,
    /// Base hue in degrees.
    pub hue: u16,
    /// Peak opacity.
    pub alpha: f64,
}

/// A seeded field of drifting circles.
#[derive(Debug, Clone, Serialize)]
pub struct Backdrop {
    width: f64,
    height: f64,
    circles: Vec<Circle>,
}

impl Backdrop {
    /// Lay out circles for a viewport.
    pub fn new(seed: u32, width: f64, height: f64) -> Self {
        let mut rng = Mulberry32::new(seed);
        let count = MIN_CIRCLES.max((width / PIXELS_PER_CIRCLE).floor() as usize);
        let circles = (0..count)
            .map(|_| Circle {
                x: rng.next_f64() * width,
                y: rng.next_f64() * height,
                radius: rng.span(30.0, 140.0),
                vx: (rng.next_f64() - 0.5) * 0.6,
                vy: (rng.next_f64() - 0.5) * 0.6,
                hue: rng.span(180.0, 160.0).floor() as u16,
                alpha: rng.span(0.03, 0.08),
            })
            .collect();
        Self {
            width,
            height,
            circles,
        }
    }

    /// Circles in draw order.
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Update the viewport without re-seeding the circles.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Move every circle by its velocity, wrapping once it is fully off-screen.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for c in &mut self.circles {
            c.x += c.vx;
            c.y += c.vy;
            if c.x - c.radius > width {
                c.x = -c.radius;
            }
            if c.x + c.radius < 0.0 {
                c.x = width + c.radius;
            }
            if c.y - c.radius > height {
                c.y = -c.radius;
            }
            if c.y + c.radius < 0.0 {
                c.y = height + c.radius;
            }
        }
    }
}
