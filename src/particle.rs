// A single decorative shape drifting across the backdrop canvas.

use rand::Rng;
use vecmath::Vector2;

use crate::color::Palette;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ShapeKind {
    Disc,
    Square,
    Triangle,
}

impl ShapeKind {
    // Initial velocity per axis is uniform in ±range.
    pub(crate) fn velocity_range(self) -> f64 {
        match self {
            ShapeKind::Disc => 0.25,
            ShapeKind::Square => 0.15,
            ShapeKind::Triangle => 0.2,
        }
    }

    // Radius for discs, half-extent for squares and triangles.
    pub(crate) fn size_range(self) -> (f64, f64) {
        match self {
            ShapeKind::Disc => (1.0, 3.0),
            ShapeKind::Square => (2.0, 6.0),
            ShapeKind::Triangle => (2.0, 5.0),
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ShapeKind::Square => Palette::Violet,
            _ => Palette::Sky,
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub kind: ShapeKind,
    // Fixed at spawn; radius or half-extent depending on the kind.
    pub size: f64,
}

impl Particle {
    pub fn spawn<R: Rng>(kind: ShapeKind, width: f64, height: f64, rng: &mut R) -> Particle {
        let vel_range = kind.velocity_range();
        let (min_size, max_size) = kind.size_range();
        Particle {
            pos: [rng.gen::<f64>() * width, rng.gen::<f64>() * height],
            vel: [
                (rng.gen::<f64>() - 0.5) * 2.0 * vel_range,
                (rng.gen::<f64>() - 0.5) * 2.0 * vel_range,
            ],
            kind,
            size: rng.gen::<f64>() * (max_size - min_size) + min_size,
        }
    }

    pub fn palette(&self) -> Palette {
        self.kind.palette()
    }

    pub fn speed(&self) -> f64 {
        vecmath::vec2_len(self.vel)
    }
}
