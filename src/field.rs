// Simulation context for the backdrop particle field. Owns every piece of
// state the animation mutates, so nothing lives in globals; the frame loop
// hands it one pointer snapshot per step.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::particle::{Particle, ShapeKind};

pub const DISC_COUNT: usize = 25;
pub const SQUARE_COUNT: usize = 15;
pub const TRIANGLE_COUNT: usize = 10;

// Shared with the renderer for proximity lines.
pub const LINK_RADIUS: f64 = 150.0;
pub const LINK_BASE_ALPHA: f64 = 0.2;

const REPULSE_RADIUS: f64 = 100.0;
const REPULSE_STRENGTH: f64 = 0.02;
const DAMPING: f64 = 0.99;
const JITTER: f64 = 0.005;
const MAX_SPEED: f64 = 2.0;

/// Pointer position as of the start of the current frame.
#[derive(Copy, Clone, Debug, Default)]
pub struct PointerSnapshot {
    pub x: f64,
    pub y: f64,
}

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    rng: SmallRng,
}

impl ParticleField {
    pub fn new(width: f64, height: f64) -> ParticleField {
        ParticleField::with_rng(width, height, SmallRng::from_entropy())
    }

    // Deterministic construction; tests seed with `SmallRng::seed_from_u64`.
    pub fn with_rng(width: f64, height: f64, rng: SmallRng) -> ParticleField {
        let mut field = ParticleField {
            width,
            height,
            particles: Vec::new(),
            rng,
        };
        field.reset(width, height);
        field
    }

    /// Tears down and respawns the whole population against the new surface
    /// dimensions. Runs on every resize, including the initial one.
    pub fn reset(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.particles.clear();
        self.particles
            .reserve(DISC_COUNT + SQUARE_COUNT + TRIANGLE_COUNT);
        for _ in 0..DISC_COUNT {
            let p = Particle::spawn(ShapeKind::Disc, width, height, &mut self.rng);
            self.particles.push(p);
        }
        for _ in 0..SQUARE_COUNT {
            let p = Particle::spawn(ShapeKind::Square, width, height, &mut self.rng);
            self.particles.push(p);
        }
        for _ in 0..TRIANGLE_COUNT {
            let p = Particle::spawn(ShapeKind::Triangle, width, height, &mut self.rng);
            self.particles.push(p);
        }
    }

    /// Advances every particle by one frame: pointer repulsion, integration,
    /// damping, wall bounce, jitter, speed cap — in that order.
    pub fn step(&mut self, pointer: PointerSnapshot) {
        for particle in &mut self.particles {
            let to_pointer = vecmath::vec2_sub([pointer.x, pointer.y], particle.pos);
            let distance = vecmath::vec2_len(to_pointer);
            // Skipping the degenerate zero-distance case keeps the direction
            // well-defined.
            if distance < REPULSE_RADIUS && distance > 0.0 {
                let force = (REPULSE_RADIUS - distance) / REPULSE_RADIUS;
                let push = vecmath::vec2_scale(to_pointer, force * REPULSE_STRENGTH / distance);
                particle.vel = vecmath::vec2_sub(particle.vel, push);
            }

            particle.pos = vecmath::vec2_add(particle.pos, particle.vel);

            particle.vel = vecmath::vec2_scale(particle.vel, DAMPING);

            if particle.pos[0] < 0.0 || particle.pos[0] > self.width {
                particle.vel[0] = -particle.vel[0];
                particle.pos[0] = particle.pos[0].max(0.0).min(self.width);
            }
            if particle.pos[1] < 0.0 || particle.pos[1] > self.height {
                particle.vel[1] = -particle.vel[1];
                particle.pos[1] = particle.pos[1].max(0.0).min(self.height);
            }

            // Jitter keeps the field from settling into a uniform drift.
            particle.vel[0] += (self.rng.gen::<f64>() - 0.5) * 2.0 * JITTER;
            particle.vel[1] += (self.rng.gen::<f64>() - 0.5) * 2.0 * JITTER;

            let speed = vecmath::vec2_len(particle.vel);
            if speed > MAX_SPEED {
                particle.vel = vecmath::vec2_scale(particle.vel, MAX_SPEED / speed);
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Opacity of the line joining two particles `distance` apart: the baseline
/// at contact, fading linearly to nothing at `LINK_RADIUS`.
pub fn link_alpha(distance: f64) -> f64 {
    if distance >= LINK_RADIUS {
        0.0
    } else {
        LINK_BASE_ALPHA * (1.0 - distance / LINK_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_field(width: f64, height: f64) -> ParticleField {
        ParticleField::with_rng(width, height, SmallRng::seed_from_u64(7))
    }

    fn far_pointer() -> PointerSnapshot {
        PointerSnapshot {
            x: -10_000.0,
            y: -10_000.0,
        }
    }

    #[test]
    fn reset_spawns_documented_population() {
        let field = seeded_field(800.0, 600.0);
        assert_eq!(field.particles().len(), 50);

        let count_of = |kind: ShapeKind| {
            field
                .particles()
                .iter()
                .filter(|p| p.kind == kind)
                .count()
        };
        assert_eq!(count_of(ShapeKind::Disc), DISC_COUNT);
        assert_eq!(count_of(ShapeKind::Square), SQUARE_COUNT);
        assert_eq!(count_of(ShapeKind::Triangle), TRIANGLE_COUNT);

        for p in field.particles() {
            assert!(p.pos[0] >= 0.0 && p.pos[0] <= 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] <= 600.0);
            let (min_size, max_size) = p.kind.size_range();
            assert!(p.size >= min_size && p.size <= max_size);
            let vel_range = p.kind.velocity_range();
            assert!(p.vel[0].abs() <= vel_range);
            assert!(p.vel[1].abs() <= vel_range);
        }
    }

    #[test]
    fn step_keeps_positions_bounded_and_speed_capped() {
        let mut field = seeded_field(320.0, 240.0);
        let pointer = PointerSnapshot { x: 160.0, y: 120.0 };
        for _ in 0..1_000 {
            field.step(pointer);
            for p in field.particles() {
                assert!(p.pos[0] >= 0.0 && p.pos[0] <= field.width());
                assert!(p.pos[1] >= 0.0 && p.pos[1] <= field.height());
                assert!(p.speed() <= MAX_SPEED + 1e-9);
            }
        }
    }

    #[test]
    fn wall_contact_inverts_velocity_and_clamps() {
        let mut field = seeded_field(200.0, 200.0);
        {
            let p = &mut field.particles_mut()[0];
            p.pos = [205.0, 100.0];
            p.vel = [1.5, 0.0];
        }
        field.step(far_pointer());
        let p = field.particles()[0];
        assert_eq!(p.pos[0], 200.0);
        assert!(p.vel[0] < 0.0);
    }

    #[test]
    fn pointer_repulsion_pushes_directly_away() {
        let mut field = seeded_field(400.0, 400.0);
        {
            let p = &mut field.particles_mut()[0];
            p.pos = [200.0, 200.0];
            p.vel = [0.0, 0.0];
        }
        // Pointer 50 units straight above the particle.
        field.step(PointerSnapshot { x: 200.0, y: 150.0 });
        let p = field.particles()[0];
        // Pushed downward, away from the pointer; the x axis only sees jitter.
        assert!(p.vel[1] > 0.0);
        assert!(p.vel[0].abs() <= JITTER);
    }

    #[test]
    fn seeded_fields_evolve_identically() {
        let mut a = seeded_field(640.0, 480.0);
        let mut b = seeded_field(640.0, 480.0);
        for _ in 0..100 {
            a.step(far_pointer());
            b.step(far_pointer());
        }
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.vel, pb.vel);
        }
    }

    #[test]
    fn link_alpha_fades_linearly() {
        assert!((link_alpha(0.0) - LINK_BASE_ALPHA).abs() < 1e-12);
        assert!((link_alpha(75.0) - LINK_BASE_ALPHA * 0.5).abs() < 1e-12);
        assert_eq!(link_alpha(150.0), 0.0);
        assert_eq!(link_alpha(400.0), 0.0);
    }
}
