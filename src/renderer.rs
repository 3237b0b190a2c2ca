// Canvas renderer for the particle field. Owns the 2d context grabbed from
// the backdrop canvas on the DOM and redraws the whole surface every frame.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::field::{link_alpha, ParticleField, LINK_RADIUS};
use crate::particle::ShapeKind;

const LINK_LINE_WIDTH: f64 = 0.3;

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<CanvasRenderer, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(CanvasRenderer { canvas, context })
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    pub fn draw(&self, field: &ParticleField) -> Result<(), JsValue> {
        self.context.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        self.draw_particles(field)?;
        self.draw_links(field);
        Ok(())
    }

    fn draw_particles(&self, field: &ParticleField) -> Result<(), JsValue> {
        for particle in field.particles() {
            let [x, y] = particle.pos;
            let size = particle.size;
            #[allow(deprecated)]
            self.context
                .set_fill_style(&particle.palette().fill().into());
            match particle.kind {
                ShapeKind::Disc => {
                    self.context.begin_path();
                    self.context
                        .arc(x, y, size, 0.0, std::f64::consts::PI * 2.0)?;
                    self.context.fill();
                }
                ShapeKind::Square => {
                    self.context
                        .fill_rect(x - size, y - size, size * 2.0, size * 2.0);
                }
                ShapeKind::Triangle => {
                    self.context.begin_path();
                    self.context.move_to(x, y - size);
                    self.context.line_to(x - size, y + size);
                    self.context.line_to(x + size, y + size);
                    self.context.close_path();
                    self.context.fill();
                }
            }
        }
        Ok(())
    }

    // Every unordered pair within LINK_RADIUS gets a connecting line, faded
    // with distance and tinted by the first particle's palette. O(n^2), which
    // is 1225 pairs at the fixed population.
    fn draw_links(&self, field: &ParticleField) {
        let particles = field.particles();
        self.context.set_line_width(LINK_LINE_WIDTH);
        for (i, a) in particles.iter().enumerate() {
            for b in &particles[i + 1..] {
                let distance = vecmath::vec2_len(vecmath::vec2_sub(a.pos, b.pos));
                if distance >= LINK_RADIUS {
                    continue;
                }
                let stroke = a.palette().stroke(link_alpha(distance));
                self.context.begin_path();
                self.context.move_to(a.pos[0], a.pos[1]);
                self.context.line_to(b.pos[0], b.pos[1]);
                #[allow(deprecated)]
                self.context.set_stroke_style(&JsValue::from_str(&stroke));
                self.context.stroke();
            }
        }
    }
}
