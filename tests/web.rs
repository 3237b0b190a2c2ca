//! Browser-side smoke tests, run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use rust_wasm_site_frontend::field::{ParticleField, PointerSnapshot};
use rust_wasm_site_frontend::form::{validate, whatsapp_url, Inquiry};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn field_advances_under_entropy_seeding() {
    let mut field = ParticleField::new(640.0, 480.0);
    for _ in 0..60 {
        field.step(PointerSnapshot { x: 320.0, y: 240.0 });
    }
    assert_eq!(field.particles().len(), 50);
    for p in field.particles() {
        assert!(p.speed() <= 2.0 + 1e-9);
        assert!(p.pos[0] >= 0.0 && p.pos[0] <= 640.0);
        assert!(p.pos[1] >= 0.0 && p.pos[1] <= 480.0);
    }
}

#[wasm_bindgen_test]
fn deep_links_build_in_the_browser() {
    let inquiry = Inquiry {
        full_name: "Test Visitor".to_owned(),
        email: "visitor@example.com".to_owned(),
        whatsapp: "8825164657".to_owned(),
        company: String::new(),
        service: "Branding".to_owned(),
        budget: "$100 - $500".to_owned(),
        description: "Logo refresh".to_owned(),
    };
    assert!(validate(&inquiry).is_ok());
    assert!(whatsapp_url(&inquiry).starts_with("https://wa.me/918825164657?text="));
}

#[wasm_bindgen_test]
fn empty_inquiry_never_builds_a_link() {
    assert_eq!(validate(&Inquiry::default()).unwrap_err().len(), 6);
}
