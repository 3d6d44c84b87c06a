//! In-browser smoke tests. Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

use herbal_garden_3d::support::probe_webgl;
use herbal_garden_3d::PlantStage;

wasm_bindgen_test_configure!(run_in_browser);

fn make_canvas() -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_width(640);
    canvas.set_height(480);
    canvas
}

#[wasm_bindgen_test]
fn probe_does_not_throw() {
    // Result depends on the browser; the call itself must be safe
    let _ = probe_webgl();
}

#[wasm_bindgen_test]
fn stage_constructs_without_throwing() {
    let stage = PlantStage::new(make_canvas());
    // Either rendering or degraded with a message, never a panic
    if stage.is_degraded() {
        assert!(stage.fallback_message().is_some());
    } else {
        assert!(stage.fallback_message().is_none());
    }
}

#[wasm_bindgen_test]
fn bad_yaml_degrades_instead_of_throwing() {
    let mut stage = PlantStage::new(make_canvas());
    stage.load_plant("not: [valid");
    if !probe_webgl() {
        return; // already degraded before the load
    }
    assert!(stage.is_degraded());
    assert_eq!(stage.plant_info(), None);
}

#[wasm_bindgen_test]
fn render_is_safe_in_any_state() {
    let mut stage = PlantStage::new(make_canvas());
    stage.load_plant(
        r#"
id: "tulsi"
name: "Tulsi"
category: "medicinal"
"#,
    );
    for _ in 0..3 {
        stage.render(1.0 / 60.0);
    }
    stage.resize(320, 240);
    stage.render(1.0 / 60.0);
}
