use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};

pub mod animation;
pub mod data;
pub mod interaction;
pub mod math;
pub mod mesh;
pub mod render;
pub mod scene;
pub mod species;
pub mod stars;
pub mod support;

use animation::SwayAnimation;
use data::Plant;
use interaction::OrbitControls;
use math::Jitter;
use mesh::assemble;
use render::RenderPipeline;
use species::garden_bed;
use stars::StarField;
use support::{probe_webgl, DegradeReason, StageState};

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Main engine state exposed to JavaScript.
///
/// Construction never throws: if WebGL is unavailable or pipeline setup
/// fails, the stage comes up degraded and the host reads `fallback_message`
/// instead of rendering.
#[wasm_bindgen]
pub struct PlantStage {
    state: StageState,
    pipeline: Option<RenderPipeline>,
    plant: Option<Plant>,
    controls: OrbitControls,
    sway: SwayAnimation,
    hovered: bool,
    time: f32,
}

#[wasm_bindgen]
impl PlantStage {
    /// Create a new stage on the given canvas
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> PlantStage {
        let width = canvas.width() as i32;
        let height = canvas.height() as i32;

        let mut stage = PlantStage {
            state: StageState::default(),
            pipeline: None,
            plant: None,
            controls: OrbitControls::new(5.0),
            sway: SwayAnimation::default(),
            hovered: false,
            time: 0.0,
        };

        // Probe with a throwaway canvas before touching the real one
        if !probe_webgl() {
            stage.state.degrade(DegradeReason::WebglUnsupported);
            return stage;
        }

        match Self::build_pipeline(&canvas, width, height) {
            Ok(pipeline) => stage.pipeline = Some(pipeline),
            Err(err) => {
                web_sys::console::error_1(&JsValue::from_str(&err));
                stage.state.degrade(DegradeReason::RenderFailed);
            }
        }

        stage
    }

    fn build_pipeline(
        canvas: &HtmlCanvasElement,
        width: i32,
        height: i32,
    ) -> Result<RenderPipeline, String> {
        let gl = canvas
            .get_context("webgl2")
            .map_err(|_| "Failed to acquire WebGL2 context".to_string())?
            .ok_or("WebGL2 context is unavailable")?
            .dyn_into::<WebGl2RenderingContext>()
            .map_err(|_| "Unexpected context type".to_string())?;

        let mut pipeline = RenderPipeline::new(gl, width, height)?;

        let mut rng = Jitter::new(js_sys::Date::now() as u32);
        let stars = StarField::new(100, 50.0, 50.0, &mut rng);
        pipeline.upload_stars(&stars.particle_data())?;

        Ok(pipeline)
    }

    /// Load a plant record from YAML and rebuild the scene.
    ///
    /// Any failure, bad data included, degrades the stage rather than
    /// throwing; the host falls back to its static card.
    #[wasm_bindgen]
    pub fn load_plant(&mut self, yaml: &str) {
        if self.state.is_degraded() {
            return;
        }

        if let Err(err) = self.load_plant_internal(yaml) {
            web_sys::console::error_1(&JsValue::from_str(&err));
            self.state.degrade(DegradeReason::RenderFailed);
        }
    }

    fn load_plant_internal(&mut self, yaml: &str) -> Result<(), String> {
        let plant = Plant::from_yaml(yaml)?;

        let pipeline = self
            .pipeline
            .as_mut()
            .ok_or("Pipeline is not initialized")?;

        // Fresh jitter per build; structure is seed-independent
        let mut rng = Jitter::new(js_sys::Date::now() as u32);

        let assembly = plant.species().build(&mut rng);
        let plant_mesh = assemble(&assembly);
        pipeline.upload_plant_mesh(&plant_mesh)?;

        let bed = garden_bed(&mut rng);
        let stage_mesh = assemble(&bed);
        pipeline.upload_stage_mesh(&stage_mesh)?;

        self.plant = Some(plant);
        Ok(())
    }

    /// Update and render a frame
    #[wasm_bindgen]
    pub fn render(&mut self, dt: f32) {
        if self.state.is_degraded() {
            return;
        }

        self.time += dt;
        self.controls.update(dt);

        if let Some(pipeline) = self.pipeline.as_mut() {
            pipeline.camera_position = self.controls.eye();
            pipeline.camera_target = self.controls.target;

            let model = self.sway.model_matrix(self.time, self.hovered);
            pipeline.render(self.time, &model);
        }
    }

    /// Orbit the camera by a pointer drag
    #[wasm_bindgen]
    pub fn orbit(&mut self, delta_x: f32, delta_y: f32) {
        self.controls.orbit(delta_x, delta_y);
    }

    /// Zoom by a wheel delta
    #[wasm_bindgen]
    pub fn zoom(&mut self, delta: f32) {
        self.controls.zoom(delta);
    }

    /// Pan the orbit target
    #[wasm_bindgen]
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        self.controls.pan(delta_x, delta_y);
    }

    /// Pointer entered the canvas
    #[wasm_bindgen]
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    /// Pointer left the canvas
    #[wasm_bindgen]
    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    /// Resize the drawing surface
    #[wasm_bindgen]
    pub fn resize(&mut self, width: i32, height: i32) {
        if let Some(pipeline) = self.pipeline.as_mut() {
            pipeline.resize(width, height);
        }
    }

    /// Whether the stage has fallen back to the static display
    #[wasm_bindgen]
    pub fn is_degraded(&self) -> bool {
        self.state.is_degraded()
    }

    /// Explanation and plant name for the host's fallback card
    #[wasm_bindgen]
    pub fn fallback_message(&self) -> Option<String> {
        self.state.reason().map(|reason| {
            match self.plant.as_ref() {
                Some(plant) => format!("{}: {}", plant.name, reason.message()),
                None => reason.message().to_string(),
            }
        })
    }

    /// Summary of the loaded plant (returns JSON string)
    #[wasm_bindgen]
    pub fn plant_info(&self) -> Option<String> {
        self.plant.as_ref().map(|plant| {
            format!(
                r#"{{"id":"{}","name":"{}","scientific_name":"{}","category":"{}","description":"{}"}}"#,
                escape_json(&plant.id),
                escape_json(&plant.name),
                escape_json(&plant.scientific_name),
                plant.category.as_str(),
                escape_json(&plant.description)
            )
        })
    }
}

/// Escape special characters for JSON
fn escape_json(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_json() {
        assert_eq!(escape_json("tulsi"), "tulsi");
        assert_eq!(escape_json("line\nbreak"), "line\\nbreak");
        assert_eq!(escape_json(r#"holy "basil""#), r#"holy \"basil\""#);
    }
}
