//! WebGL capability probe and the degraded-stage state machine.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

/// Why the stage fell back to the static display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradeReason {
    /// The capability probe could not acquire a context
    WebglUnsupported,
    /// Context or pipeline setup, or a scene build, raised an error
    RenderFailed,
}

impl DegradeReason {
    /// Generic explanatory string for the host's fallback card
    pub fn message(&self) -> &'static str {
        match self {
            DegradeReason::WebglUnsupported => "WebGL is not supported in your browser",
            DegradeReason::RenderFailed => "3D rendering failed",
        }
    }
}

/// Two-state lifecycle of the visual component.
///
/// Degraded is sticky: the first reason wins and there is no path back to
/// Normal short of constructing a new stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StageState {
    #[default]
    Normal,
    Degraded(DegradeReason),
}

impl StageState {
    pub fn degrade(&mut self, reason: DegradeReason) {
        if let StageState::Normal = self {
            *self = StageState::Degraded(reason);
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, StageState::Degraded(_))
    }

    pub fn reason(&self) -> Option<DegradeReason> {
        match self {
            StageState::Normal => None,
            StageState::Degraded(reason) => Some(*reason),
        }
    }
}

/// Probe for WebGL support using a throwaway canvas.
///
/// Any exception during acquisition means "unsupported"; nothing propagates.
pub fn probe_webgl() -> bool {
    try_probe_webgl().unwrap_or(false)
}

fn try_probe_webgl() -> Result<bool, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;

    if canvas.get_context("webgl")?.is_some() {
        return Ok(true);
    }
    Ok(canvas.get_context("experimental-webgl")?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_normal() {
        let state = StageState::default();
        assert!(!state.is_degraded());
        assert_eq!(state.reason(), None);
    }

    #[test]
    fn test_degrade_records_reason() {
        let mut state = StageState::Normal;
        state.degrade(DegradeReason::WebglUnsupported);
        assert!(state.is_degraded());
        assert_eq!(state.reason(), Some(DegradeReason::WebglUnsupported));
    }

    #[test]
    fn test_degraded_is_sticky() {
        let mut state = StageState::Normal;
        state.degrade(DegradeReason::RenderFailed);
        state.degrade(DegradeReason::WebglUnsupported);
        // First reason wins; no transition back
        assert_eq!(state.reason(), Some(DegradeReason::RenderFailed));
    }

    #[test]
    fn test_messages_are_generic() {
        assert_eq!(
            DegradeReason::WebglUnsupported.message(),
            "WebGL is not supported in your browser"
        );
        assert_eq!(DegradeReason::RenderFailed.message(), "3D rendering failed");
    }
}
