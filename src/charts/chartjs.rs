//! Chart.js binding
//!
//! The host page loads Chart.js as a global; charts are created through its
//! constructor and torn down with `destroy()`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::config::ChartConfig;
use super::{ChartError, ChartSurface};

#[wasm_bindgen]
extern "C" {
    /// A live Chart.js instance
    #[wasm_bindgen(js_name = Chart)]
    pub type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(context: &JsValue, config: &JsValue) -> Result<ChartJs, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &ChartJs);
}

/// Chart surface backed by the page's canvases
pub struct ChartJsSurface {
    document: Option<Document>,
}

impl ChartJsSurface {
    pub fn new() -> Self {
        Self {
            document: web_sys::window().and_then(|w| w.document()),
        }
    }

    fn canvas(&self, canvas_id: &str) -> Option<HtmlCanvasElement> {
        self.document
            .as_ref()?
            .get_element_by_id(canvas_id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()
    }
}

impl Default for ChartJsSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartSurface for ChartJsSurface {
    type Handle = ChartJs;

    fn has_canvas(&self, canvas_id: &str) -> bool {
        self.canvas(canvas_id).is_some()
    }

    fn create(
        &mut self,
        canvas_id: &str,
        config: &ChartConfig,
    ) -> Result<Option<ChartJs>, ChartError> {
        let canvas = match self.canvas(canvas_id) {
            Some(canvas) => canvas,
            None => return Ok(None),
        };

        let context = match canvas.get_context("2d") {
            Ok(Some(ctx)) => ctx
                .dyn_into::<CanvasRenderingContext2d>()
                .map_err(|_| ChartError::Construct("not a 2d context".to_string()))?,
            _ => return Err(ChartError::Construct("2d context unavailable".to_string())),
        };

        let json = serde_json::to_string(config)?;
        let config = js_sys::JSON::parse(&json).map_err(describe)?;

        ChartJs::new(&context.into(), &config)
            .map(Some)
            .map_err(describe)
    }

    fn destroy(&mut self, handle: ChartJs) {
        handle.destroy();
    }
}

fn describe(err: JsValue) -> ChartError {
    ChartError::Construct(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
