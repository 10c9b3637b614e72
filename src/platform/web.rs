//! Browser implementations of the platform collaborators

use std::collections::HashMap;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlImageElement, Window};

use super::{FrameHandle, FrameScheduler, ScoreSink};
use crate::error::PlatformError;
use crate::renderer::{Color, Surface};
use crate::sim::{Aabb, SpriteId};

const GAME_OVER_FONT: &str = "30px Arial";

/// Wrap a thrown JS value
pub fn js_error(value: JsValue) -> PlatformError {
    PlatformError::Js(format!("{:?}", value))
}

pub fn window() -> Result<Window, PlatformError> {
    web_sys::window().ok_or_else(|| PlatformError::Js("no window".to_string()))
}

fn document() -> Result<Document, PlatformError> {
    window()?
        .document()
        .ok_or_else(|| PlatformError::Js("no document".to_string()))
}

fn element_by_id(id: &str) -> Result<Element, PlatformError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| PlatformError::MissingElement(id.to_string()))
}

/// 2-D canvas drawing surface
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    sprites: HashMap<SpriteId, HtmlImageElement>,
}

impl CanvasSurface {
    /// Attach to the canvas element `id` and size it to the field
    pub fn from_canvas_id(id: &str, width: f32, height: f32) -> Result<Self, PlatformError> {
        let canvas: HtmlCanvasElement = element_by_id(id)?
            .dyn_into()
            .map_err(|_| PlatformError::WrongElementType(id.to_string()))?;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or(PlatformError::ContextUnavailable)?
            .dyn_into()
            .map_err(|_| PlatformError::ContextUnavailable)?;

        Ok(Self {
            ctx,
            width: width as f64,
            height: height as f64,
            sprites: HashMap::new(),
        })
    }

    /// Start loading an image for `sprite`; it is drawn once complete
    pub fn load_sprite(&mut self, sprite: SpriteId, url: &str) -> Result<(), PlatformError> {
        let image = HtmlImageElement::new().map_err(js_error)?;
        image.set_src(url);
        self.sprites.insert(sprite, image);
        log::info!("Loading {:?} sprite from {}", sprite, url);
        Ok(())
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_rect(&mut self, rect: Aabb, color: Color) {
        let size = rect.size();
        self.ctx.set_fill_style_str(color.0);
        self.ctx
            .fill_rect(rect.min.x as f64, rect.min.y as f64, size.x as f64, size.y as f64);
    }

    fn sprite_ready(&self, sprite: SpriteId) -> bool {
        self.sprites
            .get(&sprite)
            .is_some_and(|image| image.complete() && image.natural_height() != 0)
    }

    fn draw_sprite(&mut self, sprite: SpriteId, rect: Aabb) {
        let Some(image) = self.sprites.get(&sprite) else {
            return;
        };
        let size = rect.size();
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            rect.min.x as f64,
            rect.min.y as f64,
            size.x as f64,
            size.y as f64,
        ) {
            log::warn!("Sprite draw failed: {:?}", e);
        }
    }

    fn fill_text(&mut self, text: &str, center: Vec2, color: Color) {
        self.ctx.set_fill_style_str(color.0);
        self.ctx.set_font(GAME_OVER_FONT);
        self.ctx.set_text_align("center");
        if let Err(e) = self.ctx.fill_text(text, center.x as f64, center.y as f64) {
            log::warn!("Text draw failed: {:?}", e);
        }
    }
}

/// DOM element showing the score
pub struct DomScore {
    element: Element,
}

impl DomScore {
    pub fn from_id(id: &str) -> Result<Self, PlatformError> {
        Ok(Self {
            element: element_by_id(id)?,
        })
    }
}

impl ScoreSink for DomScore {
    fn set_text(&mut self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}

/// `requestAnimationFrame`-backed scheduler with a persistent callback
pub struct WebScheduler {
    window: Window,
    callback: Closure<dyn FnMut(f64)>,
}

impl WebScheduler {
    pub fn new(window: Window, callback: Closure<dyn FnMut(f64)>) -> Self {
        Self { window, callback }
    }
}

impl FrameScheduler for WebScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle, PlatformError> {
        self.window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
            .map(FrameHandle)
            .map_err(js_error)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle.0) {
            log::warn!("cancelAnimationFrame failed: {:?}", e);
        }
    }
}
