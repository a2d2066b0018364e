//! Text rendering with glyphon
//!
//! `DrawCmd::Text` is laid out in game pixels and drawn at the viewport scale,
//! so glyphs are rasterised for the real window size.

use glam::Vec2;
use glyphon::{
    Attrs, Buffer, Cache, Color, Family, FontSystem, Metrics, PrepareError, RenderError,
    Resolution, Shaping, SwashCache, TextArea, TextAtlas, TextBounds,
    TextRenderer as GlyphonTextRenderer, Viewport as GlyphonViewport, Weight,
};

use super::view::{DrawCmd, DrawList, TextAlign};
use super::viewport::Viewport;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Line height as a multiple of the font size
const LINE_HEIGHT: f32 = 1.2;

/// A shaped line kept between frames; reshaped only when its text or size changes
struct TextSlot {
    buffer: Buffer,
    text: String,
    size: f32,
}

pub struct TextRenderer {
    font_system: FontSystem,
    swash_cache: SwashCache,
    viewport: GlyphonViewport,
    atlas: TextAtlas,
    renderer: GlyphonTextRenderer,
    slots: Vec<TextSlot>,
}

impl TextRenderer {
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, format: wgpu::TextureFormat) -> Self {
        let font_system = FontSystem::new();
        let swash_cache = SwashCache::new();
        let cache = Cache::new(device);
        let viewport = GlyphonViewport::new(device, &cache);
        let mut atlas = TextAtlas::new(device, queue, &cache, format);
        let renderer =
            GlyphonTextRenderer::new(&mut atlas, device, wgpu::MultisampleState::default(), None);

        Self {
            font_system,
            swash_cache,
            viewport,
            atlas,
            renderer,
            slots: Vec::new(),
        }
    }

    /// Shape and upload every text command in `list` for this frame
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        list: &DrawList,
        viewport: &Viewport,
    ) -> Result<(), PrepareError> {
        self.viewport.update(
            queue,
            Resolution {
                width: viewport.window.x as u32,
                height: viewport.window.y as u32,
            },
        );

        let mut placed = Vec::new();
        for cmd in &list.commands {
            let DrawCmd::Text {
                text,
                pos,
                size,
                color,
                align,
            } = cmd
            else {
                continue;
            };

            shape_slot(&mut self.slots, placed.len(), &mut self.font_system, text, *size);
            placed.push((*pos, *align, *color));
        }

        let bounds = court_bounds(viewport);
        let areas = self.slots.iter().zip(&placed).map(|(slot, &(pos, align, color))| {
            let origin = text_origin(pos, line_width(&slot.buffer), align, viewport);
            TextArea {
                buffer: &slot.buffer,
                left: origin.x,
                top: origin.y,
                scale: viewport.scale,
                bounds,
                default_color: text_color(color),
                custom_glyphs: &[],
            }
        });

        self.renderer.prepare(
            device,
            queue,
            &mut self.font_system,
            &mut self.atlas,
            &self.viewport,
            areas,
            &mut self.swash_cache,
        )
    }

    /// Draw the prepared text into an open render pass
    pub fn render(&self, render_pass: &mut wgpu::RenderPass<'_>) -> Result<(), RenderError> {
        self.renderer.render(&self.atlas, &self.viewport, render_pass)
    }

    /// Free atlas space for glyphs not used this frame
    pub fn trim(&mut self) {
        self.atlas.trim();
    }
}

/// Make sure slot `index` holds `text` shaped at `size`
fn shape_slot(
    slots: &mut Vec<TextSlot>,
    index: usize,
    font_system: &mut FontSystem,
    text: &str,
    size: f32,
) {
    if index == slots.len() {
        slots.push(TextSlot {
            buffer: Buffer::new(font_system, Metrics::new(size, size * LINE_HEIGHT)),
            text: String::new(),
            // NaN never matches, so a new slot is always shaped
            size: f32::NAN,
        });
    }
    let slot = &mut slots[index];
    if slot.text == text && slot.size == size {
        return;
    }

    slot.buffer.set_metrics(font_system, Metrics::new(size, size * LINE_HEIGHT));
    slot.buffer.set_size(font_system, None, None);
    slot.buffer.set_text(
        font_system,
        text,
        &Attrs::new().family(Family::SansSerif).weight(Weight::BOLD),
        Shaping::Basic,
        None,
    );
    slot.buffer.shape_until_scroll(font_system, false);
    log::trace!("Shaped text {text:?} at {size}px");
    slot.text = text.to_string();
    slot.size = size;
}

/// Widest laid-out line in game pixels
fn line_width(buffer: &Buffer) -> f32 {
    buffer
        .layout_runs()
        .map(|run| run.line_w)
        .fold(0.0, f32::max)
}

/// Window position of the top-left of a line `width` game pixels wide
pub fn text_origin(pos: Vec2, width: f32, align: TextAlign, viewport: &Viewport) -> Vec2 {
    let left = match align {
        TextAlign::Left => pos.x,
        TextAlign::Center => pos.x - width / 2.0,
    };
    viewport.game_to_window(Vec2::new(left, pos.y))
}

/// Clip rectangle covering the court, so text never spills into the letterbox bars
pub fn court_bounds(viewport: &Viewport) -> TextBounds {
    let min = viewport.game_to_window(Vec2::ZERO);
    let max = viewport.game_to_window(Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    TextBounds {
        left: min.x.floor() as i32,
        top: min.y.floor() as i32,
        right: max.x.ceil() as i32,
        bottom: max.y.ceil() as i32,
    }
}

/// Palette colors are sRGB floats; glyphon takes sRGB bytes
pub fn text_color(color: [f32; 4]) -> Color {
    let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    Color::rgba(r, g, b, a)
}
