//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Convert an sRGB color to linear space (alpha untouched), for sRGB surfaces
pub fn srgb_to_linear(color: [f32; 4]) -> [f32; 4] {
    fn channel(c: f32) -> f32 {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    [channel(color[0]), channel(color[1]), channel(color[2]), color[3]]
}

const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colors for game elements (sRGB)
pub mod colors {
    use super::rgb;

    pub const BACKGROUND: [f32; 4] = rgb(255, 255, 255);
    pub const LETTERBOX: [f32; 4] = rgb(20, 20, 24);
    pub const NET: [f32; 4] = rgb(200, 200, 200);
    pub const SCORE: [f32; 4] = rgb(130, 130, 130);
    pub const MENU_BAR: [f32; 4] = rgb(80, 80, 80);
    pub const MENU_TEXT: [f32; 4] = rgb(255, 255, 255);
    pub const SLIDER_LABEL: [f32; 4] = rgb(200, 200, 200);
    pub const SLIDER_TRACK: [f32; 4] = rgb(200, 200, 200);
    pub const SLIDER_KNOB: [f32; 4] = rgb(102, 191, 255);
    pub const SLIDER_KNOB_OUTLINE: [f32; 4] = rgb(255, 255, 255);
    pub const PAUSED: [f32; 4] = rgb(230, 41, 55);
    pub const PAUSED_HINT: [f32; 4] = rgb(130, 130, 130);
    pub const PLAYER_PADDLE: [f32; 4] = rgb(0, 121, 241);
    pub const COMPUTER_PADDLE: [f32; 4] = rgb(230, 41, 55);
    pub const BALL: [f32; 4] = rgb(0, 0, 0);
}
