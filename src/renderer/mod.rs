//! Rendering module
//!
//! `view` is the View: a pure function from game state to draw commands.
//! `pipeline` tessellates those commands and draws them with wgpu; text
//! commands go through glyphon in `text`.

pub mod pipeline;
pub mod shapes;
pub mod text;
pub mod vertex;
pub mod view;
pub mod viewport;

pub use pipeline::RenderState;
pub use text::TextRenderer;
pub use view::{DrawCmd, DrawList, TextAlign, draw};
pub use viewport::Viewport;
