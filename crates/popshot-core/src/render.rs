//! Drawing-surface abstraction.
//!
//! The real surface (canvas, framebuffer, window) is an external
//! collaborator. The simulation only issues three primitives against it.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// 8-bit RGB fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Target of per-frame draw requests.
pub trait RenderSurface {
    /// Clear the whole surface.
    fn clear(&mut self);

    fn fill_circle(&mut self, center: Position, radius: f64, color: Color);

    /// `origin` is the top-left corner.
    fn fill_rect(&mut self, origin: Position, width: f64, height: f64, color: Color);
}

/// One recorded draw request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DrawCommand {
    Clear,
    FillCircle {
        center: Position,
        radius: f64,
        color: Color,
    },
    FillRect {
        origin: Position,
        width: f64,
        height: f64,
        color: Color,
    },
}

/// A surface that records draw requests instead of rasterizing them.
/// Hand the commands to a real backend, or inspect them in tests.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the recorded commands, leaving the list empty.
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count()
    }

    pub fn rect_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
            .count()
    }
}

impl RenderSurface for DrawList {
    fn clear(&mut self) {
        // Anything recorded before a clear is invisible.
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Position, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, origin: Position, width: f64, height: f64, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            origin,
            width,
            height,
            color,
        });
    }
}
