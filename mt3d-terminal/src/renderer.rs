/// ASCII line rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use mt3d_core::camera::project_with;
use mt3d_core::{Camera, GeomError, Line};
use nalgebra::Point3;
use std::io::Write;

use crate::scene::Shade;

/// Longest line, in cells, that gets stepped through cell by cell
const MAX_LINE_STEPS: f32 = 2048.0;

/// Renderer that draws projected line lists into a character grid
pub struct LineRenderer {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
    shade_buffer: Vec<Option<Shade>>,
}

impl LineRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            char_buffer: vec![' '; size],
            shade_buffer: vec![None; size],
        }
    }

    pub fn clear(&mut self) {
        self.char_buffer.fill(' ');
        self.shade_buffer.fill(None);
    }

    /// Project every line through the camera and rasterize it.
    ///
    /// Lines with an endpoint behind the camera are skipped.
    pub fn render_lines(
        &mut self,
        lines: &[(Line, Shade)],
        camera: &Camera,
    ) -> Result<(), GeomError> {
        let view_projection = camera.view_projection_matrix()?;
        let viewport = camera.viewport_matrix();

        for ((start, end), shade) in lines {
            let (Some(a), Some(b)) = (
                project_with(start, &view_projection, &viewport),
                project_with(end, &view_projection, &viewport),
            ) else {
                continue;
            };
            self.rasterize_line(&a, &b, *shade);
        }
        Ok(())
    }

    fn rasterize_line(&mut self, a: &Point3<f32>, b: &Point3<f32>, shade: Shade) {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let steps = dx.abs().max(dy.abs()).ceil().min(MAX_LINE_STEPS) as usize;

        for i in 0..=steps {
            let t = if steps == 0 { 0.0 } else { i as f32 / steps as f32 };
            self.plot(a.x + dx * t, a.y + dy * t, shade);
        }
    }

    fn plot(&mut self, x: f32, y: f32, shade: Shade) {
        if x < 0.0 || y < 0.0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = y * self.width + x;
        self.char_buffer[idx] = glyph(shade);
        self.shade_buffer[idx] = Some(shade);
    }

    /// Character at a cell, for inspecting a rendered frame
    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        (x < self.width && y < self.height).then(|| self.char_buffer[y * self.width + x])
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                let color = match self.shade_buffer[idx] {
                    None | Some(Shade::Grid) => Color::DarkGrey,
                    Some(Shade::Shape) => Color::White,
                    Some(Shade::Hit) => Color::Red,
                    Some(Shade::Plane) => Color::Green,
                    Some(Shade::Marker) => Color::Cyan,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(self.char_buffer[idx]))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

fn glyph(shade: Shade) -> char {
    match shade {
        Shade::Grid => '.',
        Shade::Shape => '*',
        Shade::Hit => '#',
        Shade::Plane => '+',
        Shade::Marker => '@',
    }
}
