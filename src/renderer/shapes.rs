//! Recorded 2D primitives
//!
//! `DrawList` is a canvas that just remembers what it was asked to draw. The
//! headless driver and tests use it; a windowed front end would replay it.

use glam::Vec2;

use super::{Canvas, Color, FontSize};
use crate::ui::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill(Color),
    Rect {
        rect: Rect,
        color: Color,
        /// 0 = filled, otherwise outline width
        outline: f32,
        radius: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
        outline: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    Text {
        pos: Vec2,
        text: String,
        size: FontSize,
        color: Color,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text drawn, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}

impl Canvas for DrawList {
    fn fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn rect(&mut self, rect: Rect, color: Color, outline: f32, radius: f32) {
        self.commands.push(DrawCommand::Rect {
            rect,
            color,
            outline,
            radius,
        });
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Color, outline: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            outline,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn text(&mut self, pos: Vec2, text: &str, size: FontSize, color: Color) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_string(),
            size,
            color,
        });
    }
}

/// Vertical gradient as one line per `step` pixels. Draws nothing unless
/// `step` is positive.
pub fn gradient(canvas: &mut dyn Canvas, area: Rect, top: Color, bottom: Color, step: f32) {
    if step.is_nan() || step <= 0.0 {
        return;
    }
    let mut y = 0.0;
    while y < area.size.y {
        let t = y / area.size.y;
        let color = top.lerp(bottom, t);
        let from = Vec2::new(area.min.x, area.min.y + y);
        canvas.line(from, from + Vec2::new(area.size.x, 0.0), step, color);
        y += step;
    }
}

/// Horizontal progress bar; `percent` clamped to 0-100
pub fn progress_bar(canvas: &mut dyn Canvas, area: Rect, percent: u8, fg: Color, bg: Color) {
    canvas.rect(area, bg, 0.0, 0.0);
    let filled = area.size.x * f32::from(percent.min(100)) / 100.0;
    if filled > 0.0 {
        canvas.rect(
            Rect {
                min: area.min,
                size: Vec2::new(filled, area.size.y),
            },
            fg,
            0.0,
            0.0,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::palette;

    #[test]
    fn test_gradient_covers_area() {
        let mut list = DrawList::new();
        gradient(
            &mut list,
            Rect::new(0.0, 0.0, 100.0, 40.0),
            palette::PURPLE,
            palette::DARK_PURPLE,
            4.0,
        );
        assert_eq!(list.len(), 10);
        assert!(matches!(list.commands[0], DrawCommand::Line { color, .. } if color == palette::PURPLE));
    }

    #[test]
    fn test_gradient_ignores_non_positive_step() {
        let mut list = DrawList::new();
        let area = Rect::new(0.0, 0.0, 100.0, 40.0);
        for step in [0.0, -2.0, f32::NAN] {
            gradient(&mut list, area, palette::PURPLE, palette::DARK_PURPLE, step);
        }
        assert!(list.is_empty());
    }

    #[test]
    fn test_progress_bar_fill_width() {
        let mut list = DrawList::new();
        progress_bar(&mut list, Rect::new(0.0, 0.0, 40.0, 5.0), 50, palette::GREEN, palette::LIGHT_GRAY);
        match &list.commands[1] {
            DrawCommand::Rect { rect, .. } => assert_eq!(rect.size.x, 20.0),
            other => panic!("unexpected {other:?}"),
        }

        list.clear();
        progress_bar(&mut list, Rect::new(0.0, 0.0, 40.0, 5.0), 0, palette::GREEN, palette::LIGHT_GRAY);
        assert_eq!(list.len(), 1);
    }
}
