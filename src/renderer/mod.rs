//! Drawing boundary
//!
//! The game never talks to a window. Entities draw themselves onto a
//! `Canvas`, which a front end implements (or `DrawList` records).
//! Nothing here feeds back into game state.

pub mod shapes;

use glam::Vec2;

pub use shapes::{DrawCommand, DrawList};

use crate::game::{Game, Screen};
use crate::persistence::ScoreStore;
use crate::settings::Layout;
use crate::sim::{Message, RandomSource, Round, Student, Teacher};
use crate::ui::{Button, Rect};

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        let [r, g, b, _] = self.0;
        Self([r, g, b, a])
    }

    /// Linear blend toward `other`, `t` in 0..=1
    pub fn lerp(self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mut out = [0u8; 4];
        for (i, o) in out.iter_mut().enumerate() {
            let a = f32::from(self.0[i]);
            let b = f32::from(other.0[i]);
            *o = (a + (b - a) * t).round() as u8;
        }
        Self(out)
    }
}

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const LIGHT_GRAY: Color = Color::rgb(200, 200, 200);
    pub const DARK_GRAY: Color = Color::rgb(50, 50, 50);
    pub const RED: Color = Color::rgb(220, 50, 50);
    pub const GREEN: Color = Color::rgb(50, 200, 50);
    pub const DARK_GREEN: Color = Color::rgb(30, 150, 30);
    pub const BLUE: Color = Color::rgb(50, 100, 200);
    pub const LIGHT_BLUE: Color = Color::rgb(100, 150, 255);
    pub const YELLOW: Color = Color::rgb(255, 220, 0);
    pub const ORANGE: Color = Color::rgb(255, 140, 0);
    pub const PURPLE: Color = Color::rgb(102, 51, 153);
    pub const DARK_PURPLE: Color = Color::rgb(70, 35, 105);
    pub const GOLD: Color = Color::rgb(255, 184, 28);
    pub const SKIN: Color = Color::rgb(255, 220, 177);
    pub const LIGHT_BROWN: Color = Color::rgb(180, 140, 100);
    pub const BROWN: Color = Color::rgb(139, 69, 19);
    pub const DESK: Color = Color::rgb(200, 150, 100);
    pub const CREAM: Color = Color::rgb(250, 248, 245);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Large,
    Medium,
    Small,
}

/// Font metrics for a layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fonts {
    pub large: f32,
    pub medium: f32,
    pub small: f32,
    /// Distance between lines of a multi-line button label
    pub line_spacing: f32,
}

impl Fonts {
    pub fn for_layout(layout: Layout) -> Self {
        match layout {
            Layout::Desktop => Self {
                large: 54.0,
                medium: 36.0,
                small: 24.0,
                line_spacing: 22.0,
            },
            Layout::Mobile => Self {
                large: 40.0,
                medium: 28.0,
                small: 20.0,
                line_spacing: 18.0,
            },
        }
    }

    pub fn px(&self, size: FontSize) -> f32 {
        match size {
            FontSize::Large => self.large,
            FontSize::Medium => self.medium,
            FontSize::Small => self.small,
        }
    }
}

/// Drawing surface implemented by the front end
pub trait Canvas {
    /// Fill the whole surface
    fn fill(&mut self, color: Color);
    /// Rectangle; `outline` 0 means filled
    fn rect(&mut self, rect: Rect, color: Color, outline: f32, radius: f32);
    fn circle(&mut self, center: Vec2, radius: f32, color: Color, outline: f32);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
    /// Single line of text centered on `pos`
    fn text(&mut self, pos: Vec2, text: &str, size: FontSize, color: Color);
}

/// Something that can put itself on a canvas
pub trait Draw {
    fn draw(&self, canvas: &mut dyn Canvas, fonts: &Fonts);
}

/// An item paired with where it goes on screen
pub struct Placed<'a, T> {
    pub item: &'a T,
    pub at: Vec2,
}

impl Draw for Student {
    fn draw(&self, canvas: &mut dyn Canvas, _fonts: &Fonts) {
        let p = self.pos;
        canvas.circle(p + Vec2::new(0.0, -20.0), 12.0, palette::SKIN, 0.0);
        canvas.rect(Rect::new(p.x - 15.0, p.y, 30.0, 40.0), palette::BLUE, 0.0, 0.0);
        // Arms
        canvas.line(p + Vec2::new(-15.0, 5.0), p + Vec2::new(-30.0, 10.0), 4.0, palette::SKIN);
        canvas.line(p + Vec2::new(15.0, 5.0), p + Vec2::new(30.0, 10.0), 4.0, palette::SKIN);
        // Legs
        canvas.line(p + Vec2::new(-10.0, 40.0), p + Vec2::new(-10.0, 60.0), 3.0, palette::DARK_GRAY);
        canvas.line(p + Vec2::new(10.0, 40.0), p + Vec2::new(10.0, 60.0), 3.0, palette::DARK_GRAY);

        canvas.text(p + Vec2::new(0.0, -50.0), self.activity().icon(), FontSize::Small, palette::BLACK);

        let progress = self.progress();
        if progress > 0 {
            let color = if progress < 100 { palette::GREEN } else { palette::ORANGE };
            shapes::progress_bar(
                canvas,
                Rect::new(p.x - 20.0, p.y - 65.0, 40.0, 5.0),
                progress,
                color,
                palette::LIGHT_GRAY,
            );
        }
    }
}

impl Draw for Teacher {
    fn draw(&self, canvas: &mut dyn Canvas, _fonts: &Fonts) {
        let p = self.pos;
        canvas.circle(p + Vec2::new(0.0, -25.0), 15.0, palette::LIGHT_BROWN, 0.0);
        canvas.rect(Rect::new(p.x - 20.0, p.y, 40.0, 50.0), palette::BROWN, 0.0, 0.0);
        canvas.line(p + Vec2::new(-20.0, 10.0), p + Vec2::new(-40.0, 15.0), 5.0, palette::LIGHT_BROWN);
        canvas.line(p + Vec2::new(20.0, 10.0), p + Vec2::new(40.0, 15.0), 5.0, palette::LIGHT_BROWN);
        canvas.line(p + Vec2::new(-10.0, 50.0), p + Vec2::new(-10.0, 80.0), 4.0, palette::DARK_GRAY);
        canvas.line(p + Vec2::new(10.0, 50.0), p + Vec2::new(10.0, 80.0), 4.0, palette::DARK_GRAY);

        // Red eyes and an attention ring while watching
        let eyes = if self.alert { palette::RED } else { palette::BLACK };
        canvas.circle(p + Vec2::new(-7.0, -28.0), 4.0, eyes, 0.0);
        canvas.circle(p + Vec2::new(7.0, -28.0), 4.0, eyes, 0.0);
        if self.alert {
            canvas.circle(p + Vec2::new(0.0, -50.0), 12.0, palette::RED, 3.0);
        }
    }
}

impl Draw for Button {
    fn draw(&self, canvas: &mut dyn Canvas, fonts: &Fonts) {
        let shadow = Rect {
            min: self.rect.min + Vec2::new(0.0, 4.0),
            size: self.rect.size,
        };
        canvas.rect(shadow, palette::BLACK.with_alpha(50), 0.0, 15.0);
        canvas.rect(self.rect, palette::PURPLE, 0.0, 15.0);
        canvas.rect(self.rect, palette::DARK_PURPLE, 3.0, 15.0);

        let lines: Vec<&str> = self.text.split('\n').collect();
        let center = self.rect.center();
        let top = center.y - (lines.len() as f32 - 1.0) * fonts.line_spacing / 2.0;
        for (i, line) in lines.iter().enumerate() {
            let pos = Vec2::new(center.x, top + i as f32 * fonts.line_spacing);
            canvas.text(pos, line, FontSize::Small, palette::WHITE);
        }
    }
}

impl Draw for Placed<'_, Message> {
    fn draw(&self, canvas: &mut dyn Canvas, fonts: &Fonts) {
        // Rough text extent; front ends with real metrics can do better
        let px = fonts.px(FontSize::Small);
        let width = self.item.text.chars().count() as f32 * px * 0.5 + 20.0;
        let height = px + 10.0;
        let bg = Rect::new(self.at.x - width / 2.0, self.at.y - height / 2.0, width, height);
        canvas.rect(bg, palette::YELLOW, 0.0, 10.0);
        canvas.rect(bg, palette::ORANGE, 2.0, 10.0);
        canvas.text(self.at, &self.item.text, FontSize::Small, palette::BLACK);
    }
}

fn draw_messages(canvas: &mut dyn Canvas, fonts: &Fonts, layout: Layout, messages: &[Message]) {
    let size = layout.screen_size();
    let mut y = match layout {
        Layout::Desktop => 350.0,
        Layout::Mobile => size.y / 2.0 - 50.0,
    };
    for msg in messages.iter().take(layout.max_messages()) {
        Placed {
            item: msg,
            at: Vec2::new(size.x / 2.0, y),
        }
        .draw(canvas, fonts);
        y += 50.0;
    }
}

fn draw_buttons(canvas: &mut dyn Canvas, fonts: &Fonts, buttons: &[Button]) {
    for button in buttons {
        button.draw(canvas, fonts);
    }
}

fn draw_title_screen(canvas: &mut dyn Canvas, layout: Layout, title: &str, subtitle: &str) {
    let size = layout.screen_size();
    let mobile = layout.is_mobile();
    shapes::gradient(
        canvas,
        Rect::new(0.0, 0.0, size.x, size.y),
        palette::PURPLE,
        palette::DARK_PURPLE,
        2.0,
    );
    let cx = size.x / 2.0;
    canvas.text(Vec2::new(cx, if mobile { 50.0 } else { 80.0 }), title, FontSize::Large, palette::GOLD);
    canvas.text(Vec2::new(cx, if mobile { 100.0 } else { 130.0 }), "SIMULATOR", FontSize::Medium, palette::WHITE);
    canvas.text(Vec2::new(cx, if mobile { 130.0 } else { 180.0 }), subtitle, FontSize::Small, palette::YELLOW);
    let line_y = if mobile { 140.0 } else { 190.0 };
    canvas.line(Vec2::new(cx - 100.0, line_y), Vec2::new(cx + 100.0, line_y), 2.0, palette::GOLD);
}

fn draw_hud(canvas: &mut dyn Canvas, layout: Layout, round: &Round) {
    let size = layout.screen_size();
    let secs = round.seconds_remaining();
    let watching = round.teacher.alert;
    let status_color = if watching { palette::RED } else { palette::GREEN };
    match layout {
        Layout::Mobile => {
            canvas.rect(Rect::new(0.0, 0.0, size.x, 80.0), palette::DARK_PURPLE, 0.0, 0.0);
            canvas.line(Vec2::new(0.0, 80.0), Vec2::new(size.x, 80.0), 2.0, palette::GOLD);
            canvas.text(Vec2::new(70.0, 25.0), &format!("Score: {}", round.score), FontSize::Medium, palette::GOLD);
            let time_color = if round.low_time() { palette::RED } else { palette::YELLOW };
            canvas.text(Vec2::new(size.x - 70.0, 25.0), &format!("Time: {secs}s"), FontSize::Medium, time_color);
            let status = if watching { "TEACHER IS WATCHING!" } else { "SAFE" };
            canvas.text(Vec2::new(size.x / 2.0, 60.0), status, FontSize::Small, status_color);
        }
        Layout::Desktop => {
            canvas.text(Vec2::new(100.0, 40.0), &format!("Score: {}", round.score), FontSize::Medium, palette::PURPLE);
            let time_color = if round.low_time() { palette::RED } else { palette::GREEN };
            canvas.text(Vec2::new(size.x - 120.0, 40.0), &format!("Time: {secs}s"), FontSize::Medium, time_color);
            let status = if watching {
                "⚠️ THE TEACHER IS LOOKING AT YOU!"
            } else {
                "✅ The teacher is distracted"
            };
            canvas.text(Vec2::new(size.x / 2.0, 580.0), status, FontSize::Medium, status_color);
            canvas.text(
                Vec2::new(size.x / 2.0, 40.0),
                "Use the buttons, but only while the teacher isn't looking!",
                FontSize::Small,
                palette::RED,
            );
        }
    }
}

fn draw_playing(canvas: &mut dyn Canvas, fonts: &Fonts, layout: Layout, round: &Round, buttons: &[Button]) {
    let size = layout.screen_size();
    canvas.fill(palette::CREAM);
    shapes::gradient(
        canvas,
        Rect::new(0.0, 0.0, size.x, size.y / 2.0),
        palette::LIGHT_BLUE,
        palette::CREAM,
        2.0,
    );

    let (teacher_desk, student_desk) = match layout {
        Layout::Desktop => (
            Rect::new(850.0, 100.0, 300.0, 100.0),
            Rect::new(50.0, 400.0, 250.0, 150.0),
        ),
        Layout::Mobile => (
            Rect::new(size.x - 120.0, 10.0, 110.0, 80.0),
            Rect::new(10.0, size.y / 2.0 - 50.0, 150.0, 100.0),
        ),
    };
    canvas.rect(teacher_desk, palette::LIGHT_BROWN, 0.0, 0.0);
    canvas.rect(teacher_desk, palette::BLACK, 2.0, 0.0);
    canvas.rect(student_desk, palette::DESK, 0.0, 0.0);
    canvas.rect(student_desk, palette::BLACK, 2.0, 0.0);

    round.student.draw(canvas, fonts);
    round.teacher.draw(canvas, fonts);
    draw_hud(canvas, layout, round);
    draw_messages(canvas, fonts, layout, round.messages.visible(layout.max_messages()));
    draw_buttons(canvas, fonts, buttons);
}

fn draw_round_end(canvas: &mut dyn Canvas, layout: Layout, won: bool, score: u64, best: u64, record: bool) {
    let size = layout.screen_size();
    let cx = size.x / 2.0;
    let mobile = layout.is_mobile();
    let (title, message, ink) = if won {
        shapes::gradient(
            canvas,
            Rect::new(0.0, 0.0, size.x, size.y),
            palette::GREEN,
            palette::DARK_GREEN,
            2.0,
        );
        ("🎓 YOU SURVIVED THE EXAM! 🎓", "Nobody noticed a thing!", palette::BLACK)
    } else {
        canvas.fill(palette::RED.with_alpha(200));
        ("💀 CAUGHT! 💀", "The teacher saw what you were doing!", palette::WHITE)
    };

    let y = |desktop: f32, mobile_y: f32| if mobile { mobile_y } else { desktop };
    canvas.text(Vec2::new(cx, y(150.0, 100.0)), title, FontSize::Large, palette::YELLOW);
    canvas.text(Vec2::new(cx, y(280.0, 180.0)), message, FontSize::Medium, ink);
    canvas.text(Vec2::new(cx, y(380.0, 280.0)), &format!("Final score: {score}"), FontSize::Large, ink);
    let best_line = if record {
        format!("New best score: {best}!")
    } else {
        format!("Best score: {best}")
    };
    canvas.text(Vec2::new(cx, y(440.0, 330.0)), &best_line, FontSize::Small, ink);
    canvas.text(
        Vec2::new(cx, y(500.0, 380.0)),
        "Press ENTER to return to the menu",
        FontSize::Small,
        ink,
    );
}

/// Draw the whole current screen
pub fn draw_frame<S: ScoreStore, R: RandomSource>(game: &Game<S, R>, canvas: &mut dyn Canvas) {
    let layout = game.layout();
    let fonts = Fonts::for_layout(layout);
    match game.screen() {
        Screen::MainMenu => {
            draw_title_screen(canvas, layout, "CHEATING", "Cheat while the teacher isn't looking!");
            draw_buttons(canvas, &fonts, game.buttons());
            if game.best_score() > 0 {
                let size = layout.screen_size();
                canvas.text(
                    Vec2::new(size.x / 2.0, size.y - 40.0),
                    &format!("Best score: {}", game.best_score()),
                    FontSize::Small,
                    palette::GOLD,
                );
            }
            draw_messages(canvas, &fonts, layout, game.notices().visible(layout.max_messages()));
        }
        Screen::DifficultySelect => {
            draw_title_screen(canvas, layout, "CHOOSE DIFFICULTY", "Longer exams, sharper teachers");
            draw_buttons(canvas, &fonts, game.buttons());
        }
        Screen::Playing => {
            if let Some(round) = game.round() {
                draw_playing(canvas, &fonts, layout, round, game.buttons());
            }
        }
        Screen::GameOver | Screen::Win => {
            let score = game.round().map_or(0, |r| r.score);
            draw_round_end(
                canvas,
                layout,
                game.screen() == Screen::Win,
                score,
                game.best_score(),
                game.new_record(),
            );
        }
    }
}
