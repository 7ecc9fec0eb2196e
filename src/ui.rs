//! Buttons and screen layouts
//!
//! Pure geometry: which rectangles exist on each screen and what they do
//! when clicked.

use glam::Vec2;

use crate::settings::Layout;
use crate::sim::{Activity, Difficulty, UsedActivities};

/// Axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Half-open containment, like a pixel grid
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.y >= self.min.y && p.x < max.x && p.y < max.y
    }
}

/// What a button does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Start,
    Rules,
    Exit,
    Choose(Difficulty),
    Back,
    Activity(Activity),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    /// Label; lines separated by '\n'
    pub text: String,
    pub action: ButtonAction,
}

impl Button {
    pub fn new(rect: Rect, text: impl Into<String>, action: ButtonAction) -> Self {
        Self {
            rect,
            text: text.into(),
            action,
        }
    }

    pub fn is_clicked(&self, pos: Vec2) -> bool {
        self.rect.contains(pos)
    }
}

/// First button under the pointer
pub fn hit(buttons: &[Button], pos: Vec2) -> Option<ButtonAction> {
    buttons.iter().find(|b| b.is_clicked(pos)).map(|b| b.action)
}

/// Vertical stack of centered buttons
fn column(layout: Layout, entries: Vec<(String, ButtonAction)>) -> Vec<Button> {
    let (w, h, start_y, spacing) = match layout {
        Layout::Desktop => (400.0, 80.0, 300.0, 120.0),
        Layout::Mobile => (220.0, 60.0, 150.0, 90.0),
    };
    let x = layout.screen_size().x / 2.0 - w / 2.0;
    entries
        .into_iter()
        .enumerate()
        .map(|(i, (text, action))| {
            Button::new(Rect::new(x, start_y + spacing * i as f32, w, h), text, action)
        })
        .collect()
}

pub fn menu_buttons(layout: Layout) -> Vec<Button> {
    column(
        layout,
        vec![
            ("START GAME".to_string(), ButtonAction::Start),
            ("RULES".to_string(), ButtonAction::Rules),
            ("EXIT".to_string(), ButtonAction::Exit),
        ],
    )
}

pub fn difficulty_buttons(layout: Layout) -> Vec<Button> {
    let mut entries: Vec<_> = Difficulty::ALL
        .iter()
        .map(|&d| {
            let p = d.profile();
            (
                format!("{}\n{} sec, {}% risk", p.label, p.round_secs, p.alert_chance),
                ButtonAction::Choose(d),
            )
        })
        .collect();
    entries.push(("BACK".to_string(), ButtonAction::Back));
    column(layout, entries)
}

/// Button order on the game screen: four risky activities, then "study"
pub const ACTIVITY_ORDER: [Activity; 5] = [
    Activity::Cheating,
    Activity::PlayingGames,
    Activity::Sleeping,
    Activity::Eating,
    Activity::Studying,
];

fn activity_label(activity: Activity, used: &UsedActivities) -> String {
    if !activity.is_risky() {
        format!("{}\n{}\nNO RISK", activity.icon(), activity.label())
    } else if used.is_used(activity) {
        format!("✅\n{}\nused", activity.label())
    } else {
        format!(
            "{}\n{}\n{}",
            activity.icon(),
            activity.label(),
            activity.duration_label()
        )
    }
}

pub fn activity_buttons(layout: Layout, used: &UsedActivities) -> Vec<Button> {
    let (w, h, start_x, y, spacing) = match layout {
        Layout::Desktop => (150.0, 100.0, 50.0, 650.0, 160.0),
        Layout::Mobile => (92.0, 80.0, 20.0, layout.screen_size().y - 120.0, 102.0),
    };
    ACTIVITY_ORDER
        .iter()
        .enumerate()
        .map(|(i, &activity)| {
            Button::new(
                Rect::new(start_x + spacing * i as f32, y, w, h),
                activity_label(activity, used),
                ButtonAction::Activity(activity),
            )
        })
        .collect()
}

/// Re-label activity buttons after flags change
pub fn refresh_activity_labels(buttons: &mut [Button], used: &UsedActivities) {
    for button in buttons {
        if let ButtonAction::Activity(activity) = button.action {
            button.text = activity_label(activity, used);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_half_open() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(29.9, 29.9)));
        assert!(!r.contains(Vec2::new(30.0, 15.0)));
        assert!(!r.contains(Vec2::new(-5.0, 15.0)));
        assert_eq!(r.center(), Vec2::new(20.0, 20.0));
    }

    #[test]
    fn test_menu_hit() {
        let buttons = menu_buttons(Layout::Desktop);
        assert_eq!(hit(&buttons, Vec2::new(700.0, 340.0)), Some(ButtonAction::Start));
        assert_eq!(hit(&buttons, Vec2::new(700.0, 460.0)), Some(ButtonAction::Rules));
        assert_eq!(hit(&buttons, Vec2::new(700.0, 580.0)), Some(ButtonAction::Exit));
        assert_eq!(hit(&buttons, Vec2::new(5.0, 5.0)), None);
        assert_eq!(hit(&buttons, Vec2::new(f32::NAN, 300.0)), None);
    }

    #[test]
    fn test_activity_buttons_fit_mobile_screen() {
        let size = Layout::Mobile.screen_size();
        for b in activity_buttons(Layout::Mobile, &UsedActivities::default()) {
            assert!(b.rect.max().x <= size.x && b.rect.max().y <= size.y, "{:?}", b.rect);
        }
    }

    #[test]
    fn test_labels_track_used_flags() {
        let mut used = UsedActivities::default();
        let mut buttons = activity_buttons(Layout::Desktop, &used);
        assert!(buttons[0].text.ends_with("3 sec"));
        used.mark(Activity::Cheating);
        refresh_activity_labels(&mut buttons, &used);
        assert!(buttons[0].text.ends_with("used"));
        assert!(buttons[1].text.ends_with("2 sec"));
        assert!(buttons[4].text.ends_with("NO RISK"));
    }

    #[test]
    fn test_difficulty_screen_has_back() {
        let buttons = difficulty_buttons(Layout::Mobile);
        assert_eq!(buttons.len(), 4);
        assert_eq!(buttons[3].action, ButtonAction::Back);
        assert!(buttons[2].text.starts_with("HARD"));
    }
}
