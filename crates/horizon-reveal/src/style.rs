//! Style configuration for the reveal menu.

use std::time::Duration;

use horizon_reveal_core::{Color, Size};

use crate::animation::Easing;
use crate::layout::{ContentAlignment, ContentMargins};

/// Visual configuration for a reveal menu.
///
/// Every field is independently settable; the defaults match the stock
/// appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuStyle {
    /// Menu background color.
    pub background: Color,
    /// How the item group is positioned inside the menu bounds.
    pub alignment: ContentAlignment,
    /// Insets between the menu bounds and the item group.
    pub insets: ContentMargins,
    /// Spacing between items along the horizontal axis.
    pub spacing_h: f32,
    /// Spacing between items along the vertical axis.
    pub spacing_v: f32,
    /// Toggle icon asset for horizontally sliding menus.
    pub icon_horizontal: String,
    /// Toggle icon asset for vertically sliding menus.
    pub icon_vertical: String,
    /// Fixed size of the toggle icon box.
    pub icon_box: Size,
    /// Inset between the toggle icon box and its anchor edge.
    pub icon_inset: f32,
    /// Duration of open/close animations.
    pub animation_duration: Duration,
    /// Easing curve for open/close animations.
    pub easing: Easing,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            background: Color::BROWN,
            alignment: ContentAlignment::Center,
            insets: ContentMargins::new(0.0, 5.0, 0.0, 5.0),
            spacing_h: 5.0,
            spacing_v: 5.0,
            icon_horizontal: "more_H".to_string(),
            icon_vertical: "more".to_string(),
            icon_box: Size::new(20.0, 30.0),
            icon_inset: 10.0,
            animation_duration: Duration::from_secs(1),
            easing: Easing::EaseInOut,
        }
    }
}
