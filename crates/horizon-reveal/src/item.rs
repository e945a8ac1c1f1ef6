//! Action items: the individual tappable entries of a reveal menu.

use std::fmt;
use std::rc::Rc;

use horizon_reveal_core::{Color, Size};

/// Style overrides for a single action item.
///
/// Every field has a usable default, so hosts typically set only the handful
/// they care about.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStyle {
    /// Border color drawn around the item.
    pub border_color: Color,
    /// Border width in points. Zero draws no border.
    pub border_width: f32,
    /// Size reserved for the item's icon.
    pub icon_size: Size,
    /// Title text color.
    pub title_color: Color,
    /// Title font size in points.
    pub title_font_size: f32,
    /// Item background color.
    pub background: Color,
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self {
            border_color: Color::BLACK,
            border_width: 0.0,
            icon_size: Size::new(50.0, 70.0),
            title_color: Color::BLACK,
            title_font_size: 12.0,
            background: Color::TRANSPARENT,
        }
    }
}

/// Callback invoked when an action item is activated.
pub type ActivationHandler = Rc<dyn Fn(&ActionItem)>;

/// A single tappable action in a reveal menu (icon, label, callback).
///
/// Items are owned by the controller that displays them and are torn down
/// when their row is reset or reused. The title and icon are fixed at
/// construction; style properties may be adjusted afterwards.
///
/// # Example
///
/// ```ignore
/// use horizon_reveal::item::ActionItem;
///
/// let delete = ActionItem::new("Delete", "trash")
///     .on_activate(|item| println!("activated {}", item.title()));
/// ```
pub struct ActionItem {
    title: String,
    icon: String,
    handler: Option<ActivationHandler>,
    style: ItemStyle,
}

impl ActionItem {
    /// Create an item with a title and icon asset name.
    pub fn new(title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            handler: None,
            style: ItemStyle::default(),
        }
    }

    /// Set the activation callback. Builder style.
    pub fn on_activate<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ActionItem) + 'static,
    {
        self.handler = Some(Rc::new(handler));
        self
    }

    /// Set style overrides. Builder style.
    pub fn with_style(mut self, style: ItemStyle) -> Self {
        self.style = style;
        self
    }

    /// The item's title text.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The item's icon asset name.
    #[inline]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// The item's style properties.
    #[inline]
    pub fn style(&self) -> &ItemStyle {
        &self.style
    }

    /// Mutable access to the item's style properties.
    #[inline]
    pub fn style_mut(&mut self) -> &mut ItemStyle {
        &mut self.style
    }

    /// The size the item wants when laid out.
    ///
    /// The icon box sets the width; a non-empty title adds one line of text
    /// below the icon.
    pub fn natural_size(&self) -> Size {
        let mut height = self.style.icon_size.height;
        if !self.title.is_empty() {
            height += self.style.title_font_size;
        }
        Size::new(self.style.icon_size.width, height)
    }

    /// Invoke the activation callback, if one is set.
    pub fn activate(&self) {
        if let Some(handler) = &self.handler {
            let handler = handler.clone();
            handler(self);
        }
    }
}

impl fmt::Debug for ActionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionItem")
            .field("title", &self.title)
            .field("icon", &self.icon)
            .field("has_handler", &self.handler.is_some())
            .field("style", &self.style)
            .finish()
    }
}
