//! Menu layout engine.
//!
//! Arranges a sequence of action items into a horizontal strip, a vertical
//! column, or a two-row "square" block, then positions the composed group
//! inside the menu bounds according to the content alignment. Pure geometry:
//! the engine returns rectangles and never touches the items.

use horizon_reveal_core::logging::targets;
use horizon_reveal_core::{Point, Rect, Size};

use crate::item::ActionItem;

/// How action items are composed inside the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuLayout {
    /// Single row along the horizontal axis.
    #[default]
    Horizontal,
    /// Single column along the vertical axis.
    Vertical,
    /// Two stacked rows, items split by index parity.
    ///
    /// Requires at least two items; with one or zero it behaves like
    /// [`MenuLayout::Horizontal`].
    Square,
}

/// Where the composed item group sits inside the menu bounds when it does
/// not fill them.
///
/// `Left`/`Right` pin the group horizontally and leave it vertically
/// centered; `Top`/`Bottom` pin vertically and leave it horizontally
/// centered. At most one pin per axis is ever active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentAlignment {
    /// Centered on both axes.
    #[default]
    Center,
    /// Pinned to the left edge.
    Left,
    /// Pinned to the right edge.
    Right,
    /// Pinned to the top edge.
    Top,
    /// Pinned to the bottom edge.
    Bottom,
}

/// Insets between the menu bounds and the item group.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentMargins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl ContentMargins {
    /// Create margins from the four side values.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// The result of arranging items: one rectangle per item, in input order,
/// plus the frame of the composed group. All rectangles are in menu-local
/// coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrangedMenu {
    /// Item frames, parallel to the input item sequence.
    pub item_rects: Vec<Rect>,
    /// Bounding frame of the whole group, already aligned within the bounds.
    pub group: Rect,
}

impl ArrangedMenu {
    /// Number of arranged items.
    #[inline]
    pub fn len(&self) -> usize {
        self.item_rects.len()
    }

    /// Whether the arrangement holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.item_rects.is_empty()
    }
}

/// Arrange `items` within `bounds` using the given layout and alignment.
///
/// An empty item sequence yields a zero-size group and no rectangles.
pub fn arrange(
    items: &[ActionItem],
    layout: MenuLayout,
    alignment: ContentAlignment,
    spacing_h: f32,
    spacing_v: f32,
    insets: ContentMargins,
    bounds: Size,
) -> ArrangedMenu {
    let sizes: Vec<Size> = items.iter().map(|item| item.natural_size()).collect();

    // Compose the group at origin, then shift it into its aligned position.
    let (group_size, local_rects) = match layout {
        MenuLayout::Horizontal => compose_row(&sizes, spacing_h),
        MenuLayout::Vertical => compose_column(&sizes, spacing_v),
        MenuLayout::Square if sizes.len() > 1 => compose_square(&sizes, spacing_h, spacing_v),
        MenuLayout::Square => compose_row(&sizes, spacing_h),
    };

    let origin = align_group(group_size, alignment, insets, bounds);
    let item_rects = local_rects
        .into_iter()
        .map(|r| r.offset(origin.x, origin.y))
        .collect();

    tracing::trace!(
        target: targets::LAYOUT,
        items = sizes.len(),
        ?layout,
        ?alignment,
        group_width = group_size.width,
        group_height = group_size.height,
        "arranged menu"
    );

    ArrangedMenu {
        item_rects,
        group: Rect {
            origin,
            size: group_size,
        },
    }
}

/// Lay sizes out left to right, each vertically centered in the row.
fn compose_row(sizes: &[Size], spacing: f32) -> (Size, Vec<Rect>) {
    let height = sizes.iter().map(|s| s.height).fold(0.0, f32::max);
    let mut x = 0.0;
    let mut rects = Vec::with_capacity(sizes.len());
    for (i, size) in sizes.iter().enumerate() {
        if i > 0 {
            x += spacing;
        }
        rects.push(Rect::new(
            x,
            (height - size.height) / 2.0,
            size.width,
            size.height,
        ));
        x += size.width;
    }
    (Size::new(x, height), rects)
}

/// Lay sizes out top to bottom, each horizontally centered in the column.
fn compose_column(sizes: &[Size], spacing: f32) -> (Size, Vec<Rect>) {
    let width = sizes.iter().map(|s| s.width).fold(0.0, f32::max);
    let mut y = 0.0;
    let mut rects = Vec::with_capacity(sizes.len());
    for (i, size) in sizes.iter().enumerate() {
        if i > 0 {
            y += spacing;
        }
        rects.push(Rect::new(
            (width - size.width) / 2.0,
            y,
            size.width,
            size.height,
        ));
        y += size.height;
    }
    (Size::new(width, y), rects)
}

/// Split by index parity into two horizontal rows of equal height, stacked
/// vertically. Even indices land in the top row, odd in the bottom.
fn compose_square(sizes: &[Size], spacing_h: f32, spacing_v: f32) -> (Size, Vec<Rect>) {
    let top: Vec<Size> = sizes.iter().copied().step_by(2).collect();
    let bottom: Vec<Size> = sizes.iter().copied().skip(1).step_by(2).collect();

    let (top_size, top_rects) = compose_row(&top, spacing_h);
    let (bottom_size, bottom_rects) = compose_row(&bottom, spacing_h);

    // Both rows get the same slot height so the block splits evenly.
    let row_height = top_size.height.max(bottom_size.height);
    let width = top_size.width.max(bottom_size.width);
    let height = row_height * 2.0 + spacing_v;

    let place_row = |rects: Vec<Rect>, row_size: Size, row_y: f32| -> Vec<Rect> {
        let dx = (width - row_size.width) / 2.0;
        let dy = row_y + (row_height - row_size.height) / 2.0;
        rects.into_iter().map(|r| r.offset(dx, dy)).collect()
    };

    let top_rects = place_row(top_rects, top_size, 0.0);
    let bottom_rects = place_row(bottom_rects, bottom_size, row_height + spacing_v);

    // Interleave back into input order.
    let mut rects = Vec::with_capacity(sizes.len());
    let mut top_iter = top_rects.into_iter();
    let mut bottom_iter = bottom_rects.into_iter();
    for i in 0..sizes.len() {
        let rect = if i % 2 == 0 {
            top_iter.next()
        } else {
            bottom_iter.next()
        };
        debug_assert!(rect.is_some());
        if let Some(rect) = rect {
            rects.push(rect);
        }
    }

    (Size::new(width, height), rects)
}

/// Position the group inside the inset bounds per the alignment.
fn align_group(
    group: Size,
    alignment: ContentAlignment,
    insets: ContentMargins,
    bounds: Size,
) -> Point {
    let avail_w = bounds.width - insets.left - insets.right;
    let avail_h = bounds.height - insets.top - insets.bottom;

    let x = match alignment {
        ContentAlignment::Left => insets.left,
        ContentAlignment::Right => insets.left + avail_w - group.width,
        _ => insets.left + (avail_w - group.width) / 2.0,
    };
    let y = match alignment {
        ContentAlignment::Top => insets.top,
        ContentAlignment::Bottom => insets.top + avail_h - group.height,
        _ => insets.top + (avail_h - group.height) / 2.0,
    };
    Point::new(x, y)
}
