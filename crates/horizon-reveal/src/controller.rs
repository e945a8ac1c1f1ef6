//! The reveal controller: open/closed state machine, gesture handling,
//! offset animation, and edge-placement geometry for one menu.
//!
//! One controller exists per visible row. It owns the row's action items,
//! asks the host delegate for layout policy, and turns gesture input into a
//! continuous offset along the menu's slide axis. The offset is 0 when the
//! menu rests just off its edge and `-extent` (the cell width or height)
//! when the menu fully covers the cell.

use std::rc::Weak;
use std::time::Duration;

use horizon_reveal_core::logging::targets;
use horizon_reveal_core::{Rect, Signal};

use crate::animation::OffsetAnimation;
use crate::delegate::{DefaultRevealDelegate, RevealDelegate};
use crate::error::{Error, Result};
use crate::gesture::{GestureKind, MenuAction, PanTracker, SwipeDirection, swipe_action};
use crate::item::ActionItem;
use crate::layout::{ArrangedMenu, MenuLayout, arrange};
use crate::style::MenuStyle;

/// Which side of the host cell the menu slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// Whether the menu on this edge slides along the horizontal axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Edge::Left | Edge::Right)
    }
}

/// Lifecycle of a menu between fully closed and fully open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// Menu at rest off its edge.
    #[default]
    Closed,
    /// Moving toward fully open.
    Opening,
    /// Menu fully covering the cell.
    Open,
    /// Moving toward fully closed.
    Closing,
}

/// Owns one row's reveal interaction: state, items, offset, animation.
///
/// # Example
///
/// ```ignore
/// use horizon_reveal::controller::{Edge, RevealController};
/// use horizon_reveal::item::ActionItem;
/// use horizon_reveal_core::Rect;
///
/// let cell = Rect::new(0.0, 0.0, 320.0, 88.0);
/// let items = vec![ActionItem::new("Delete", "trash")];
/// let mut controller = RevealController::new(3, cell, items);
/// controller.set_edge(Edge::Right);
/// controller.open(false);
/// assert!(controller.is_open());
/// ```
pub struct RevealController {
    row: usize,
    cell_frame: Rect,
    edge: Edge,
    layout: MenuLayout,
    gesture_kind: GestureKind,
    items: Vec<ActionItem>,
    style: MenuStyle,
    delegate: Weak<dyn RevealDelegate>,
    icon_visible: bool,
    icon_edge: Edge,

    state: MenuState,
    offset: f32,
    animation: Option<OffsetAnimation>,

    opened: Signal<usize>,
    closed: Signal<usize>,
    item_activated: Signal<usize>,
}

impl RevealController {
    /// Create a controller for one row.
    ///
    /// `cell_frame` is the host cell's frame in container coordinates; the
    /// menu adopts its size. Policy starts at the delegate defaults until
    /// [`apply_delegate_policy`](Self::apply_delegate_policy) runs.
    pub fn new(row: usize, cell_frame: Rect, items: Vec<ActionItem>) -> Self {
        let defaults = DefaultRevealDelegate;
        Self {
            row,
            cell_frame,
            edge: defaults.edge_for(row),
            layout: defaults.layout_for(row),
            gesture_kind: GestureKind::default(),
            items,
            style: MenuStyle::default(),
            delegate: Weak::<DefaultRevealDelegate>::new(),
            icon_visible: defaults.show_toggle_icon_for(row),
            icon_edge: defaults.toggle_icon_edge_for(row),
            state: MenuState::Closed,
            offset: 0.0,
            animation: None,
            opened: Signal::new(),
            closed: Signal::new(),
            item_activated: Signal::new(),
        }
    }

    // ====== Configuration ======

    /// Install the host delegate and adopt its per-row policy.
    pub fn set_delegate(&mut self, delegate: Weak<dyn RevealDelegate>) {
        self.delegate = delegate;
        self.apply_delegate_policy();
    }

    /// Re-query the delegate for this row's edge, layout, and icon policy.
    ///
    /// A dead or absent delegate leaves the documented defaults in place.
    pub fn apply_delegate_policy(&mut self) {
        let Some(delegate) = self.delegate.upgrade() else {
            return;
        };
        self.edge = delegate.edge_for(self.row);
        self.layout = delegate.layout_for(self.row);
        self.icon_visible = delegate.show_toggle_icon_for(self.row);
        self.icon_edge = delegate.toggle_icon_edge_for(self.row);
        tracing::debug!(
            target: targets::CONTROLLER,
            row = self.row,
            edge = ?self.edge,
            layout = ?self.layout,
            icon = self.icon_visible,
            "delegate policy applied"
        );
    }

    /// Select the gesture that drives this menu.
    ///
    /// Swipes and pans move along the horizontal axis only, so attaching
    /// either to a top or bottom edge is a configuration error; those menus
    /// are driven by the toggle icon.
    pub fn attach_gesture(&mut self, kind: GestureKind) -> Result<()> {
        if !self.edge.is_horizontal() {
            return Err(Error::GestureUnavailable { edge: self.edge });
        }
        self.gesture_kind = kind;
        Ok(())
    }

    /// Set the slide edge directly, bypassing the delegate.
    pub fn set_edge(&mut self, edge: Edge) {
        self.edge = edge;
    }

    /// Set the item layout directly, bypassing the delegate.
    pub fn set_layout(&mut self, layout: MenuLayout) {
        self.layout = layout;
    }

    /// Replace the menu style.
    pub fn set_style(&mut self, style: MenuStyle) {
        self.style = style;
    }

    // ====== Accessors ======

    /// The row identity this controller is bound to.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// The host cell's frame in container coordinates.
    #[inline]
    pub fn cell_frame(&self) -> Rect {
        self.cell_frame
    }

    /// The edge the menu slides in from.
    #[inline]
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// The item layout in effect.
    #[inline]
    pub fn layout(&self) -> MenuLayout {
        self.layout
    }

    /// The gesture kind attached to this menu.
    #[inline]
    pub fn gesture_kind(&self) -> GestureKind {
        self.gesture_kind
    }

    /// The menu style in effect.
    #[inline]
    pub fn style(&self) -> &MenuStyle {
        &self.style
    }

    /// The action items this menu displays.
    #[inline]
    pub fn items(&self) -> &[ActionItem] {
        &self.items
    }

    /// Current state machine position.
    #[inline]
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Whether the menu is fully open.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Current offset along the slide axis, in `[-extent, 0]`.
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// How far the menu travels between closed and open.
    ///
    /// The cell width for horizontal edges, the cell height for vertical.
    pub fn extent(&self) -> f32 {
        if self.edge.is_horizontal() {
            self.cell_frame.width()
        } else {
            self.cell_frame.height()
        }
    }

    /// The offset value at which the menu is fully open.
    #[inline]
    pub fn open_offset(&self) -> f32 {
        -self.extent()
    }

    // ====== Signals ======

    /// Emitted with the row identity when the menu reaches fully open.
    #[inline]
    pub fn opened(&self) -> &Signal<usize> {
        &self.opened
    }

    /// Emitted with the row identity when the menu reaches fully closed.
    #[inline]
    pub fn closed(&self) -> &Signal<usize> {
        &self.closed
    }

    /// Emitted with the item index when an action item is activated.
    #[inline]
    pub fn item_activated(&self) -> &Signal<usize> {
        &self.item_activated
    }

    // ====== Open / close ======

    /// Open the menu.
    ///
    /// Already-open menus are left untouched. When `animated`, the offset
    /// interpolates over the style's duration and the state becomes `Open`
    /// once [`advance`](Self::advance) reaches the target; an in-flight
    /// animation is redirected. When not animated, the menu opens
    /// synchronously.
    pub fn open(&mut self, animated: bool) {
        if self.state == MenuState::Open {
            return;
        }
        tracing::debug!(target: targets::CONTROLLER, row = self.row, animated, "open");
        self.drive_to(self.open_offset(), MenuState::Opening, animated);
    }

    /// Close the menu. Mirrors [`open`](Self::open).
    pub fn close(&mut self, animated: bool) {
        if self.state == MenuState::Closed {
            return;
        }
        tracing::debug!(target: targets::CONTROLLER, row = self.row, animated, "close");
        self.drive_to(0.0, MenuState::Closing, animated);
    }

    /// Open if closed (or closing), close if open. Toggle icon taps land
    /// here.
    pub fn toggle(&mut self, animated: bool) {
        if self.state == MenuState::Open {
            self.close(animated);
        } else {
            self.open(animated);
        }
    }

    /// Close synchronously, cancelling any animation.
    ///
    /// Used on row reuse so a stale open menu never bleeds into unrelated
    /// data.
    pub fn force_close(&mut self) {
        self.animation = None;
        self.offset = 0.0;
        let was_closed = self.state == MenuState::Closed;
        self.state = MenuState::Closed;
        if !was_closed {
            tracing::debug!(target: targets::CONTROLLER, row = self.row, "force closed");
            self.closed.emit(self.row);
        }
    }

    fn drive_to(&mut self, target: f32, in_flight: MenuState, animated: bool) {
        if !animated {
            self.animation = None;
            self.offset = target;
            self.settle(in_flight);
            return;
        }
        match &mut self.animation {
            Some(animation) => animation.retarget(self.offset, target),
            None => {
                self.animation = Some(OffsetAnimation::new(
                    self.offset,
                    target,
                    self.style.animation_duration,
                    self.style.easing,
                ));
            }
        }
        self.state = in_flight;
    }

    /// Step the in-flight animation by `dt` from the host's frame clock.
    ///
    /// No-op when nothing is animating.
    pub fn advance(&mut self, dt: Duration) {
        let Some(animation) = &mut self.animation else {
            return;
        };
        let status = animation.advance(dt);
        self.offset = status.offset();
        if status.is_finished() {
            self.animation = None;
            let in_flight = self.state;
            self.settle(in_flight);
        }
    }

    /// Commit a terminal state once the offset has arrived.
    fn settle(&mut self, in_flight: MenuState) {
        match in_flight {
            MenuState::Opening => {
                debug_assert_eq!(self.offset, self.open_offset());
                self.state = MenuState::Open;
                self.opened.emit(self.row);
            }
            MenuState::Closing => {
                debug_assert_eq!(self.offset, 0.0);
                self.state = MenuState::Closed;
                self.closed.emit(self.row);
            }
            MenuState::Open | MenuState::Closed => {}
        }
    }

    // ====== Gestures ======

    /// Apply a recognized swipe to the menu.
    ///
    /// The mapping from direction to open/close depends on the edge; see
    /// [`swipe_action`]. Errors if this edge does not support swipes.
    pub fn handle_swipe(&mut self, direction: SwipeDirection) -> Result<()> {
        match swipe_action(self.edge, direction)? {
            MenuAction::Open => self.open(true),
            MenuAction::Close => self.close(true),
        }
        Ok(())
    }

    /// Scrub the offset by the tracker's accumulated translation.
    ///
    /// The translation is consumed only when the resulting offset stays
    /// within `[-extent, 0]`; out-of-range increments are ignored so the
    /// menu never overshoots either rest position. Returns whether the
    /// increment was applied.
    pub fn handle_pan(&mut self, tracker: &mut PanTracker) -> bool {
        if !self.edge.is_horizontal() || !tracker.is_active() {
            return false;
        }
        // Toward-open drag direction depends on which side the menu lives.
        let delta = match self.edge {
            Edge::Right => tracker.translation().x,
            Edge::Left => -tracker.translation().x,
            Edge::Top | Edge::Bottom => unreachable!(),
        };
        let new_offset = self.offset + delta;
        if !(self.open_offset()..=0.0).contains(&new_offset) {
            return false;
        }
        tracker.consume();
        self.apply_panned_offset(new_offset, delta);
        true
    }

    /// Commit a pan increment and keep the state machine consistent.
    ///
    /// A cancelled pan leaves the offset wherever it last landed; callers
    /// wanting a closed row after cancellation invoke `close` explicitly.
    fn apply_panned_offset(&mut self, new_offset: f32, delta: f32) {
        self.animation = None;
        self.offset = new_offset;
        if self.offset == self.open_offset() {
            if self.state != MenuState::Open {
                self.state = MenuState::Open;
                self.opened.emit(self.row);
            }
        } else if self.offset == 0.0 {
            if self.state != MenuState::Closed {
                self.state = MenuState::Closed;
                self.closed.emit(self.row);
            }
        } else if delta < 0.0 {
            self.state = MenuState::Opening;
        } else if delta > 0.0 {
            self.state = MenuState::Closing;
        }
    }

    // ====== Geometry ======

    /// The menu's frame in container coordinates at the current offset.
    ///
    /// The menu matches the cell's size and sits just past the slide edge
    /// when closed; as the offset approaches `-extent` it slides across to
    /// coincide with the cell.
    pub fn menu_frame(&self) -> Rect {
        let cell = self.cell_frame;
        let (x, y) = match self.edge {
            Edge::Left => (cell.left() - cell.width() - self.offset, cell.top()),
            Edge::Right => (cell.right() + self.offset, cell.top()),
            Edge::Top => (cell.left(), cell.top() - cell.height() - self.offset),
            Edge::Bottom => (cell.left(), cell.bottom() + self.offset),
        };
        Rect::new(x, y, cell.width(), cell.height())
    }

    /// Arrange this menu's items within its bounds.
    pub fn arranged(&self) -> ArrangedMenu {
        arrange(
            &self.items,
            self.layout,
            self.style.alignment,
            self.style.spacing_h,
            self.style.spacing_v,
            self.style.insets,
            self.cell_frame.size,
        )
    }

    /// Frame of the toggle icon in container coordinates, if shown.
    ///
    /// The icon box anchors to one cell edge, inset by the style's icon
    /// inset, centered on the cross axis.
    pub fn icon_anchor(&self) -> Option<Rect> {
        if !self.icon_visible {
            return None;
        }
        let cell = self.cell_frame;
        let boxed = self.style.icon_box;
        let inset = self.style.icon_inset;
        let center = cell.center();
        let (x, y) = match self.icon_edge {
            Edge::Left => (cell.left() + inset, center.y - boxed.height / 2.0),
            Edge::Right => (
                cell.right() - inset - boxed.width,
                center.y - boxed.height / 2.0,
            ),
            Edge::Top => (center.x - boxed.width / 2.0, cell.top() + inset),
            Edge::Bottom => (
                center.x - boxed.width / 2.0,
                cell.bottom() - inset - boxed.height,
            ),
        };
        Some(Rect::new(x, y, boxed.width, boxed.height))
    }

    /// Toggle icon asset for the current slide axis.
    ///
    /// Vertically sliding menus use the horizontal glyph and vice versa.
    pub fn icon_asset(&self) -> &str {
        if self.edge.is_horizontal() {
            &self.style.icon_vertical
        } else {
            &self.style.icon_horizontal
        }
    }

    // ====== Items ======

    /// Activate the item at `index`, invoking its callback and emitting
    /// [`item_activated`](Self::item_activated).
    ///
    /// Out-of-range indices are ignored.
    pub fn activate_item(&self, index: usize) {
        let Some(item) = self.items.get(index) else {
            return;
        };
        tracing::debug!(target: targets::CONTROLLER, row = self.row, index, "item activated");
        item.activate();
        self.item_activated.emit(index);
    }
}

impl std::fmt::Debug for RevealController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealController")
            .field("row", &self.row)
            .field("edge", &self.edge)
            .field("layout", &self.layout)
            .field("state", &self.state)
            .field("offset", &self.offset)
            .field("items", &self.items.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_reveal_core::Point;
    use std::cell::Cell;
    use std::rc::Rc;

    const CELL: Rect = Rect::new(0.0, 100.0, 320.0, 88.0);

    fn controller(edge: Edge) -> RevealController {
        let items = vec![
            ActionItem::new("Delete", "trash"),
            ActionItem::new("Save", "disk"),
            ActionItem::new("Edit", "pencil"),
        ];
        let mut controller = RevealController::new(0, CELL, items);
        controller.set_edge(edge);
        controller
    }

    #[test]
    fn test_open_right_edge() {
        let mut c = controller(Edge::Right);
        c.open(false);
        assert!(c.is_open());
        assert_eq!(c.offset(), -320.0);
    }

    #[test]
    fn test_open_close_round_trip_every_edge() {
        for edge in [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom] {
            let mut c = controller(edge);
            c.open(false);
            assert!(c.is_open(), "{edge:?}");
            assert_eq!(c.offset(), c.open_offset(), "{edge:?}");
            c.close(false);
            assert!(!c.is_open(), "{edge:?}");
            assert_eq!(c.offset(), 0.0, "{edge:?}");
        }
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut c = controller(Edge::Right);
        let opens = Rc::new(Cell::new(0));
        let count = opens.clone();
        c.opened().connect(move |_| count.set(count.get() + 1));

        c.open(false);
        let offset = c.offset();
        c.open(false);
        c.open(true);

        assert!(c.is_open());
        assert_eq!(c.offset(), offset);
        assert_eq!(opens.get(), 1);
        assert_eq!(c.state(), MenuState::Open);
    }

    #[test]
    fn test_animated_open_reaches_target() {
        let mut c = controller(Edge::Left);
        c.open(true);
        assert_eq!(c.state(), MenuState::Opening);

        c.advance(Duration::from_millis(300));
        assert_eq!(c.state(), MenuState::Opening);
        assert!(c.offset() < 0.0 && c.offset() > c.open_offset());

        c.advance(Duration::from_secs(1));
        assert!(c.is_open());
        assert_eq!(c.offset(), -320.0);
    }

    #[test]
    fn test_close_while_opening_redirects() {
        let mut c = controller(Edge::Right);
        c.open(true);
        c.advance(Duration::from_millis(500));
        let midway = c.offset();
        assert!(midway < 0.0);

        c.close(true);
        assert_eq!(c.state(), MenuState::Closing);
        c.advance(Duration::from_secs(2));
        assert_eq!(c.offset(), 0.0);
        assert_eq!(c.state(), MenuState::Closed);
    }

    #[test]
    fn test_pan_clamps_at_both_ends() {
        let mut c = controller(Edge::Right);
        let mut tracker = PanTracker::new();
        assert!(tracker.begin(Point::new(-100.0, 0.0)));

        // Within range: applied and consumed.
        tracker.update(Point::new(-200.0, 0.0), Point::new(-100.0, 0.0));
        assert!(c.handle_pan(&mut tracker));
        assert_eq!(c.offset(), -200.0);
        assert_eq!(tracker.translation(), Point::ZERO);

        // Past fully open: ignored, not consumed.
        tracker.update(Point::new(-200.0, 0.0), Point::new(-100.0, 0.0));
        assert!(!c.handle_pan(&mut tracker));
        assert_eq!(c.offset(), -200.0);

        // Back past fully closed: ignored as well.
        let mut tracker = PanTracker::new();
        assert!(tracker.begin(Point::new(100.0, 0.0)));
        tracker.update(Point::new(250.0, 0.0), Point::new(100.0, 0.0));
        assert!(!c.handle_pan(&mut tracker));
        assert_eq!(c.offset(), -200.0);
    }

    #[test]
    fn test_pan_to_terminal_emits() {
        let mut c = controller(Edge::Right);
        let opens = Rc::new(Cell::new(0));
        let count = opens.clone();
        c.opened().connect(move |_| count.set(count.get() + 1));

        let mut tracker = PanTracker::new();
        assert!(tracker.begin(Point::new(-100.0, 0.0)));
        tracker.update(Point::new(-320.0, 0.0), Point::new(-100.0, 0.0));
        assert!(c.handle_pan(&mut tracker));

        assert!(c.is_open());
        assert_eq!(opens.get(), 1);
    }

    #[test]
    fn test_pan_left_edge_direction_mirrored() {
        let mut c = controller(Edge::Left);
        let mut tracker = PanTracker::new();
        assert!(tracker.begin(Point::new(100.0, 0.0)));

        // Dragging right opens a left-edge menu.
        tracker.update(Point::new(150.0, 0.0), Point::new(100.0, 0.0));
        assert!(c.handle_pan(&mut tracker));
        assert_eq!(c.offset(), -150.0);
        assert_eq!(c.state(), MenuState::Opening);
    }

    #[test]
    fn test_pan_cancellation_leaves_offset() {
        let mut c = controller(Edge::Right);
        let mut tracker = PanTracker::new();
        assert!(tracker.begin(Point::new(-100.0, 0.0)));
        tracker.update(Point::new(-120.0, 0.0), Point::new(-100.0, 0.0));
        assert!(c.handle_pan(&mut tracker));

        tracker.end();
        assert_eq!(c.offset(), -120.0);
        assert_eq!(c.state(), MenuState::Opening);
    }

    #[test]
    fn test_swipe_drives_open_and_close() {
        let mut c = controller(Edge::Right);
        c.handle_swipe(SwipeDirection::Left).unwrap();
        c.advance(Duration::from_secs(2));
        assert!(c.is_open());

        c.handle_swipe(SwipeDirection::Right).unwrap();
        c.advance(Duration::from_secs(2));
        assert!(!c.is_open());
        assert_eq!(c.offset(), 0.0);
    }

    #[test]
    fn test_attach_gesture_rejects_vertical_edges() {
        let mut c = controller(Edge::Bottom);
        assert!(matches!(
            c.attach_gesture(GestureKind::Swipe),
            Err(Error::GestureUnavailable { edge: Edge::Bottom })
        ));
        let mut c = controller(Edge::Left);
        assert!(c.attach_gesture(GestureKind::Pan).is_ok());
    }

    #[test]
    fn test_force_close_is_synchronous() {
        let mut c = controller(Edge::Right);
        c.open(false);
        assert!(c.is_open());

        c.force_close();
        assert!(!c.is_open());
        assert_eq!(c.offset(), 0.0);
        assert_eq!(c.state(), MenuState::Closed);
    }

    #[test]
    fn test_menu_frame_tracks_offset() {
        let mut c = controller(Edge::Right);
        assert_eq!(c.menu_frame(), Rect::new(320.0, 100.0, 320.0, 88.0));
        c.open(false);
        assert_eq!(c.menu_frame(), Rect::new(0.0, 100.0, 320.0, 88.0));

        let mut c = controller(Edge::Bottom);
        assert_eq!(c.menu_frame(), Rect::new(0.0, 188.0, 320.0, 88.0));
        c.open(false);
        assert_eq!(c.menu_frame(), Rect::new(0.0, 100.0, 320.0, 88.0));
    }

    #[test]
    fn test_icon_anchor_top() {
        let c = controller(Edge::Right);
        // Defaults: icon shown, anchored to the top edge, 20x30 box, 10 inset.
        let anchor = c.icon_anchor().unwrap();
        assert_eq!(anchor, Rect::new(150.0, 110.0, 20.0, 30.0));
    }

    #[test]
    fn test_icon_asset_per_axis() {
        let c = controller(Edge::Right);
        assert_eq!(c.icon_asset(), "more");
        let c = controller(Edge::Bottom);
        assert_eq!(c.icon_asset(), "more_H");
    }

    #[test]
    fn test_activate_item_emits_index() {
        let c = controller(Edge::Right);
        let activated = Rc::new(Cell::new(None));
        let sink = activated.clone();
        c.item_activated().connect(move |index| sink.set(Some(*index)));

        c.activate_item(1);
        assert_eq!(activated.get(), Some(1));

        // Out of range is a no-op.
        c.activate_item(9);
        assert_eq!(activated.get(), Some(1));
    }

    #[test]
    fn test_delegate_policy_applied() {
        struct Policy;
        impl RevealDelegate for Policy {
            fn edge_for(&self, _row: usize) -> Edge {
                Edge::Right
            }
            fn layout_for(&self, _row: usize) -> MenuLayout {
                MenuLayout::Square
            }
            fn show_toggle_icon_for(&self, _row: usize) -> bool {
                false
            }
        }

        let delegate: Rc<dyn RevealDelegate> = Rc::new(Policy);
        let mut c = controller(Edge::Bottom);
        c.set_delegate(Rc::downgrade(&delegate));

        assert_eq!(c.edge(), Edge::Right);
        assert_eq!(c.layout(), MenuLayout::Square);
        assert!(c.icon_anchor().is_none());
    }

    #[test]
    fn test_dead_delegate_keeps_defaults() {
        let mut c = controller(Edge::Bottom);
        let weak = {
            let delegate: Rc<dyn RevealDelegate> = Rc::new(DefaultRevealDelegate);
            Rc::downgrade(&delegate)
        };
        c.set_delegate(weak);
        assert_eq!(c.edge(), Edge::Bottom);
    }
}
