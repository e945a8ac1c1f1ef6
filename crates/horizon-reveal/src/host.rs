//! Binding reveal controllers to reusable host cells.
//!
//! List and grid containers recycle a small pool of cell containers as the
//! user scrolls. The adapter keeps a direct registry from each live cell to
//! its controller, rebuilds the controller when a cell is reused for new
//! data, and routes platform gesture callbacks to the right controller.

use std::rc::Weak;
use std::time::Duration;

use horizon_reveal_core::logging::targets;
use horizon_reveal_core::{Point, Rect};
use slotmap::{SlotMap, new_key_type};

use crate::controller::RevealController;
use crate::delegate::{DefaultRevealDelegate, RevealDelegate};
use crate::error::{Error, Result};
use crate::gesture::{GestureKind, PanTracker, SwipeDirection};
use crate::item::ActionItem;

new_key_type! {
    /// Handle to a cell bound through a [`HostCellAdapter`].
    ///
    /// Stays valid across rebinds of the same cell; invalidated by
    /// [`HostCellAdapter::unbind`].
    pub struct CellKey;
}

/// One live cell: its controller plus the pan state between callbacks.
struct BoundCell {
    controller: RevealController,
    tracker: PanTracker,
    gesture: Option<GestureKind>,
}

/// Binds one [`RevealController`] per visible cell and handles row reuse.
///
/// # Example
///
/// ```ignore
/// use horizon_reveal::host::HostCellAdapter;
/// use horizon_reveal::gesture::GestureKind;
/// use horizon_reveal::item::ActionItem;
/// use horizon_reveal_core::Rect;
///
/// let mut adapter = HostCellAdapter::new();
/// let key = adapter.bind(
///     0,
///     Rect::new(0.0, 0.0, 320.0, 88.0),
///     vec![ActionItem::new("Delete", "trash")],
///     Some(GestureKind::Pan),
/// )?;
/// adapter.toggle_pressed(key)?;
/// ```
pub struct HostCellAdapter {
    cells: SlotMap<CellKey, BoundCell>,
    delegate: Weak<dyn RevealDelegate>,
}

impl Default for HostCellAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl HostCellAdapter {
    /// Create an adapter with no delegate; controllers use default policy.
    pub fn new() -> Self {
        Self {
            cells: SlotMap::with_key(),
            delegate: Weak::<DefaultRevealDelegate>::new(),
        }
    }

    /// Create an adapter that hands the given delegate to every controller.
    pub fn with_delegate(delegate: Weak<dyn RevealDelegate>) -> Self {
        Self {
            cells: SlotMap::with_key(),
            delegate,
        }
    }

    /// Number of bound cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cells are bound.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    // ====== Lifecycle ======

    /// Bind a fresh cell: build its controller, apply delegate policy, and
    /// attach the requested gesture.
    ///
    /// Errors if `gesture` is requested for an edge that only supports the
    /// toggle icon.
    pub fn bind(
        &mut self,
        row: usize,
        cell_frame: Rect,
        items: Vec<ActionItem>,
        gesture: Option<GestureKind>,
    ) -> Result<CellKey> {
        let controller = self.build_controller(row, cell_frame, items, gesture)?;
        let key = self.cells.insert(BoundCell {
            controller,
            tracker: PanTracker::new(),
            gesture,
        });
        tracing::debug!(target: targets::HOST, row, cells = self.cells.len(), "cell bound");
        Ok(key)
    }

    /// Reuse a bound cell for new row data.
    ///
    /// The old controller is force-closed synchronously before the new one
    /// takes over, so a stale open menu never shows over unrelated data.
    /// The cell keeps its frame and gesture kind. On error the existing
    /// binding is left unchanged.
    pub fn rebind(&mut self, key: CellKey, row: usize, items: Vec<ActionItem>) -> Result<()> {
        let (frame, gesture) = {
            let cell = self.cells.get(key).ok_or(Error::StaleCell)?;
            (cell.controller.cell_frame(), cell.gesture)
        };
        // Validate the new configuration before touching the old binding.
        let controller = self.build_controller(row, frame, items, gesture)?;
        let cell = self.cells.get_mut(key).ok_or(Error::StaleCell)?;
        cell.controller.force_close();
        cell.controller = controller;
        cell.tracker = PanTracker::new();
        tracing::debug!(target: targets::HOST, row, "cell rebound");
        Ok(())
    }

    /// Remove a cell from the adapter, force-closing its menu.
    pub fn unbind(&mut self, key: CellKey) {
        if let Some(mut cell) = self.cells.remove(key) {
            cell.controller.force_close();
            tracing::debug!(target: targets::HOST, cells = self.cells.len(), "cell unbound");
        }
    }

    fn build_controller(
        &self,
        row: usize,
        cell_frame: Rect,
        items: Vec<ActionItem>,
        gesture: Option<GestureKind>,
    ) -> Result<RevealController> {
        let mut controller = RevealController::new(row, cell_frame, items);
        controller.set_delegate(self.delegate.clone());
        if let Some(kind) = gesture {
            controller.attach_gesture(kind)?;
        }
        Ok(controller)
    }

    // ====== Access ======

    /// The controller bound through `key`, if still bound.
    pub fn controller(&self, key: CellKey) -> Option<&RevealController> {
        self.cells.get(key).map(|cell| &cell.controller)
    }

    /// Mutable access to the controller bound through `key`.
    pub fn controller_mut(&mut self, key: CellKey) -> Option<&mut RevealController> {
        self.cells.get_mut(key).map(|cell| &mut cell.controller)
    }

    /// Row identities of every currently open menu.
    pub fn open_rows(&self) -> Vec<usize> {
        self.cells
            .values()
            .filter(|cell| cell.controller.is_open())
            .map(|cell| cell.controller.row())
            .collect()
    }

    /// Close every open menu except the one bound through `except`.
    ///
    /// Hosts that want at most one open row call this before opening.
    pub fn close_others(&mut self, except: CellKey) {
        for (key, cell) in self.cells.iter_mut() {
            if key != except && cell.controller.is_open() {
                cell.controller.close(true);
            }
        }
    }

    /// Step every in-flight animation by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        for cell in self.cells.values_mut() {
            cell.controller.advance(dt);
        }
    }

    // ====== Gesture routing ======

    /// A pan began on a cell with the given initial velocity.
    ///
    /// Returns whether the gesture was claimed. Near-vertical pans and cells
    /// without an attached pan gesture are declined so the container scroll
    /// keeps priority.
    pub fn pan_began(&mut self, key: CellKey, velocity: Point) -> bool {
        let Some(cell) = self.cells.get_mut(key) else {
            return false;
        };
        if cell.gesture != Some(GestureKind::Pan) {
            return false;
        }
        cell.tracker.begin(velocity)
    }

    /// A claimed pan moved by `delta` since the last callback.
    ///
    /// Returns whether the increment moved the menu.
    pub fn pan_moved(&mut self, key: CellKey, delta: Point, velocity: Point) -> bool {
        let Some(cell) = self.cells.get_mut(key) else {
            return false;
        };
        cell.tracker.update(delta, velocity);
        cell.controller.handle_pan(&mut cell.tracker)
    }

    /// A claimed pan finished or was cancelled by the platform.
    ///
    /// The menu stays wherever the pan left it; hosts wanting a closed row
    /// after cancellation call `close` on the controller.
    pub fn pan_ended(&mut self, key: CellKey) {
        if let Some(cell) = self.cells.get_mut(key) {
            cell.tracker.end();
        }
    }

    /// A directional swipe was recognized on a cell.
    pub fn swiped(&mut self, key: CellKey, direction: SwipeDirection) -> Result<()> {
        let cell = self.cells.get_mut(key).ok_or(Error::StaleCell)?;
        cell.controller.handle_swipe(direction)
    }

    /// The toggle icon was tapped on a cell.
    pub fn toggle_pressed(&mut self, key: CellKey) -> Result<()> {
        let cell = self.cells.get_mut(key).ok_or(Error::StaleCell)?;
        cell.controller.toggle(true);
        Ok(())
    }
}

impl std::fmt::Debug for HostCellAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostCellAdapter")
            .field("cells", &self.cells.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Edge;
    use crate::layout::MenuLayout;
    use std::rc::Rc;

    const CELL: Rect = Rect::new(0.0, 0.0, 320.0, 88.0);

    struct RightPan;
    impl RevealDelegate for RightPan {
        fn edge_for(&self, _row: usize) -> Edge {
            Edge::Right
        }
    }

    fn items(n: usize) -> Vec<ActionItem> {
        (0..n)
            .map(|i| ActionItem::new(format!("item {i}"), "icon"))
            .collect()
    }

    #[test]
    fn test_bind_applies_delegate_policy() {
        let delegate: Rc<dyn RevealDelegate> = Rc::new(RightPan);
        let mut adapter = HostCellAdapter::with_delegate(Rc::downgrade(&delegate));

        let key = adapter
            .bind(4, CELL, items(3), Some(GestureKind::Pan))
            .unwrap();
        let controller = adapter.controller(key).unwrap();
        assert_eq!(controller.edge(), Edge::Right);
        assert_eq!(controller.layout(), MenuLayout::Horizontal);
        assert_eq!(controller.row(), 4);
    }

    #[test]
    fn test_bind_rejects_gesture_on_vertical_edge() {
        // Default delegate policy is the bottom edge.
        let mut adapter = HostCellAdapter::new();
        assert!(matches!(
            adapter.bind(0, CELL, items(2), Some(GestureKind::Swipe)),
            Err(Error::GestureUnavailable { edge: Edge::Bottom })
        ));
        // Without a gesture the same configuration is fine.
        assert!(adapter.bind(0, CELL, items(2), None).is_ok());
    }

    #[test]
    fn test_rebind_force_closes_open_menu() {
        let delegate: Rc<dyn RevealDelegate> = Rc::new(RightPan);
        let mut adapter = HostCellAdapter::with_delegate(Rc::downgrade(&delegate));
        let key = adapter
            .bind(1, CELL, items(2), Some(GestureKind::Pan))
            .unwrap();

        adapter.controller_mut(key).unwrap().open(false);
        assert!(adapter.controller(key).unwrap().is_open());

        adapter.rebind(key, 9, items(3)).unwrap();
        let controller = adapter.controller(key).unwrap();
        assert!(!controller.is_open());
        assert_eq!(controller.offset(), 0.0);
        assert_eq!(controller.row(), 9);
        assert_eq!(controller.items().len(), 3);
    }

    #[test]
    fn test_pan_routing() {
        let delegate: Rc<dyn RevealDelegate> = Rc::new(RightPan);
        let mut adapter = HostCellAdapter::with_delegate(Rc::downgrade(&delegate));
        let key = adapter
            .bind(0, CELL, items(2), Some(GestureKind::Pan))
            .unwrap();

        assert!(adapter.pan_began(key, Point::new(-100.0, 5.0)));
        assert!(adapter.pan_moved(key, Point::new(-60.0, 0.0), Point::new(-100.0, 0.0)));
        assert_eq!(adapter.controller(key).unwrap().offset(), -60.0);
        adapter.pan_ended(key);
    }

    #[test]
    fn test_pan_declined_without_pan_gesture() {
        let delegate: Rc<dyn RevealDelegate> = Rc::new(RightPan);
        let mut adapter = HostCellAdapter::with_delegate(Rc::downgrade(&delegate));
        let key = adapter
            .bind(0, CELL, items(2), Some(GestureKind::Swipe))
            .unwrap();
        assert!(!adapter.pan_began(key, Point::new(-100.0, 0.0)));
    }

    #[test]
    fn test_close_others() {
        let delegate: Rc<dyn RevealDelegate> = Rc::new(RightPan);
        let mut adapter = HostCellAdapter::with_delegate(Rc::downgrade(&delegate));
        let first = adapter.bind(0, CELL, items(1), None).unwrap();
        let second = adapter
            .bind(1, Rect::new(0.0, 88.0, 320.0, 88.0), items(1), None)
            .unwrap();

        adapter.controller_mut(first).unwrap().open(false);
        adapter.controller_mut(second).unwrap().open(false);
        assert_eq!(adapter.open_rows().len(), 2);

        adapter.close_others(second);
        adapter.advance(Duration::from_secs(2));
        assert_eq!(adapter.open_rows(), vec![1]);
    }

    #[test]
    fn test_failed_rebind_leaves_binding_untouched() {
        // Row 0 gets a horizontal edge, every other row a vertical one.
        struct EdgeByRow;
        impl RevealDelegate for EdgeByRow {
            fn edge_for(&self, row: usize) -> Edge {
                if row == 0 { Edge::Right } else { Edge::Bottom }
            }
        }

        let delegate: Rc<dyn RevealDelegate> = Rc::new(EdgeByRow);
        let mut adapter = HostCellAdapter::with_delegate(Rc::downgrade(&delegate));
        let key = adapter
            .bind(0, CELL, items(2), Some(GestureKind::Pan))
            .unwrap();
        adapter.controller_mut(key).unwrap().open(false);

        // The cell keeps its pan gesture, which row 1's edge cannot carry.
        assert!(matches!(
            adapter.rebind(key, 1, items(3)),
            Err(Error::GestureUnavailable { edge: Edge::Bottom })
        ));

        let controller = adapter.controller(key).unwrap();
        assert_eq!(controller.row(), 0);
        assert!(controller.is_open());
        assert_eq!(controller.items().len(), 2);
    }

    #[test]
    fn test_unbound_key_is_stale() {
        let mut adapter = HostCellAdapter::new();
        let key = adapter.bind(0, CELL, items(1), None).unwrap();
        adapter.unbind(key);

        assert!(adapter.controller(key).is_none());
        assert!(matches!(adapter.toggle_pressed(key), Err(Error::StaleCell)));
        assert!(matches!(
            adapter.rebind(key, 1, items(1)),
            Err(Error::StaleCell)
        ));
    }
}
