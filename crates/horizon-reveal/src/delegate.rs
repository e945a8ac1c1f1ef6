//! Host policy callbacks.
//!
//! The host decides, per row, which edge the menu slides in from, how items
//! are laid out, and whether and where the toggle icon appears. Every method
//! has a default body, so hosts implement only the policies they care about.

use crate::controller::Edge;
use crate::layout::MenuLayout;

/// Per-row layout policy supplied by the host.
///
/// The controller holds this behind a weak reference; when the host goes
/// away, the documented defaults apply.
///
/// # Example
///
/// ```ignore
/// use horizon_reveal::delegate::RevealDelegate;
/// use horizon_reveal::controller::Edge;
///
/// struct MyList;
///
/// impl RevealDelegate for MyList {
///     fn edge_for(&self, row: usize) -> Edge {
///         if row % 2 == 0 { Edge::Left } else { Edge::Right }
///     }
/// }
/// ```
pub trait RevealDelegate {
    /// Which edge the menu slides in from for this row.
    fn edge_for(&self, row: usize) -> Edge {
        let _ = row;
        Edge::Bottom
    }

    /// How items are composed inside the menu for this row.
    fn layout_for(&self, row: usize) -> MenuLayout {
        let _ = row;
        MenuLayout::Horizontal
    }

    /// Whether the toggle icon is shown for this row.
    fn show_toggle_icon_for(&self, row: usize) -> bool {
        let _ = row;
        true
    }

    /// Which edge of the menu the toggle icon anchors to for this row.
    fn toggle_icon_edge_for(&self, row: usize) -> Edge {
        let _ = row;
        Edge::Top
    }
}

/// A delegate that answers every query with the defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRevealDelegate;

impl RevealDelegate for DefaultRevealDelegate {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let delegate = DefaultRevealDelegate;
        assert_eq!(delegate.edge_for(0), Edge::Bottom);
        assert_eq!(delegate.layout_for(0), MenuLayout::Horizontal);
        assert!(delegate.show_toggle_icon_for(0));
        assert_eq!(delegate.toggle_icon_edge_for(0), Edge::Top);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        struct RightEdge;
        impl RevealDelegate for RightEdge {
            fn edge_for(&self, _row: usize) -> Edge {
                Edge::Right
            }
        }

        let delegate = RightEdge;
        assert_eq!(delegate.edge_for(7), Edge::Right);
        assert_eq!(delegate.layout_for(7), MenuLayout::Horizontal);
    }
}
