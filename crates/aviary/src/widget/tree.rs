//! Widget tree searches.
//!
//! Pure traversals over [`WidgetAccess`] storage: find the first descendant
//! matching a predicate, the first descendant of a given runtime type, or
//! the nearest matching ancestor. Nothing here mutates the tree; callers
//! must not mutate it mid-search either.
//!
//! Descendant searches visit children in depth-first pre-order, the same
//! order widgets are painted. The starting widget itself is never a match.
//! A visited set guards against cycles in host-supplied storage, which
//! would otherwise hang the traversal.

use std::collections::HashSet;

use super::dispatcher::{WidgetAccess, WidgetId};
use super::Widget;

/// Find the first descendant of `root` matching `predicate`.
///
/// With `recursive` set, the whole subtree is searched in depth-first
/// pre-order; otherwise only the immediate children are considered. `root`
/// itself is excluded. Returns `None` when nothing matches or `root` does
/// not exist.
pub fn find_descendant<S, P>(
    storage: &S,
    root: WidgetId,
    recursive: bool,
    predicate: P,
) -> Option<WidgetId>
where
    S: WidgetAccess,
    P: Fn(&dyn Widget) -> bool,
{
    let mut visited = HashSet::new();
    visited.insert(root);
    find_in_children(storage, root, recursive, &predicate, &mut visited)
}

fn find_in_children<S, P>(
    storage: &S,
    parent: WidgetId,
    recursive: bool,
    predicate: &P,
    visited: &mut HashSet<WidgetId>,
) -> Option<WidgetId>
where
    S: WidgetAccess,
    P: Fn(&dyn Widget) -> bool,
{
    for child in storage.get_children(parent) {
        if !visited.insert(child) {
            continue;
        }
        if let Some(widget) = storage.get_widget(child) {
            if predicate(widget) {
                return Some(child);
            }
        }
        if recursive {
            if let Some(found) = find_in_children(storage, child, true, predicate, visited) {
                return Some(found);
            }
        }
    }
    None
}

/// Find the first descendant whose [`Widget::type_name`] equals `name`.
///
/// The comparison is exact; there is no subtype relationship between
/// widget types.
pub fn find_descendant_by_type_name<S: WidgetAccess>(
    storage: &S,
    root: WidgetId,
    name: &str,
    recursive: bool,
) -> Option<WidgetId> {
    find_descendant(storage, root, recursive, |widget| {
        widget.type_name() == name
    })
}

/// Find the nearest ancestor of `start` matching `predicate`.
///
/// Walks the parent chain starting from `start`'s parent; `start` itself is
/// never a match. Returns `None` at the root without a match.
pub fn find_ancestor<S, P>(storage: &S, start: WidgetId, predicate: P) -> Option<WidgetId>
where
    S: WidgetAccess,
    P: Fn(&dyn Widget) -> bool,
{
    let mut visited = HashSet::new();
    visited.insert(start);
    let mut current = storage.get_parent(start);
    while let Some(id) = current {
        if !visited.insert(id) {
            return None;
        }
        if let Some(widget) = storage.get_widget(id) {
            if predicate(widget) {
                return Some(id);
            }
        }
        current = storage.get_parent(id);
    }
    None
}
