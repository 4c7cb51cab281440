// SPDX-License-Identifier: MPL-2.0
//! Container registry.
//!
//! One stacking container exists per screen anchor. Containers are created
//! on first use and live as long as the registry.

use super::notification::NotificationId;
use super::position::Position;

/// The stack of toasts at one anchor, in visual order (top to bottom).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    position: Position,
    children: Vec<NotificationId>,
}

impl Container {
    fn new(position: Position) -> Self {
        Self {
            position,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the style classes pinning this container to its anchor.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("toast-container {}", self.position.class_name())
    }

    /// Toast ids in visual order, top to bottom.
    #[must_use]
    pub fn children(&self) -> &[NotificationId] {
        &self.children
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Inserts so the newest toast sits next to the edge the stack grows from:
    /// appended at bottom anchors, prepended everywhere else.
    pub(crate) fn insert(&mut self, id: NotificationId) {
        if self.position.is_bottom() {
            self.children.push(id);
        } else {
            self.children.insert(0, id);
        }
    }

    pub(crate) fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.children.len();
        self.children.retain(|child| *child != id);
        self.children.len() < before
    }

    /// Returns the ids beyond `cap`, oldest first.
    pub(crate) fn oldest_excess(&self, cap: usize) -> Vec<NotificationId> {
        let excess = self.children.len().saturating_sub(cap);
        if self.position.is_bottom() {
            self.children.iter().take(excess).copied().collect()
        } else {
            self.children.iter().rev().take(excess).copied().collect()
        }
    }
}

/// Lazily created containers, one per [`Position`].
#[derive(Debug, Default)]
pub struct Registry {
    containers: Vec<Container>,
    mounted: Vec<Position>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the container for `position`, creating it on first use.
    pub fn get(&mut self, position: Position) -> &mut Container {
        let index = match self.index_of(position) {
            Some(index) => index,
            None => {
                tracing::debug!(position = position.name(), "mounting toast container");
                self.containers.push(Container::new(position));
                self.mounted.push(position);
                self.containers.len() - 1
            }
        };
        &mut self.containers[index]
    }

    /// Like [`Registry::get`], resolving unknown names to the default anchor.
    pub fn get_named(&mut self, name: &str) -> &mut Container {
        self.get(Position::resolve(name))
    }

    /// Returns the container for `position` without creating it.
    #[must_use]
    pub fn find(&self, position: Position) -> Option<&Container> {
        self.containers.iter().find(|c| c.position == position)
    }

    pub(crate) fn find_mut(&mut self, position: Position) -> Option<&mut Container> {
        self.containers.iter_mut().find(|c| c.position == position)
    }

    /// Containers in creation order.
    pub fn containers(&self) -> impl Iterator<Item = &Container> {
        self.containers.iter()
    }

    /// Drains the anchors whose containers were created since the last call.
    pub(crate) fn take_mounted(&mut self) -> Vec<Position> {
        std::mem::take(&mut self.mounted)
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        self.containers.iter().position(|c| c.position == position)
    }
}
