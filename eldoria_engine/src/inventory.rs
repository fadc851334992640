//! Inventory -- an ordered bag of items carried by the player.
use std::fmt;

/// Ordered collection of items. Insertion order is preserved and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory<T> {
    items: Vec<T>,
}

impl<T> Default for Inventory<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: PartialEq> Inventory<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove the first occurrence of `item`.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.items.iter().position(|held| held == item) {
            Some(idx) => {
                self.items.remove(idx);
                true
            },
            None => false,
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Number of copies of `item` held.
    pub fn count(&self, item: &T) -> usize {
        self.items.iter().filter(|held| *held == item).count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Read-only view of the contents, in insertion order.
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

/// Items the player can find in Eldoria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Item {
    MinorHealingPotion,
    MapFragment,
}
impl Item {
    pub fn name(self) -> &'static str {
        match self {
            Item::MinorHealingPotion => "minor healing potion",
            Item::MapFragment => "map fragment",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
