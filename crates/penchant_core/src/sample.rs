//! Picking entries from collections
//!
//! Every picker consumes exactly one draw. Unordered containers are
//! materialized in iteration order first, so reproducibility depends on
//! that order being stable: `BTreeMap`/`BTreeSet` are, `HashMap`/`HashSet`
//! with the default hasher are not (their order changes between processes).

use crate::error::{RandomError, Result};
use crate::random::SeededRandom;
use std::collections::BTreeMap;

impl SeededRandom {
    /// A random element of `items`.
    pub fn draw_entry<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        let index = self.draw_index(items.len())?;
        Ok(&items[index])
    }

    /// A random item from any iterable, collected in iteration order.
    pub fn draw_from<I>(&mut self, items: I) -> Result<I::Item>
    where
        I: IntoIterator,
    {
        let mut items: Vec<I::Item> = items.into_iter().collect();
        let index = self.draw_index(items.len())?;
        Ok(items.swap_remove(index))
    }

    /// A random value of `map`, in key order.
    pub fn draw_value<'a, K, V>(&mut self, map: &'a BTreeMap<K, V>) -> Result<&'a V> {
        self.draw_from(map.values())
    }

    fn draw_index(&mut self, len: usize) -> Result<usize> {
        if len == 0 {
            return Err(RandomError::EmptyContainer);
        }
        self.draw_between(0, len)
    }
}
