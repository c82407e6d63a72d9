//! Resident page queue
//! 驻留页队列
//!
//! # Complexity
//! 复杂度
//!
//! - contains / push_back / to_back: O(1)
//! - find / remove_at: O(n), ordinal positions are counted from the front
//!
//! Based on hashlink::LinkedHashSet, insertion order is the queue order.
//! 基于 hashlink::LinkedHashSet，插入顺序即队列顺序。

use hashlink::{LinkedHashSet, linked_hash_set::Iter};

use crate::Page;

/// Ordered set of distinct resident pages, front is oldest
/// 有序且不重复的驻留页集合，队首最旧
#[derive(Debug, Clone, Default)]
pub struct Queue(LinkedHashSet<Page>);

impl Queue {
  #[inline]
  pub fn new() -> Self {
    Self::default()
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  #[inline]
  pub fn contains(&self, page: Page) -> bool {
    self.0.contains(&page)
  }

  /// Position from the front, None if not resident
  /// 距队首的位置，不驻留则为 None
  #[inline]
  pub fn find(&self, page: Page) -> Option<usize> {
    if !self.contains(page) {
      return None;
    }
    self.0.iter().position(|&p| p == page)
  }

  /// Append at the tail, caller guarantees `page` is absent
  /// 追加到队尾，调用方保证 `page` 不存在
  #[inline]
  pub fn push_back(&mut self, page: Page) {
    let inserted = self.0.insert(page);
    debug_assert!(inserted, "page {page} already resident");
  }

  /// Move resident `page` to the tail, returns false if absent
  /// 将驻留的 `page` 移到队尾，不存在时返回 false
  #[inline]
  pub fn to_back(&mut self, page: Page) -> bool {
    if self.0.remove(&page) {
      self.0.insert(page);
      true
    } else {
      false
    }
  }

  /// Remove entry at `pos`, returns the removed page
  /// 删除位置 `pos` 的条目，返回被删除的页
  pub fn remove_at(&mut self, pos: usize) -> Option<Page> {
    let page = *self.0.iter().nth(pos)?;
    self.0.remove(&page);
    Some(page)
  }

  /// Front-to-back iteration, restartable
  /// 从队首到队尾迭代，可重复
  #[inline]
  pub fn iter(&self) -> Iter<'_, Page> {
    self.0.iter()
  }
}

impl<'a> IntoIterator for &'a Queue {
  type Item = &'a Page;
  type IntoIter = Iter<'a, Page>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
