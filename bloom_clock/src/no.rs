//! NoCache - zero overhead no-op cache
//! NoCache - 零开销空操作缓存
//!
//! Nothing is ever resident. Useful for measuring a workload without caching.
//! 永远没有驻留页。用于在无缓存的情况下度量负载。

use crate::{Page, PageCache};

/// No-op cache, all operations do nothing
/// 空操作缓存，所有操作都不做任何事
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl PageCache for NoCache {
  #[inline(always)]
  fn access(&mut self, _: Page) {}

  #[inline(always)]
  fn pages(&self) -> impl Iterator<Item = Page> + '_ {
    std::iter::empty()
  }

  #[inline(always)]
  fn len(&self) -> usize {
    0
  }
}
