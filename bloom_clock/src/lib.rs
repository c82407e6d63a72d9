//! Page cache approximating CLOCK with a shared bit filter
//! 以共享位过滤器近似 CLOCK 的页缓存
//!
//! # Features
//!
//! - `no`: `NoCache` - zero overhead no-op
//!
//! # 特性
//!
//! - `no`：`NoCache` - 零开销空操作

#![cfg_attr(docsrs, feature(doc_cfg))]

mod clock;
pub mod conf;
pub mod error;
mod queue;
mod show;

#[cfg(feature = "no")]
mod no;

pub use clock::BloomClock;
pub use conf::{Conf, ParsedConf};
pub use error::{Error, Result};
#[cfg(feature = "no")]
pub use no::NoCache;
pub use pair_bloom::PairBloom;
pub use queue::Queue;

/// Page identity
/// 页标识
pub type Page = i64;

/// Page cache trait
/// 页缓存 trait
pub trait PageCache {
  /// Reference a page
  /// 引用一个页
  fn access(&mut self, page: Page);

  /// Resident pages front to back
  /// 从队首到队尾的驻留页
  fn pages(&self) -> impl Iterator<Item = Page> + '_;

  fn len(&self) -> usize;

  #[inline]
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Snapshot of resident pages
  /// 驻留页快照
  #[inline]
  fn introspect(&self) -> Vec<Page> {
    self.pages().collect()
  }
}

impl PageCache for BloomClock {
  #[inline(always)]
  fn access(&mut self, page: Page) {
    BloomClock::access(self, page)
  }

  #[inline(always)]
  fn pages(&self) -> impl Iterator<Item = Page> + '_ {
    BloomClock::pages(self)
  }

  #[inline(always)]
  fn len(&self) -> usize {
    BloomClock::len(self)
  }
}
