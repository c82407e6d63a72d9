//! CLOCK-style cache with filter-backed reference bits
//! 引用位存放于过滤器的 CLOCK 式缓存
//!
//! Every resident page has no private reference bit. Instead one shared
//! [`PairBloom`] answers "referenced recently?" for all of them.
//! 驻留页没有私有引用位，由一个共享的 [`PairBloom`] 回答“最近是否被引用”。
//!
//! # Access
//! 访问
//!
//! Hit: move the page to the tail only if the filter does not mark it, then
//! mark it. A marked page is never reordered by a hit.
//! 命中：仅当过滤器未标记该页时移到队尾，随后标记。已标记页命中时不调整顺序。
//!
//! Miss: when full, evict the first unmarked page from the front, clearing
//! its bits. If every resident page is marked nothing is evicted and the
//! queue grows past `cap`. The new page is then appended and marked.
//! 未命中：满时从队首淘汰第一个未标记页并清除其位。
//! 若全部驻留页都已标记，则不淘汰，队列超出 `cap`。随后追加并标记新页。
//!
//! Bits are only cleared by eviction, so a cache that is never aged through
//! [`BloomClock::unmark`] or [`BloomClock::clear_marks`] never evicts.
//! 位只在淘汰时清除，因此从未通过 `unmark` 或 `clear_marks` 老化的缓存永远不会淘汰。

use log::{debug, trace};
use pair_bloom::PairBloom;

use crate::{Conf, Page, ParsedConf, Queue, Result};

/// Page cache approximating CLOCK with a shared bit filter
/// 以共享位过滤器近似 CLOCK 的页缓存
///
/// ```
/// use bloom_clock::BloomClock;
///
/// let mut cache = BloomClock::new(3);
/// for page in [1, 2, 3, 4] {
///   cache.access(page);
/// }
/// // All residents are marked, eviction is skipped
/// assert_eq!(cache.introspect(), [1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct BloomClock {
  cap: usize,
  queue: Queue,
  filter: PairBloom,
}

impl BloomClock {
  /// Create with capacity and a 128-bit filter
  /// 以容量和 128 位过滤器创建
  ///
  /// `cap` is not clamped, with 0 every miss attempts an eviction first.
  /// `cap` 不做钳制，为 0 时每次未命中都先尝试淘汰。
  pub fn new(cap: usize) -> Self {
    Self {
      cap,
      queue: Queue::new(),
      filter: PairBloom::default(),
    }
  }

  /// Create with capacity and configuration
  /// 以容量和配置创建
  pub fn with_conf(cap: usize, conf: &[Conf]) -> Result<Self> {
    let conf = ParsedConf::new(conf);
    Ok(Self {
      cap,
      queue: Queue::new(),
      filter: PairBloom::new(conf.filter_bits)?,
    })
  }

  #[inline]
  pub fn cap(&self) -> usize {
    self.cap
  }

  /// Resident count, may exceed `cap`
  /// 驻留数，可能超过 `cap`
  #[inline]
  pub fn len(&self) -> usize {
    self.queue.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.queue.is_empty()
  }

  #[inline]
  pub fn filter(&self) -> &PairBloom {
    &self.filter
  }

  /// Whether the filter currently marks `page` as referenced
  /// 过滤器当前是否将 `page` 标记为已引用
  #[inline]
  pub fn is_marked(&self, page: Page) -> bool {
    self.filter.contains(page)
  }

  /// Clear the filter bits of `page`, like a CLOCK hand passing over it.
  /// Pages sharing a bit lose their mark too.
  /// 清除 `page` 的过滤器位，如同 CLOCK 指针扫过。共享位的页同样失去标记。
  #[inline]
  pub fn unmark(&mut self, page: Page) {
    self.filter.rm(page);
  }

  /// Unmark every page
  /// 清除所有页的标记
  #[inline]
  pub fn clear_marks(&mut self) {
    self.filter.clear();
  }

  /// Reference `page`
  /// 引用 `page`
  pub fn access(&mut self, page: Page) {
    if self.queue.contains(page) {
      if !self.filter.contains(page) {
        self.queue.to_back(page);
      }
      self.filter.add(page);
      return;
    }

    if self.queue.len() >= self.cap {
      self.evict();
    }
    self.queue.push_back(page);
    self.filter.add(page);
  }

  /// Evict at most one unmarked page, scanning from the front
  /// 从队首扫描，最多淘汰一个未标记页
  fn evict(&mut self) {
    let filter = &self.filter;
    let found = self
      .queue
      .iter()
      .enumerate()
      .find(|(_, page)| !filter.contains(**page))
      .map(|(pos, &page)| (pos, page));

    let Some((pos, page)) = found else {
      trace!(
        "no unmarked page, {} resident over cap {}",
        self.queue.len() + 1,
        self.cap
      );
      return;
    };

    self.filter.rm(page);
    self.queue.remove_at(pos);
    debug!("evict page {page} at {pos}");
  }

  /// Resident pages front to back
  /// 从队首到队尾的驻留页
  #[inline]
  pub fn pages(&self) -> impl Iterator<Item = Page> + '_ {
    self.queue.iter().copied()
  }

  /// Snapshot of resident pages front to back, no side effects
  /// 驻留页快照（队首到队尾），无副作用
  #[inline]
  pub fn introspect(&self) -> Vec<Page> {
    self.pages().collect()
  }
}
