//! Two-projection bit filter
//! 双投影位过滤器
//!
//! Marks integer keys in a fixed bit vector of `M` bits through two
//! projections:
//! 通过两个投影在 `M` 位的定长位向量中标记整数键：
//!
//! - `h1(k) = k mod M`
//! - `h2(k) = k² mod M`
//!
//! Both use Euclidean modulo, so negative keys map into `0..M` too. `k²` is
//! computed in `i128` and never overflows.
//! 两者均使用欧几里得取模，负键同样映射到 `0..M`。`k²` 以 `i128` 计算，不会溢出。
//!
//! A key is present iff both of its bits are set. `rm` clears both bits
//! without reference counting, so removing one key can make another key
//! that shares a bit read as absent.
//! 两个位都置位才视为存在。`rm` 无引用计数地清除两个位，
//! 因此删除一个键可能使共享位的另一个键读作不存在。
//!
//! ```
//! use pair_bloom::PairBloom;
//!
//! let mut filter = PairBloom::default();
//! filter.add(5);
//! assert!(filter.contains(5));
//! filter.rm(5);
//! assert!(!filter.contains(5));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod bits;
pub mod error;

pub use bits::Bits;
pub use error::{Error, Result};

/// Default filter size in bits
/// 默认过滤器位数
pub const DEFAULT_BITS: usize = 128;

/// Bit filter with two projections and AND membership
/// 双投影、按位与判定成员的位过滤器
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairBloom {
  bits: Bits,
}

impl Default for PairBloom {
  fn default() -> Self {
    Self {
      bits: Bits::new(DEFAULT_BITS),
    }
  }
}

impl PairBloom {
  /// Create filter with `m` bits
  /// 创建 `m` 位的过滤器
  pub fn new(m: usize) -> Result<Self> {
    if m == 0 {
      return Err(Error::ZeroBits);
    }
    Ok(Self { bits: Bits::new(m) })
  }

  /// Filter size in bits (M)
  /// 过滤器位数 (M)
  #[inline]
  pub fn bits(&self) -> usize {
    self.bits.len()
  }

  /// Bit positions `[h1(k), h2(k)]`
  /// 位位置 `[h1(k), h2(k)]`
  #[inline]
  pub fn slots(&self, key: i64) -> [usize; 2] {
    let m = self.bits.len() as i128;
    let k = key as i128;
    [k.rem_euclid(m) as usize, (k * k).rem_euclid(m) as usize]
  }

  #[inline]
  pub fn add(&mut self, key: i64) {
    for pos in self.slots(key) {
      self.bits.set(pos);
    }
  }

  /// May report keys never added; may miss keys whose bit was cleared by
  /// another key's `rm`.
  /// 可能误报从未加入的键；也可能因其他键的 `rm` 清除共享位而漏报。
  #[inline]
  pub fn contains(&self, key: i64) -> bool {
    self.slots(key).into_iter().all(|pos| self.bits.get(pos))
  }

  /// Clear both bits of `key` unconditionally
  /// 无条件清除 `key` 的两个位
  #[inline]
  pub fn rm(&mut self, key: i64) {
    for pos in self.slots(key) {
      self.bits.unset(pos);
    }
  }

  /// Number of set bits, a saturation gauge
  /// 已置位数，用于衡量饱和度
  #[inline]
  pub fn ones(&self) -> usize {
    self.bits.count_ones()
  }

  /// Reset to empty
  /// 重置为空
  #[inline]
  pub fn clear(&mut self) {
    self.bits.fill_zero();
  }
}
