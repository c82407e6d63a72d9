//! Fixed-size bit vector backed by u64 words.
//! 基于 u64 字的定长位向量

/// Bit vector with single-bit set/clear/test.
/// 支持单个位设置/清除/测试的位向量
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bits {
  words: Box<[u64]>,
  len: usize,
}

impl Bits {
  /// Create all-zero bit vector of `len` bits.
  /// 创建 `len` 位的全零位向量
  pub fn new(len: usize) -> Self {
    Self {
      words: vec![0; len.div_ceil(64)].into_boxed_slice(),
      len,
    }
  }

  /// Number of addressable bits.
  /// 可寻址位数
  #[inline]
  pub fn len(&self) -> usize {
    self.len
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Test bit at `pos`.
  /// 测试 `pos` 处的位
  #[inline(always)]
  pub fn get(&self, pos: usize) -> bool {
    debug_assert!(pos < self.len);
    (self.words[pos >> 6] >> (pos & 63)) & 1 == 1
  }

  #[inline(always)]
  pub fn set(&mut self, pos: usize) {
    debug_assert!(pos < self.len);
    self.words[pos >> 6] |= 1u64 << (pos & 63);
  }

  #[inline(always)]
  pub fn unset(&mut self, pos: usize) {
    debug_assert!(pos < self.len);
    self.words[pos >> 6] &= !(1u64 << (pos & 63));
  }

  /// Count set bits.
  /// 统计已置位的位数
  #[inline]
  pub fn count_ones(&self) -> usize {
    self.words.iter().map(|w| w.count_ones() as usize).sum()
  }

  /// Reset every bit to zero.
  /// 将所有位清零
  #[inline]
  pub fn fill_zero(&mut self) {
    self.words.fill(0);
  }
}
