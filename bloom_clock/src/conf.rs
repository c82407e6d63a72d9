//! Cache configuration
//! 缓存配置

/// Default configuration values
/// 默认配置值
pub mod default {
  pub const FILTER_BITS: usize = pair_bloom::DEFAULT_BITS;
}

/// Cache configuration
/// 缓存配置
#[derive(Debug, Clone, Copy)]
pub enum Conf {
  /// Reference filter size in bits, default 128
  /// 引用过滤器位数，默认 128
  FilterBits(usize),
}

/// Parsed configuration
/// 解析后的配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedConf {
  pub filter_bits: usize,
}

impl Default for ParsedConf {
  fn default() -> Self {
    Self {
      filter_bits: default::FILTER_BITS,
    }
  }
}

impl ParsedConf {
  /// Later items override earlier ones
  /// 后出现的项覆盖先出现的
  pub fn new(conf: &[Conf]) -> Self {
    let mut c = Self::default();
    for item in conf {
      match *item {
        Conf::FilterBits(v) => c.filter_bits = v,
      }
    }
    c
  }
}
