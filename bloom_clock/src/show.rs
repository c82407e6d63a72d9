//! Console rendering of resident pages
//! 驻留页的控制台展示

use std::fmt;

use crate::BloomClock;

/// `Cache Pages: 1 2 3 `, every page followed by a space
/// `Cache Pages: 1 2 3 `，每页后跟一个空格
impl fmt::Display for BloomClock {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Cache Pages: ")?;
    for page in self.pages() {
      write!(f, "{page} ")?;
    }
    Ok(())
  }
}
