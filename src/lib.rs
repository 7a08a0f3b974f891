//! Rankskip - a skip list indexed by position.
//!
//! [`SkipList`] behaves like a `Vec` that supports inserting and removing in
//! the middle in expected O(log n) time. Each link records how many positions
//! it jumps, so any element can be reached by rank without storing indices.
//!
//! # Quick Start
//!
//! ```
//! use rankskip::SkipList;
//!
//! let mut list = SkipList::new();
//! list.insert(0, 'b')?;
//! list.insert(0, 'a')?;
//! list.push('c')?;
//!
//! assert_eq!(list.get(1)?, &'b');
//! assert_eq!(list.remove(0)?, 'a');
//! assert_eq!(list.describe(), "[b, c]");
//! # Ok::<(), rankskip::Error>(())
//! ```
//!
//! Level shapes can be made reproducible with a seed:
//!
//! ```
//! use rankskip::{Config, SkipList};
//!
//! let list: SkipList<u8> = SkipList::with_config(Config::seeded(7))?;
//! assert!(list.is_empty());
//! # Ok::<(), rankskip::Error>(())
//! ```

mod config;
mod error;
pub mod level;
mod list;
mod node;

pub use config::Config;
pub use config::MAX_LEVELS;
pub use error::Error;
pub use error::Result;
pub use level::Flat;
pub use level::Geometric;
pub use level::LevelGenerator;
pub use list::Iter;
pub use list::SkipList;
