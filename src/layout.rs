//! Layout module for tracking UI component regions
//!
//! The `LayoutRegions` struct records where components were rendered on the
//! last frame, and `region_at()` determines which component is at a given
//! screen position. This is what makes mouse clicks on suggestion rows work.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
