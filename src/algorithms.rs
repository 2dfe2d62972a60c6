pub mod convex_hull;
pub mod intersection;
pub mod point_location;

#[doc(inline)]
pub use convex_hull::graham_scan::convex_hull;

#[doc(inline)]
pub use intersection::sweep_line::segment_intersections;

#[doc(inline)]
pub use point_location::locate;
