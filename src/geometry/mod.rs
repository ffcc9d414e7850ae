pub mod curve;
pub mod projection;

pub use curve::{Arc, Circle, CircleIntersection, Curve, Line, Line3d, Segment, SegmentProjection};
pub use projection::{proj_xy, proj_z};
