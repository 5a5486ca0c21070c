pub mod bounding_box;
pub mod instruction;
pub mod point;
pub mod polyline;
pub mod route_path;
