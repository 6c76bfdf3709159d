mod extrude;

pub use extrude::ExtrudeRoom;
