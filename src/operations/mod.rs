pub mod shaping;
