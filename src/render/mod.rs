pub mod buffer;
pub mod composite;
pub mod gradient;
pub mod palette;
