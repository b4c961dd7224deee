pub mod draw;
pub mod font;
pub mod wrap;
