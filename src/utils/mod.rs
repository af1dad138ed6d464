pub mod colors;
pub mod table;
pub mod text;
