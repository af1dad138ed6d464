pub mod auth;
pub mod catalog;
pub mod generate;
pub mod normalize;
