pub mod category;
pub mod icon;
pub mod service;
pub mod session;
