pub mod directory;
pub mod favorites;
pub mod render;
pub mod search;
pub mod user;
