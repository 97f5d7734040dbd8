pub mod add;
pub mod all;
pub mod config;
pub mod current;
pub mod list;
