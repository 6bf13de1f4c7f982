pub mod details;
pub mod render;
pub mod status;
pub mod update;
