pub mod edit;
pub mod log;
pub mod render;
pub mod start;
pub mod status;
pub mod stop;
pub mod version;
