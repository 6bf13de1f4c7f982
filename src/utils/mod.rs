pub mod date;
pub mod editor;
pub mod formatting;
pub mod time;
