pub mod clipboard;
pub mod profile;
pub mod timer;
