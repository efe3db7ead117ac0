pub mod carousel;
pub mod constants;
pub mod format;
