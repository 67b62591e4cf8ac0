pub mod hexfile;
pub mod sample;

pub use hexfile::{load, parse, read_records};
