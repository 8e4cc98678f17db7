pub mod region;
pub mod source;
