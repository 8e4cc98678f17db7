pub mod css;
pub mod sink;
