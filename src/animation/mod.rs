pub mod spring;
pub mod track;
