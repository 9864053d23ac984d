pub mod engine;
pub mod form;
pub mod input;
pub mod report;
