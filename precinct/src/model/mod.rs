pub mod dialect;
pub mod options;
pub mod stylesheet;
pub mod tree;
