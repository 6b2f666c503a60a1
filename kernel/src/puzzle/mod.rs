pub mod board;
pub mod topology;
