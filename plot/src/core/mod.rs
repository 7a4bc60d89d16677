//! Plot-construction pipeline stages that do not touch pixels.

pub mod error;
pub mod mapper;
pub mod options;
pub mod range;
pub mod series;
pub mod table;
