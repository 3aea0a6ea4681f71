


pub mod conversion;
