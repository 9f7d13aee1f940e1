// Service module exports

pub mod board;
pub mod carousel;
pub mod countdown;
pub mod repository;
