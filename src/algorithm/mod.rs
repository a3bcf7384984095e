//! Algorithms over census population data

pub mod population;
