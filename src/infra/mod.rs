//! Инфраструктурный слой вокруг парсера:
//! - RNG-реализации для перемешивания колоды и пробных рук.

pub mod rng;

pub use rng::*;
