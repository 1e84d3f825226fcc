//! Инфраструктурный слой вокруг движка тамболы:
//! - RNG-реализации для движка;
//! - доменные seed'ы для воспроизводимых игр;
//! - маппинг состояния сессии в DTO для фронта.

pub mod mapping;
pub mod rng;
pub mod rng_seed;

pub use mapping::*;
pub use rng::*;
pub use rng_seed::RngSeed;
