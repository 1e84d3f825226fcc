//! RngSeed — доменный seed для RNG сессии.
//!
//! Позволяет:
//!   - хранить базовый seed (u64 или [u8;32])
//!   - делать детерминированное hash-reseeding:
//!         new = H(domain || old || generation || stream)
//!   - создавать DeterministicRng из seed
//!
//! Каждая перераздача билетов в сессии с seed'ом получает свой поток,
//! и любую игру можно повторить по базовому seed'у.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::SessionGeneration;
use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    /// Создать seed из 32 байт.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (для удобства тестов и CLI).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Доменное хэш-расширение с включением контекста:
    ///   - generation (поколение сессии)
    ///   - stream (0 — билеты, 1 — вызовы и т.п.)
    pub fn derive(&self, generation: SessionGeneration, stream: u64) -> Self {
        let mut hasher = Sha256::new();

        // Доменный префикс
        hasher.update(b"TAMBOLA_ENGINE_RNG_V1");
        hasher.update(self.bytes);
        hasher.update(generation.to_le_bytes());
        hasher.update(stream.to_le_bytes());

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    /// Создать DeterministicRng из seed.
    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed_bytes(self.bytes)
    }
}
