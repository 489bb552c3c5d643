use anchor_lang::prelude::*;
use solana_sha256_hasher::hash;

use crate::errors::PazaakError;

// ──────────────────────────────────────────────────────
// Cards Commitment — commit/reveal of the card permutation
//
// The creator commits to sha256(seed) when opening a room. At
// settlement the seed is revealed and checked against the hash,
// so the card order cannot be swapped after the fact.
// ──────────────────────────────────────────────────────

pub const SEED_LEN: usize = 32;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum CardsCommitment {
    /// Outcome not yet known
    Committed { hash: [u8; 32] },
    /// Seed revealed and verified against `hash`
    Revealed { seed: [u8; SEED_LEN], hash: [u8; 32] },
}

impl Default for CardsCommitment {
    fn default() -> Self {
        CardsCommitment::Committed { hash: [0u8; 32] }
    }
}

impl CardsCommitment {
    pub const LEN: usize = 1 + SEED_LEN + 32;

    pub fn hash_seed(seed: &[u8; SEED_LEN]) -> [u8; 32] {
        hash(seed).to_bytes()
    }

    pub fn hash(&self) -> [u8; 32] {
        match self {
            CardsCommitment::Committed { hash } | CardsCommitment::Revealed { hash, .. } => *hash,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, CardsCommitment::Revealed { .. })
    }

    pub fn verify(&self, seed: &[u8; SEED_LEN]) -> bool {
        Self::hash_seed(seed) == self.hash()
    }

    /// Consumes the commitment and returns its revealed form.
    /// The stored hash is carried over untouched.
    pub fn reveal(self, seed: [u8; SEED_LEN]) -> Result<Self> {
        require!(self.verify(&seed), PazaakError::CommitmentMismatch);
        Ok(CardsCommitment::Revealed {
            seed,
            hash: self.hash(),
        })
    }
}
