use anchor_lang::prelude::*;

use crate::constants::MAX_DAO_NAME_LEN;
use crate::errors::QuadraticVotingError;

#[account]
#[derive(InitSpace)]
pub struct Dao {
    pub authority: Pubkey,
    #[max_len(MAX_DAO_NAME_LEN)]
    pub name: String,
    pub proposal_count: u64,
    pub bump: u8,
}

impl Dao {
    /// Hands out the index for the next proposal and advances the counter.
    pub fn register_proposal(&mut self) -> Result<u64> {
        let index = self.proposal_count;
        self.proposal_count = self
            .proposal_count
            .checked_add(1)
            .ok_or(QuadraticVotingError::Overflow)?;
        Ok(index)
    }
}
