use anchor_lang::prelude::*;

use crate::constants::MAX_PROPOSAL_METADATA_LEN;
use crate::errors::QuadraticVotingError;
use crate::state::VoteType;

#[account]
#[derive(InitSpace)]
pub struct Proposal {
    pub dao: Pubkey,
    #[max_len(MAX_PROPOSAL_METADATA_LEN)]
    pub metadata: String,
    pub index: u64,
    pub yes_vote_count: u64,
    pub no_vote_count: u64,
    pub bump: u8,
}

impl Proposal {
    /// Adds `credits` to the tally picked by `vote_type`.
    pub fn record_vote(&mut self, vote_type: VoteType, credits: u64) -> Result<()> {
        match vote_type {
            VoteType::No => {
                self.no_vote_count = self
                    .no_vote_count
                    .checked_add(credits)
                    .ok_or(QuadraticVotingError::Overflow)?;
            }
            VoteType::Yes => {
                self.yes_vote_count = self
                    .yes_vote_count
                    .checked_add(credits)
                    .ok_or(QuadraticVotingError::Overflow)?;
            }
        }

        Ok(())
    }
}
