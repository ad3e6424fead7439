use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

use crate::{
    errors::QuadraticVotingError,
    state::{Dao, Proposal, Vote, VoteType},
};

#[derive(Accounts)]
pub struct CastVote<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        seeds = [b"dao", dao.authority.as_ref()],
        bump = dao.bump,
    )]
    pub dao: Account<'info, Dao>,

    #[account(
        mut,
        has_one = dao @ QuadraticVotingError::InvalidDao,
        seeds = [b"proposal", dao.key().as_ref(), proposal.index.to_le_bytes().as_ref()],
        bump = proposal.bump,
    )]
    pub proposal: Account<'info, Proposal>,

    #[account(
        init,
        payer = voter,
        seeds = [b"vote", voter.key().as_ref(), proposal.key().as_ref()],
        bump,
        space = Vote::DISCRIMINATOR.len() + Vote::INIT_SPACE
    )]
    pub vote: Account<'info, Vote>,

    // Read for the balance only, never debited. A zero balance still casts a
    // zero-credit vote.
    #[account(
        token::authority = voter,
    )]
    pub voter_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn cast_vote(ctx: Context<CastVote>, vote_type: u8) -> Result<()> {
    let proposal = &mut ctx.accounts.proposal;
    let vote = &mut ctx.accounts.vote;

    let vote_type = VoteType::try_from(vote_type)?;
    let credits = vote_credits(ctx.accounts.voter_token_account.amount);

    proposal.record_vote(vote_type, credits)?;

    vote.set_inner(Vote {
        authority: ctx.accounts.voter.key(),
        proposal: proposal.key(),
        vote_type: vote_type.into(),
        vote_credits: credits,
        bump: ctx.bumps.vote,
    });

    msg!(
        "Vote cast on proposal {} with {} credits",
        proposal.index,
        credits
    );

    emit!(VoteCast {
        proposal: vote.proposal,
        voter: vote.authority,
        vote_type: vote.vote_type,
        vote_credits: credits,
    });

    Ok(())
}

/// Voting credits for a token balance: `floor(sqrt(balance))`, computed in
/// integer arithmetic.
pub fn vote_credits(balance: u64) -> u64 {
    balance.isqrt()
}

#[event]
pub struct VoteCast {
    pub proposal: Pubkey,
    pub voter: Pubkey,
    pub vote_type: u8,
    pub vote_credits: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credits_are_the_integer_square_root_of_the_balance() {
        assert_eq!(vote_credits(0), 0);
        assert_eq!(vote_credits(1), 1);
        assert_eq!(vote_credits(3), 1);
        assert_eq!(vote_credits(4), 2);
        assert_eq!(vote_credits(99), 9);
        assert_eq!(vote_credits(100), 10);
        assert_eq!(vote_credits(10_000), 100);
    }

    #[test]
    fn credits_round_down_between_perfect_squares() {
        for root in [1u64, 2, 10, 1_000, 4_000_000_000] {
            let square = root * root;
            assert_eq!(vote_credits(square), root);
            assert_eq!(vote_credits(square - 1), root - 1);
            assert_eq!(vote_credits(square + 1), root);
        }
    }

    #[test]
    fn credits_never_overflow_at_the_maximum_balance() {
        assert_eq!(vote_credits(u64::MAX), u32::MAX as u64);
    }

    #[test]
    fn credits_are_monotonically_non_decreasing() {
        let balances = [0u64, 1, 2, 99, 100, 101, 65_535, 65_536, u64::MAX];
        for pair in balances.windows(2) {
            assert!(vote_credits(pair[0]) <= vote_credits(pair[1]));
        }
    }

    #[test]
    fn vote_address_is_a_pure_function_of_voter_and_proposal() {
        let voter = Pubkey::new_unique();
        let proposal = Pubkey::new_unique();

        let derive = || {
            Pubkey::find_program_address(
                &[b"vote", voter.as_ref(), proposal.as_ref()],
                &crate::ID,
            )
            .0
        };

        assert_eq!(derive(), derive());
    }

    #[test]
    fn each_voter_proposal_pair_derives_its_own_vote_address() {
        let voter_a = Pubkey::new_unique();
        let voter_b = Pubkey::new_unique();
        let proposal_a = Pubkey::new_unique();
        let proposal_b = Pubkey::new_unique();

        let vote_pda = |voter: &Pubkey, proposal: &Pubkey| {
            Pubkey::find_program_address(
                &[b"vote", voter.as_ref(), proposal.as_ref()],
                &crate::ID,
            )
            .0
        };

        let same_proposal = vote_pda(&voter_a, &proposal_a);
        assert_ne!(same_proposal, vote_pda(&voter_b, &proposal_a));
        assert_ne!(same_proposal, vote_pda(&voter_a, &proposal_b));
    }
}
