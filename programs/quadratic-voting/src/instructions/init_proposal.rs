use anchor_lang::prelude::*;

use crate::{
    constants::MAX_PROPOSAL_METADATA_LEN,
    errors::QuadraticVotingError,
    state::{Dao, Proposal},
};

#[derive(Accounts)]
pub struct InitProposal<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [b"dao", dao.authority.as_ref()],
        bump = dao.bump,
        constraint = dao.authority == creator.key() @ QuadraticVotingError::UnauthorizedProposalCreation,
    )]
    pub dao: Account<'info, Dao>,

    #[account(
        init,
        payer = creator,
        seeds = [b"proposal", dao.key().as_ref(), dao.proposal_count.to_le_bytes().as_ref()],
        bump,
        space = Proposal::DISCRIMINATOR.len() + Proposal::INIT_SPACE
    )]
    pub proposal: Account<'info, Proposal>,

    pub system_program: Program<'info, System>,
}

pub fn init_proposal(ctx: Context<InitProposal>, metadata: String) -> Result<()> {
    require!(
        metadata.len() <= MAX_PROPOSAL_METADATA_LEN,
        QuadraticVotingError::StringTooLong
    );

    let dao = &mut ctx.accounts.dao;
    let proposal = &mut ctx.accounts.proposal;

    let index = dao.register_proposal()?;

    proposal.set_inner(Proposal {
        dao: dao.key(),
        metadata,
        index,
        yes_vote_count: 0,
        no_vote_count: 0,
        bump: ctx.bumps.proposal,
    });

    msg!("Proposal {} created under DAO {}", index, proposal.dao);

    emit!(ProposalCreated {
        dao: proposal.dao,
        proposal: proposal.key(),
        index,
    });

    Ok(())
}

#[event]
pub struct ProposalCreated {
    pub dao: Pubkey,
    pub proposal: Pubkey,
    pub index: u64,
}
