use anchor_lang::prelude::*;

use crate::{constants::MAX_DAO_NAME_LEN, errors::QuadraticVotingError, state::Dao};

#[derive(Accounts)]
pub struct InitDao<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        seeds = [b"dao", admin.key().as_ref()],
        bump,
        space = Dao::DISCRIMINATOR.len() + Dao::INIT_SPACE
    )]
    pub dao: Account<'info, Dao>,

    pub system_program: Program<'info, System>,
}

pub fn init_dao(ctx: Context<InitDao>, name: String) -> Result<()> {
    require!(
        name.len() <= MAX_DAO_NAME_LEN,
        QuadraticVotingError::StringTooLong
    );

    let dao = &mut ctx.accounts.dao;

    dao.set_inner(Dao {
        authority: ctx.accounts.admin.key(),
        name,
        proposal_count: 0,
        bump: ctx.bumps.dao,
    });

    msg!("DAO '{}' created by {}", dao.name, dao.authority);

    emit!(DaoInitialized {
        dao: dao.key(),
        authority: dao.authority,
    });

    Ok(())
}

#[event]
pub struct DaoInitialized {
    pub dao: Pubkey,
    pub authority: Pubkey,
}
