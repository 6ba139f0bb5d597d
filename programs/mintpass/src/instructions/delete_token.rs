use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::state::{MintMetadata, TokenListing};

#[derive(Accounts)]
pub struct DeleteToken<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"token", token.token_mint.as_ref()],
        bump = token.bumps.bump,
        constraint = token.authority == authority.key() @ ErrorCode::IncorrectTokenAuthority,
        close = authority,
    )]
    pub token: Box<Account<'info, TokenListing>>,

    #[account(
        mut,
        seeds = [b"metadata", token.token_mint.as_ref()],
        bump = token.bumps.metadata_bump,
        close = authority,
    )]
    pub metadata: Box<Account<'info, MintMetadata>>,
}

pub fn handler(ctx: Context<DeleteToken>) -> Result<()> {
    if ctx.accounts.token.transactions_info.outstanding_units() > 0 {
        return err!(ErrorCode::UsersStillHoldUnusedTokens);
    }

    msg!("listing closed: mint {}", ctx.accounts.token.token_mint);
    Ok(())
}
