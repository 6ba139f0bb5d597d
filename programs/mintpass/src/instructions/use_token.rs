use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount};

use crate::errors::ErrorCode;
use crate::state::TokenListing;

#[derive(Accounts)]
pub struct UseToken<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"token", token.token_mint.as_ref()],
        bump = token.bumps.bump,
    )]
    pub token: Box<Account<'info, TokenListing>>,

    #[account(
        mut,
        seeds = [b"token_mint", token.off_chain_id.as_bytes()],
        bump = token.bumps.mint_bump,
    )]
    pub token_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        constraint = buyer_token_vault.mint == token_mint.key()
            && buyer_token_vault.owner == authority.key()
            @ ErrorCode::IncorrectBuyerTokenAccountToStorePurchasedToken,
    )]
    pub buyer_token_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

// Using forfeits any future refund implicitly: once the unit is burned
// a later refund has nothing left to burn and fails at the ledger.
pub fn handler(ctx: Context<UseToken>) -> Result<()> {
    let token = &mut ctx.accounts.token;
    token.transactions_info.used = token
        .transactions_info
        .used
        .checked_add(1)
        .ok_or(ErrorCode::NumericalOverflow)?;

    token::burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.token_mint.to_account_info(),
                from: ctx.accounts.buyer_token_vault.to_account_info(),
                authority: ctx.accounts.authority.to_account_info(),
            },
        ),
        1,
    )?;

    Ok(())
}
