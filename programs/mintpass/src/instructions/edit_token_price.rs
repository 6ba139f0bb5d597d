use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::state::TokenListing;

#[derive(Accounts)]
pub struct EditTokenPrice<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"token", token.token_mint.as_ref()],
        bump = token.bumps.bump,
        constraint = token.authority == authority.key() @ ErrorCode::IncorrectTokenAuthority,
    )]
    pub token: Box<Account<'info, TokenListing>>,
}

// Only touches the listing config; prices captured by open payments stay
// as they were at purchase time.
pub fn handler(ctx: Context<EditTokenPrice>, token_price: u64) -> Result<()> {
    require!(token_price > 0, ErrorCode::IncorrectPrice);

    ctx.accounts.token.seller_config.price = token_price;
    Ok(())
}
