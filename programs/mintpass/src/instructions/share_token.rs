use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::errors::ErrorCode;
use crate::state::TokenListing;

#[derive(Accounts)]
pub struct ShareToken<'info> {
    /// The seller.
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"token", token.token_mint.as_ref()],
        bump = token.bumps.bump,
        constraint = token.authority == authority.key() @ ErrorCode::IncorrectTokenAuthority,
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
        constraint = receiver_vault.mint == token_mint.key()
            @ ErrorCode::IncorrectReceiverTokenAccount,
    )]
    pub receiver_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// Gifting path: mints copies straight to the receiver, no payment and
/// no supply accounting against `exemplars`.
pub fn handler(ctx: Context<ShareToken>, exemplars: u32) -> Result<()> {
    require!(exemplars > 0, ErrorCode::IncorrectAmount);

    let token = &mut ctx.accounts.token;
    token.transactions_info.shared = token
        .transactions_info
        .shared
        .checked_add(exemplars)
        .ok_or(ErrorCode::NumericalOverflow)?;

    let listing_seeds = &[
        b"token".as_ref(),
        ctx.accounts.token.token_mint.as_ref(),
        &[ctx.accounts.token.bumps.bump],
    ];

    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.token_mint.to_account_info(),
                to: ctx.accounts.receiver_vault.to_account_info(),
                authority: ctx.accounts.token.to_account_info(),
            },
            &[&listing_seeds[..]],
        ),
        exemplars.into(),
    )?;

    Ok(())
}
