use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, CloseAccount, Mint, Token, TokenAccount, Transfer};

use crate::errors::ErrorCode;
use crate::state::{Payment, TokenListing};

#[derive(Accounts)]
pub struct Refund<'info> {
    /// The buyer.
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

    /// Buyer's vault for the paid mint, receives the returned funds.
    #[account(
        mut,
        constraint = receiver_vault.mint == payment.paid_mint
            @ ErrorCode::IncorrectReceiverTokenAccount,
    )]
    pub receiver_vault: Box<Account<'info, TokenAccount>>,

    /// Holds the reward unit being returned.
    #[account(
        mut,
        constraint = buyer_token_vault.mint == token_mint.key()
            && buyer_token_vault.owner == authority.key()
            @ ErrorCode::IncorrectBuyerTokenAccountToStorePurchasedToken,
    )]
    pub buyer_token_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [
            b"payment",
            token.token_mint.as_ref(),
            payment.buyer.as_ref(),
            &payment.payment_timestamp.to_le_bytes(),
        ],
        bump = payment.bump,
        constraint = authority.key() == payment.buyer @ ErrorCode::IncorrectPaymentAuthority,
        close = authority,
    )]
    pub payment: Box<Account<'info, Payment>>,

    #[account(
        mut,
        seeds = [b"payment_vault", payment.key().as_ref()],
        bump = payment.bump_vault,
        constraint = payment_vault.owner == payment.key()
            && payment_vault.mint == payment.paid_mint
            @ ErrorCode::IncorrectPaymentVault,
    )]
    pub payment_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct PurchaseRefunded {
    pub payment: Pubkey,
    pub token_mint: Pubkey,
    pub buyer: Pubkey,
    pub amount: u64,
}

pub fn handler(ctx: Context<Refund>) -> Result<()> {
    let clock = Clock::get()?;
    if clock.unix_timestamp >= ctx.accounts.payment.refund_consumed_at {
        return err!(ErrorCode::TimeForRefundHasConsumed);
    }

    let token = &mut ctx.accounts.token;
    token.transactions_info.sold = token
        .transactions_info
        .sold
        .checked_sub(1)
        .ok_or(ErrorCode::NumericalOverflow)?;
    token.transactions_info.refunded = token
        .transactions_info
        .refunded
        .checked_add(1)
        .ok_or(ErrorCode::NumericalOverflow)?;

    // The burn is the use-after-refund guard: a unit already used or
    // given away leaves the vault short and the ledger rejects it.
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

    let payment = &ctx.accounts.payment;
    let timestamp_bytes = payment.payment_timestamp.to_le_bytes();
    let payment_seeds = &[
        b"payment".as_ref(),
        payment.token_mint.as_ref(),
        payment.buyer.as_ref(),
        timestamp_bytes.as_ref(),
        &[payment.bump],
    ];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.payment_vault.to_account_info(),
                to: ctx.accounts.receiver_vault.to_account_info(),
                authority: ctx.accounts.payment.to_account_info(),
            },
            &[&payment_seeds[..]],
        ),
        payment.price,
    )?;

    token::close_account(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        CloseAccount {
            account: ctx.accounts.payment_vault.to_account_info(),
            destination: ctx.accounts.authority.to_account_info(),
            authority: ctx.accounts.payment.to_account_info(),
        },
        &[&payment_seeds[..]],
    ))?;

    emit!(PurchaseRefunded {
        payment: ctx.accounts.payment.key(),
        token_mint: ctx.accounts.payment.token_mint,
        buyer: ctx.accounts.authority.key(),
        amount: ctx.accounts.payment.price,
    });

    Ok(())
}
