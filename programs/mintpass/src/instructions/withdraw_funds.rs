use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount, Token, TokenAccount, Transfer};

use crate::errors::ErrorCode;
use crate::state::{App, Payment, TokenListing};
use crate::utils::withdraw_amounts;

#[derive(Accounts)]
pub struct WithdrawFunds<'info> {
    /// The seller.
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [b"app", app.app_name.as_bytes()],
        bump = app.bump,
        constraint = app.key() == token.app @ ErrorCode::IncorrectAppAccount,
    )]
    pub app: Box<Account<'info, App>>,

    #[account(
        seeds = [b"token", token.token_mint.as_ref()],
        bump = token.bumps.bump,
    )]
    pub token: Box<Account<'info, TokenListing>>,

    /// CHECK: rent destination only; the payment accounts were funded by
    /// the buyer, checked against the payment record below.
    #[account(mut, constraint = payment.buyer == buyer.key())]
    pub buyer: AccountInfo<'info>,

    #[account(
        mut,
        seeds = [
            b"payment",
            token.token_mint.as_ref(),
            payment.buyer.as_ref(),
            &payment.payment_timestamp.to_le_bytes(),
        ],
        bump = payment.bump,
        constraint = authority.key() == payment.seller @ ErrorCode::IncorrectPaymentAuthority,
        close = buyer,
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

    /// Seller's vault for the paid mint.
    #[account(
        mut,
        constraint = receiver_vault.mint == payment.paid_mint
            @ ErrorCode::IncorrectReceiverTokenAccount,
    )]
    pub receiver_vault: Box<Account<'info, TokenAccount>>,

    /// App owner's vault for the paid mint, receives the fee cut.
    #[account(
        mut,
        constraint = app_authority_vault.owner == app.authority
            && app_authority_vault.mint == payment.paid_mint
            @ ErrorCode::IncorrectReceiverTokenAccount,
    )]
    pub app_authority_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct FundsWithdrawn {
    pub payment: Pubkey,
    pub token_mint: Pubkey,
    pub seller: Pubkey,
    pub app_fee: u64,
    pub seller_amount: u64,
}

pub fn handler(ctx: Context<WithdrawFunds>) -> Result<()> {
    let clock = Clock::get()?;
    let payment = &ctx.accounts.payment;

    if clock.unix_timestamp < payment.refund_consumed_at {
        return err!(ErrorCode::CannotWithdrawYet);
    }

    let (app_fee, seller_amount) =
        withdraw_amounts(ctx.accounts.app.fee_basis_points, payment.price)?;

    let timestamp_bytes = payment.payment_timestamp.to_le_bytes();
    let payment_seeds = &[
        b"payment".as_ref(),
        payment.token_mint.as_ref(),
        payment.buyer.as_ref(),
        timestamp_bytes.as_ref(),
        &[payment.bump],
    ];

    if app_fee > 0 {
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.payment_vault.to_account_info(),
                    to: ctx.accounts.app_authority_vault.to_account_info(),
                    authority: ctx.accounts.payment.to_account_info(),
                },
                &[&payment_seeds[..]],
            ),
            app_fee,
        )?;
    }

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
        seller_amount,
    )?;

    token::close_account(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        CloseAccount {
            account: ctx.accounts.payment_vault.to_account_info(),
            destination: ctx.accounts.buyer.to_account_info(),
            authority: ctx.accounts.payment.to_account_info(),
        },
        &[&payment_seeds[..]],
    ))?;

    emit!(FundsWithdrawn {
        payment: ctx.accounts.payment.key(),
        token_mint: ctx.accounts.payment.token_mint,
        seller: ctx.accounts.authority.key(),
        app_fee,
        seller_amount,
    });

    msg!(
        "withdraw ok: {} to seller, {} to app owner",
        seller_amount,
        app_fee
    );
    Ok(())
}
