use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, MintTo, Token, TokenAccount, Transfer},
};

use crate::errors::ErrorCode;
use crate::state::{Payment, SupplyPolicy, TokenListing};

#[derive(Accounts)]
#[instruction(timestamp: i64)]
pub struct BuyToken<'info> {
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

    #[account(
        constraint = accepted_mint.key() == token.seller_config.accepted_mint
            @ ErrorCode::IncorrectPaymentToken,
    )]
    pub accepted_mint: Box<Account<'info, Mint>>,

    /// Where the funds come from.
    #[account(
        mut,
        constraint = buyer_transfer_vault.mint == token.seller_config.accepted_mint
            @ ErrorCode::IncorrectBuyerTokenAccountOnTransfer,
    )]
    pub buyer_transfer_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = authority,
        space = 8 + Payment::INIT_SPACE,
        seeds = [
            b"payment",
            token_mint.key().as_ref(),
            authority.key().as_ref(),
            &timestamp.to_le_bytes(),
        ],
        bump,
    )]
    pub payment: Box<Account<'info, Payment>>,

    /// Escrow for exactly this payment, owned by the payment PDA.
    #[account(
        init,
        payer = authority,
        seeds = [b"payment_vault", payment.key().as_ref()],
        bump,
        token::mint = accepted_mint,
        token::authority = payment,
    )]
    pub payment_vault: Box<Account<'info, TokenAccount>>,

    /// Where the purchased copy lands.
    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = token_mint,
        associated_token::authority = authority,
    )]
    pub buyer_token_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct TokenPurchased {
    pub token_mint: Pubkey,
    pub buyer: Pubkey,
    pub seller: Pubkey,
    pub paid_mint: Pubkey,
    pub price: u64,
    pub payment: Pubkey,
    pub payment_timestamp: i64,
}

pub fn handler(ctx: Context<BuyToken>, timestamp: i64) -> Result<()> {
    let token = &mut ctx.accounts.token;

    match token.seller_config.supply() {
        SupplyPolicy::Unlimited => {}
        SupplyPolicy::Limited(0) => return err!(ErrorCode::NotEnoughTokensAvailable),
        SupplyPolicy::Limited(_) => token.seller_config.exemplars -= 1,
    }

    token.transactions_info.sold = token
        .transactions_info
        .sold
        .checked_add(1)
        .ok_or(ErrorCode::NumericalOverflow)?;

    let seller = token.authority;
    let price = token.seller_config.price;
    let refund_consumed_at = timestamp
        .checked_add(token.seller_config.refund_timespan)
        .ok_or(ErrorCode::NumericalOverflow)?;

    ctx.accounts.payment.set_inner(Payment {
        token_mint: ctx.accounts.token_mint.key(),
        paid_mint: ctx.accounts.accepted_mint.key(),
        seller,
        buyer: ctx.accounts.authority.key(),
        price,
        payment_timestamp: timestamp,
        refund_consumed_at,
        bump: ctx.bumps.payment,
        bump_vault: ctx.bumps.payment_vault,
    });

    // escrow the payment in the per-purchase vault
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.buyer_transfer_vault.to_account_info(),
                to: ctx.accounts.payment_vault.to_account_info(),
                authority: ctx.accounts.authority.to_account_info(),
            },
        ),
        price,
    )?;

    let listing_seeds = &[
        b"token".as_ref(),
        ctx.accounts.token.token_mint.as_ref(),
        &[ctx.accounts.token.bumps.bump],
    ];

    // one indivisible copy to the buyer
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.token_mint.to_account_info(),
                to: ctx.accounts.buyer_token_vault.to_account_info(),
                authority: ctx.accounts.token.to_account_info(),
            },
            &[&listing_seeds[..]],
        ),
        1,
    )?;

    emit!(TokenPurchased {
        token_mint: ctx.accounts.token_mint.key(),
        buyer: ctx.accounts.authority.key(),
        seller,
        paid_mint: ctx.accounts.accepted_mint.key(),
        price,
        payment: ctx.accounts.payment.key(),
        payment_timestamp: timestamp,
    });

    msg!(
        "purchase ok: mint {} payment {}",
        ctx.accounts.token_mint.key(),
        ctx.accounts.payment.key()
    );
    Ok(())
}
