use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

use crate::errors::ErrorCode;
use crate::state::{
    App, ListingBumps, MintMetadata, SellerConfig, TokenListing, TransactionsInfo,
};

#[derive(Accounts)]
#[instruction(off_chain_id: String)]
pub struct CreateToken<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [b"app", app.app_name.as_bytes()],
        bump = app.bump,
    )]
    pub app: Account<'info, App>,

    /// Reward mint. Zero decimals so units are indivisible copies; the
    /// supply authority is the listing PDA itself.
    #[account(
        init,
        payer = authority,
        mint::decimals = 0,
        mint::authority = token,
        seeds = [b"token_mint", off_chain_id.as_bytes()],
        bump,
    )]
    pub token_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = authority,
        space = 8 + TokenListing::INIT_SPACE,
        seeds = [b"token", token_mint.key().as_ref()],
        bump,
    )]
    pub token: Box<Account<'info, TokenListing>>,

    #[account(
        init,
        payer = authority,
        space = 8 + MintMetadata::INIT_SPACE,
        seeds = [b"metadata", token_mint.key().as_ref()],
        bump,
    )]
    pub metadata: Box<Account<'info, MintMetadata>>,

    /// Payment currency the seller accepts.
    pub accepted_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[allow(clippy::too_many_arguments)]
pub fn handler(
    ctx: Context<CreateToken>,
    off_chain_id: String,
    off_chain_id_ext: String,
    off_chain_metadata: String,
    refund_timespan: i64,
    token_price: u64,
    exemplars: i64,
    token_name: String,
    token_symbol: String,
    token_uri: String,
) -> Result<()> {
    require!(
        !off_chain_id.is_empty() && off_chain_id.len() <= 32,
        ErrorCode::StringTooLong
    );
    require!(off_chain_id_ext.len() <= 32, ErrorCode::StringTooLong);
    require!(off_chain_metadata.len() <= 64, ErrorCode::StringTooLong);
    require!(
        token_name.len() <= MintMetadata::MAX_NAME_LEN
            && token_symbol.len() <= MintMetadata::MAX_SYMBOL_LEN
            && token_uri.len() <= MintMetadata::MAX_URI_LEN,
        ErrorCode::StringTooLong
    );
    require!(token_price > 0, ErrorCode::IncorrectPrice);
    require!(exemplars >= -1, ErrorCode::IncorrectExemplars);
    require!(refund_timespan >= 0, ErrorCode::IncorrectTimespan);

    ctx.accounts.token.set_inner(TokenListing {
        app: ctx.accounts.app.key(),
        authority: ctx.accounts.authority.key(),
        token_mint: ctx.accounts.token_mint.key(),
        seller_config: SellerConfig {
            accepted_mint: ctx.accounts.accepted_mint.key(),
            price: token_price,
            exemplars,
            refund_timespan,
        },
        transactions_info: TransactionsInfo::default(),
        bumps: ListingBumps {
            bump: ctx.bumps.token,
            mint_bump: ctx.bumps.token_mint,
            metadata_bump: ctx.bumps.metadata,
        },
        off_chain_id,
        off_chain_id_ext,
        off_chain_metadata,
    });

    ctx.accounts.metadata.set_inner(MintMetadata {
        token_mint: ctx.accounts.token_mint.key(),
        update_authority: ctx.accounts.token.key(),
        bump: ctx.bumps.metadata,
        name: token_name,
        symbol: token_symbol,
        uri: token_uri,
    });

    msg!("token listed: mint {}", ctx.accounts.token_mint.key());
    Ok(())
}
