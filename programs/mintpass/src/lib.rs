pub mod errors;
pub mod state;
mod instructions;
mod utils;

use {
    anchor_lang::prelude::*,
    instructions::*,
};

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod mintpass {
    use super::*;

    /// Registers a marketplace namespace with its fee policy.
    pub fn create_app(
        ctx: Context<CreateApp>,
        app_name: String,
        fee_basis_points: u16,
    ) -> Result<()> {
        ctx.accounts.init(app_name, fee_basis_points, &ctx.bumps)
    }

    /// Lists an item for sale: creates the zero-decimal reward mint, the
    /// listing record and the mint's descriptive record.
    pub fn create_token(
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
        instructions::create_token::handler(
            ctx,
            off_chain_id,
            off_chain_id_ext,
            off_chain_metadata,
            refund_timespan,
            token_price,
            exemplars,
            token_name,
            token_symbol,
            token_uri,
        )
    }

    pub fn edit_token_price(ctx: Context<EditTokenPrice>, token_price: u64) -> Result<()> {
        instructions::edit_token_price::handler(ctx, token_price)
    }

    /// Purchases one copy: escrows the price in a per-payment vault and
    /// mints a reward unit to the buyer. The caller-chosen timestamp is
    /// part of the payment address, so concurrent purchases by the same
    /// buyer need distinct timestamps.
    pub fn buy_token(ctx: Context<BuyToken>, timestamp: i64) -> Result<()> {
        instructions::buy_token::handler(ctx, timestamp)
    }

    /// Consumes one copy held by the caller.
    pub fn use_token(ctx: Context<UseToken>) -> Result<()> {
        instructions::use_token::handler(ctx)
    }

    /// Seller gifts copies to an arbitrary receiver, bypassing payment.
    pub fn share_token(ctx: Context<ShareToken>, exemplars: u32) -> Result<()> {
        instructions::share_token::handler(ctx, exemplars)
    }

    /// Seller collects an escrowed payment once its refund window has
    /// lapsed; the app owner gets its basis-point cut.
    pub fn withdraw_funds(ctx: Context<WithdrawFunds>) -> Result<()> {
        instructions::withdraw_funds::handler(ctx)
    }

    /// Buyer reverses a purchase inside the refund window, returning the
    /// reward unit in exchange for the escrowed funds.
    pub fn refund(ctx: Context<Refund>) -> Result<()> {
        instructions::refund::handler(ctx)
    }

    pub fn delete_token(ctx: Context<DeleteToken>) -> Result<()> {
        instructions::delete_token::handler(ctx)
    }
}
