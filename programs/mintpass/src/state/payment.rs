use anchor_lang::prelude::*;

/// One purchase's escrowed funds and refund eligibility.
///
/// Settlement is at-most-once by construction: withdraw and refund both
/// close this account together with its vault, so whichever lands first
/// consumes the pair and the other can no longer resolve the address.
#[account]
#[derive(InitSpace)]
pub struct Payment {
    pub token_mint: Pubkey,
    /// Captured at purchase time; listing edits never touch an open
    /// payment.
    pub paid_mint: Pubkey,
    pub seller: Pubkey,
    pub buyer: Pubkey,
    pub price: u64,
    /// Caller-chosen; also a seed of this account, which lets one buyer
    /// hold several open payments for the same token.
    pub payment_timestamp: i64,
    pub refund_consumed_at: i64,
    pub bump: u8,
    pub bump_vault: u8,
}
