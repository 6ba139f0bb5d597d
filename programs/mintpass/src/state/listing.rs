use anchor_lang::prelude::*;

/// Sale configuration and running counters for one tokenized item.
///
/// The listing PDA is the supply authority of its reward mint, so every
/// mint and burn of copies flows through this program.
#[account]
#[derive(InitSpace)]
pub struct TokenListing {
    pub app: Pubkey,
    pub authority: Pubkey,
    pub token_mint: Pubkey,
    pub seller_config: SellerConfig,
    pub transactions_info: TransactionsInfo,
    pub bumps: ListingBumps,
    /// Opaque external content id, seed of the reward mint; unique per
    /// listing.
    #[max_len(32)]
    pub off_chain_id: String,
    /// Continuation segment for external ids longer than 32 bytes
    /// (IPFS CIDs are 64); empty when unused.
    #[max_len(32)]
    pub off_chain_id_ext: String,
    #[max_len(64)]
    pub off_chain_metadata: String,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, InitSpace)]
pub struct SellerConfig {
    pub accepted_mint: Pubkey,
    /// In the smallest unit of `accepted_mint`.
    pub price: u64,
    // -1 means unlimited sale, otherwise remaining sellable units
    pub exemplars: i64,
    /// Seconds after purchase during which the buyer may refund.
    pub refund_timespan: i64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, InitSpace)]
pub struct TransactionsInfo {
    pub sold: u32,
    pub used: u32,
    pub shared: u32,
    pub refunded: u32,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, InitSpace)]
pub struct ListingBumps {
    pub bump: u8,
    pub mint_bump: u8,
    pub metadata_bump: u8,
}

/// Typed view over the stored `exemplars` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyPolicy {
    Unlimited,
    Limited(u64),
}

impl SellerConfig {
    pub fn supply(&self) -> SupplyPolicy {
        if self.exemplars < 0 {
            SupplyPolicy::Unlimited
        } else {
            SupplyPolicy::Limited(self.exemplars as u64)
        }
    }
}

impl TransactionsInfo {
    /// Reward units currently sitting in holder wallets.
    pub fn outstanding_units(&self) -> u64 {
        (self.sold as u64 + self.shared as u64).saturating_sub(self.used as u64)
    }
}
