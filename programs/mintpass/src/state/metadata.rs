use anchor_lang::prelude::*;

/// Descriptive record attached to a reward mint. Created once per
/// listing and closed with it.
#[account]
#[derive(InitSpace)]
pub struct MintMetadata {
    pub token_mint: Pubkey,
    /// The listing PDA.
    pub update_authority: Pubkey,
    pub bump: u8,
    #[max_len(32)]
    pub name: String,
    #[max_len(10)]
    pub symbol: String,
    #[max_len(200)]
    pub uri: String,
}

impl MintMetadata {
    pub const MAX_NAME_LEN: usize = 32;
    pub const MAX_SYMBOL_LEN: usize = 10;
    pub const MAX_URI_LEN: usize = 200;
}
