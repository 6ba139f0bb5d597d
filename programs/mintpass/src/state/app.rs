use anchor_lang::prelude::*;

/// A marketplace namespace. Every listing is created under an app, and
/// the app's authority collects `fee_basis_points` of each sale at
/// withdraw time.
#[account]
#[derive(InitSpace)]
pub struct App {
    pub authority: Pubkey,
    // 250 corresponds to a 2.5% cut
    pub fee_basis_points: u16,
    pub bump: u8,
    /// Derivation seed of this account; immutable.
    #[max_len(32)]
    pub app_name: String,
}

impl App {
    pub const MAX_NAME_LEN: usize = 32;
}
