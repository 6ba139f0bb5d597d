use anchor_lang::error_code;

#[error_code]
pub enum ErrorCode {
    #[msg("The refund window for this payment has lapsed")]
    TimeForRefundHasConsumed,
    #[msg("There are no sellable units left for this listing")]
    NotEnoughTokensAvailable,
    #[msg("There are still holders with an unused token")]
    UsersStillHoldUnusedTokens,
    #[msg("These funds cannot be withdrawn until the refund window lapses")]
    CannotWithdrawYet,
    #[msg("A provided string exceeds its maximum length")]
    StringTooLong,
    #[msg("Numerical overflow")]
    NumericalOverflow,
    #[msg("Fee cannot exceed 10000 basis points")]
    IncorrectFee,
    #[msg("Price must be greater than zero")]
    IncorrectPrice,
    #[msg("Exemplars must be -1 (unlimited) or a non-negative amount")]
    IncorrectExemplars,
    #[msg("Refund timespan cannot be negative")]
    IncorrectTimespan,
    #[msg("Amount must be greater than zero")]
    IncorrectAmount,
    #[msg("The payment mint does not match the mint accepted by the seller")]
    IncorrectPaymentToken,
    #[msg("Wrong buyer token account for the payment transfer")]
    IncorrectBuyerTokenAccountOnTransfer,
    #[msg("Wrong buyer token account for the purchased token")]
    IncorrectBuyerTokenAccountToStorePurchasedToken,
    #[msg("The signer is not the authority of this listing")]
    IncorrectTokenAuthority,
    #[msg("The signer is not the right party for this payment")]
    IncorrectPaymentAuthority,
    #[msg("Wrong escrow vault for this payment")]
    IncorrectPaymentVault,
    #[msg("Wrong receiver token account")]
    IncorrectReceiverTokenAccount,
    #[msg("The app account does not match the listing's app")]
    IncorrectAppAccount,
}
