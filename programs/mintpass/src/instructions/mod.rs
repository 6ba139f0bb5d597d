pub mod buy_token;
pub mod create_app;
pub mod create_token;
pub mod delete_token;
pub mod edit_token_price;
pub mod refund;
pub mod share_token;
pub mod use_token;
pub mod withdraw_funds;

pub use buy_token::*;
pub use create_app::*;
pub use create_token::*;
pub use delete_token::*;
pub use edit_token_price::*;
pub use refund::*;
pub use share_token::*;
pub use use_token::*;
pub use withdraw_funds::*;
