use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::state::App;

#[derive(Accounts)]
#[instruction(app_name: String)]
pub struct CreateApp<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + App::INIT_SPACE,
        seeds = [b"app", app_name.as_bytes()],
        bump,
    )]
    pub app: Account<'info, App>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

impl<'info> CreateApp<'info> {
    pub fn init(
        &mut self,
        app_name: String,
        fee_basis_points: u16,
        bumps: &CreateAppBumps,
    ) -> Result<()> {
        require!(app_name.len() <= App::MAX_NAME_LEN, ErrorCode::StringTooLong);
        require!(fee_basis_points <= 10_000, ErrorCode::IncorrectFee);

        self.app.set_inner(App {
            authority: self.authority.key(),
            fee_basis_points,
            bump: bumps.app,
            app_name,
        });
        Ok(())
    }
}
