use crate::*;
use anchor_lang::system_program;
use anchor_spl::token_interface::{
    self, Burn, CloseAccount, Mint, MintTo, SyncNative, TokenAccount, TokenInterface, TransferChecked,
};

pub fn transfer_from_user<'info>(
    authority: &Signer<'info>,
    token_mint: &InterfaceAccount<'info, Mint>,
    token_owner_account: &InterfaceAccount<'info, TokenAccount>,
    destination_token_account: &InterfaceAccount<'info, TokenAccount>,
    token_program: &Interface<'info, TokenInterface>,
    amount: u64,
) -> Result<()> {
    token_interface::transfer_checked(
        CpiContext::new(
            token_program.to_account_info(),
            TransferChecked {
                from: token_owner_account.to_account_info(),
                mint: token_mint.to_account_info(),
                to: destination_token_account.to_account_info(),
                authority: authority.to_account_info(),
            },
        ),
        amount,
        token_mint.decimals,
    )
}

/// Transfers out of a vault owned by the pool pda.
pub fn transfer_from_pool<'info>(
    pool: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    token_mint: &InterfaceAccount<'info, Mint>,
    token_vault: AccountInfo<'info>,
    destination_token_account: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            token_program,
            TransferChecked {
                from: token_vault,
                mint: token_mint.to_account_info(),
                to: destination_token_account,
                authority: pool,
            },
            signer_seeds,
        ),
        amount,
        token_mint.decimals,
    )
}

/// Moves lamports into a wrapped SOL token account and syncs its token balance.
pub fn wrap_native<'info>(
    payer: &Signer<'info>,
    native_token_account: &InterfaceAccount<'info, TokenAccount>,
    system_program: &Program<'info, System>,
    token_program: &Interface<'info, TokenInterface>,
    amount: u64,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(
            system_program.to_account_info(),
            system_program::Transfer {
                from: payer.to_account_info(),
                to: native_token_account.to_account_info(),
            },
        ),
        amount,
    )?;

    token_interface::sync_native(CpiContext::new(
        token_program.to_account_info(),
        SyncNative {
            account: native_token_account.to_account_info(),
        },
    ))
}

/// Closes a wrapped SOL token account of `owner`, returning its whole balance as lamports.
pub fn unwrap_native<'info>(
    owner: &Signer<'info>,
    native_token_account: &InterfaceAccount<'info, TokenAccount>,
    token_program: &Interface<'info, TokenInterface>,
) -> Result<()> {
    token_interface::close_account(CpiContext::new(
        token_program.to_account_info(),
        CloseAccount {
            account: native_token_account.to_account_info(),
            destination: owner.to_account_info(),
            authority: owner.to_account_info(),
        },
    ))
}

pub fn mint_to_pool<'info>(
    pool: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    mint: AccountInfo<'info>,
    token_vault: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    token_interface::mint_to(
        CpiContext::new_with_signer(
            token_program,
            MintTo {
                mint,
                to: token_vault,
                authority: pool,
            },
            signer_seeds,
        ),
        amount,
    )
}

pub fn burn_from_pool<'info>(
    pool: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    mint: AccountInfo<'info>,
    token_vault: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    token_interface::burn(
        CpiContext::new_with_signer(
            token_program,
            Burn {
                mint,
                from: token_vault,
                authority: pool,
            },
            signer_seeds,
        ),
        amount,
    )
}
