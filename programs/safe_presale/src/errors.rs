use crate::*;

#[error_code]
#[derive(PartialEq)]
pub enum PresaleError {
    #[msg("Invalid pool configuration")]
    InvalidConfig,

    #[msg("Pool already exists")]
    DuplicatePool,

    #[msg("Pool is not open for purchase")]
    PoolNotOpen,

    #[msg("Presale window has closed")]
    WindowClosed,

    #[msg("Identity token is not a member of an allowed collection")]
    NotCollectionMember,

    #[msg("Signer must own the identity token")]
    NotOwner,

    #[msg("Purchase would exceed the presale target")]
    PresaleTargetExceeded,

    #[msg("Purchase would exceed the per buyer cap")]
    PerBuyerCapExceeded,

    #[msg("Signer is not the pool authority")]
    NotAuthority,

    #[msg("Token already launched")]
    AlreadyLaunched,

    #[msg("Presale target not reached")]
    TargetNotReached,

    #[msg("Liquidity venue failed to launch the token")]
    LaunchVenueFailure,

    #[msg("Token not launched")]
    NotLaunched,

    #[msg("Vesting not started")]
    VestingNotStarted,

    #[msg("Vesting period not ended")]
    VestingNotEnded,

    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Signer does not own the purchase receipt")]
    NotReceiptOwner,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Zero amount")]
    ZeroAmount,

    #[msg("Invalid pool")]
    InvalidPool,

    #[msg("Invalid reward mint")]
    InvalidRewardMint,

    #[msg("Invalid quote mint")]
    InvalidQuoteMint,

    #[msg("Invalid lp mint")]
    InvalidLpMint,

    #[msg("Invalid mint metadata")]
    InvalidMintMetadata,

    #[msg("Invalid fee collector")]
    InvalidFeeCollector,

    #[msg("The pool expired because the creator failed to launch it within the grace period")]
    PoolExpired,

    #[msg("Refund is not available")]
    RefundNotAvailable,

    #[msg("Purchase already refunded")]
    AlreadyRefunded,

    #[msg("Lp tokens are not distributable for this launch strategy")]
    LpTokensNotDistributable,

    #[msg("Invalid liquidity venue accounts")]
    InvalidVenueAccounts,

    #[msg("Invalid tick spacing")]
    InvalidTickSpacing,

    #[msg("Price out of range")]
    PriceOutOfRange,

    #[msg("Invalid launch strategy")]
    InvalidLaunchStrategy,
}
