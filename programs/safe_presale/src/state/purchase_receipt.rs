use crate::*;

/// One buyer position in a pool, keyed by the identity token used to open it.
#[account]
#[derive(InitSpace, Debug, Default)]
pub struct PurchaseReceipt {
    pub bump: u8,
    pub pool: Pubkey,
    /// Identity token (usually an NFT) this receipt is tied to
    pub original_mint: Pubkey,
    /// Wallet that opened the receipt. For statistic purpose only, claims follow the identity token
    pub buyer: Pubkey,
    /// Cumulative quote token credited to the pool through this receipt, net of buy fees
    pub amount: u64,
    /// Reward tokens claimed so far
    pub mint_claimed: u64,
    /// Lp tokens claimed so far
    pub lp_claimed: u64,
    /// Full reward token entitlement, recorded by the eligibility check
    pub mint_eligible: Option<u64>,
    /// Full lp token entitlement, recorded by the eligibility check
    pub lp_eligible: Option<u64>,
    pub last_claimed_at: Option<u64>,
    pub refunded: bool,
    pub created_at: u64,
}

impl PurchaseReceipt {
    pub fn is_initialized(&self) -> bool {
        self.pool != Pubkey::default()
    }

    pub fn initialize(
        &mut self,
        bump: u8,
        pool: Pubkey,
        original_mint: Pubkey,
        buyer: Pubkey,
        current_timestamp: u64,
    ) {
        self.bump = bump;
        self.pool = pool;
        self.original_mint = original_mint;
        self.buyer = buyer;
        self.created_at = current_timestamp;
    }

    pub fn record_mint_claim(&mut self, amount: u64, current_timestamp: u64) -> Result<()> {
        self.mint_claimed = self.mint_claimed.safe_add(amount)?;
        self.last_claimed_at = Some(current_timestamp);
        Ok(())
    }

    pub fn record_lp_claim(&mut self, amount: u64, current_timestamp: u64) -> Result<()> {
        self.lp_claimed = self.lp_claimed.safe_add(amount)?;
        self.last_claimed_at = Some(current_timestamp);
        Ok(())
    }
}
