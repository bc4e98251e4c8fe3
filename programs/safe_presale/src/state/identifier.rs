use crate::*;

/// Counter keys and random keys are derived under different prefixes and never share an address.
pub fn get_pool_seed_prefix(is_random_key: bool) -> &'static [u8] {
    if is_random_key {
        seeds::POOL_RANDOM_PREFIX
    } else {
        seeds::POOL_PREFIX
    }
}

/// Deployment wide counter used to derive pool addresses when no random key is supplied.
#[account]
#[derive(InitSpace, Debug, Default)]
pub struct Identifier {
    pub bump: u8,
    /// Key of the next pool created from this counter
    pub count: u64,
}

impl Identifier {
    pub fn initialize(&mut self, bump: u8) {
        self.bump = bump;
        self.count = 1;
    }

    /// Pool key for a new pool. A caller supplied random key takes precedence over the counter.
    pub fn get_pool_key(&self, random_key: Option<u64>) -> u64 {
        random_key.unwrap_or(self.count)
    }

    /// Advances the counter when the new pool consumed it.
    pub fn consume(&mut self, random_key: Option<u64>) -> Result<u64> {
        let pool_key = self.get_pool_key(random_key);
        if random_key.is_none() {
            self.count = self.count.safe_add(1)?;
        }
        Ok(pool_key)
    }
}
