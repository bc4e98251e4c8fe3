mod fixtures;
pub use fixtures::*;

mod mock_venue;
pub use mock_venue::*;

mod commons;
pub use commons::*;

mod pda;
pub use pda::*;

pub use litesvm_ext::*;

mod token;
pub use token::*;

mod process_init_identifier;
pub use process_init_identifier::*;

mod process_init_pool;
pub use process_init_pool::*;

mod process_buy_presale;
pub use process_buy_presale::*;

mod process_cancel_pool;
pub use process_cancel_pool::*;

mod process_refund_presale;
pub use process_refund_presale::*;

mod process_claim_rewards;
pub use process_claim_rewards::*;
