mod process_init_identifier;
pub use process_init_identifier::*;

mod init_pool;
pub use init_pool::*;

mod process_buy_presale;
pub use process_buy_presale::*;

mod launch_token;
pub use launch_token::*;

mod process_check_claim_eligibility;
pub use process_check_claim_eligibility::*;

mod process_claim_rewards;
pub use process_claim_rewards::*;

mod process_withdraw_lp_tokens;
pub use process_withdraw_lp_tokens::*;

mod process_claim_reward_token_for_creator;
pub use process_claim_reward_token_for_creator::*;

mod process_withdraw_position_for_creator;
pub use process_withdraw_position_for_creator::*;

mod process_cancel_pool;
pub use process_cancel_pool::*;

mod process_refund_presale;
pub use process_refund_presale::*;
