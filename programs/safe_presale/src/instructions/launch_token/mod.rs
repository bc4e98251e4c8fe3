mod process_launch_token_amm;
pub use process_launch_token_amm::*;

mod process_launch_token_clmm;
pub use process_launch_token_clmm::*;

mod process_settle_launch;
