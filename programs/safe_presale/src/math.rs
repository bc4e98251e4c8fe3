mod safe_math;
pub use safe_math::*;

mod fee_math;
pub use fee_math::*;

mod vesting_math;
pub use vesting_math::*;

mod tick_math;
pub use tick_math::*;

mod liquidity_math;
pub use liquidity_math::*;
