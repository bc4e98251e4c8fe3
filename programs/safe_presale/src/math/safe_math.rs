use crate::errors::PresaleError;
use anchor_lang::solana_program::msg;
use std::panic::Location;

pub trait SafeMath<T>: Sized {
    fn safe_add(self, rhs: Self) -> Result<Self, PresaleError>;
    fn safe_mul(self, rhs: Self) -> Result<Self, PresaleError>;
    fn safe_div(self, rhs: Self) -> Result<Self, PresaleError>;
    fn safe_sub(self, rhs: Self) -> Result<Self, PresaleError>;
    fn safe_shl(self, offset: T) -> Result<Self, PresaleError>;
    fn safe_shr(self, offset: T) -> Result<Self, PresaleError>;
}

#[track_caller]
fn checked<V>(value: Option<V>) -> Result<V, PresaleError> {
    match value {
        Some(result) => Ok(result),
        None => {
            let caller = Location::caller();
            msg!("Math error thrown at {}:{}", caller.file(), caller.line());
            Err(PresaleError::MathOverflow)
        }
    }
}

macro_rules! checked_impl {
    ($t:ty, $offset:ty) => {
        impl SafeMath<$offset> for $t {
            #[track_caller]
            fn safe_add(self, v: $t) -> Result<$t, PresaleError> {
                checked(self.checked_add(v))
            }

            #[track_caller]
            fn safe_sub(self, v: $t) -> Result<$t, PresaleError> {
                checked(self.checked_sub(v))
            }

            #[track_caller]
            fn safe_mul(self, v: $t) -> Result<$t, PresaleError> {
                checked(self.checked_mul(v))
            }

            #[track_caller]
            fn safe_div(self, v: $t) -> Result<$t, PresaleError> {
                checked(self.checked_div(v))
            }

            #[track_caller]
            fn safe_shl(self, v: $offset) -> Result<$t, PresaleError> {
                checked(self.checked_shl(v))
            }

            #[track_caller]
            fn safe_shr(self, v: $offset) -> Result<$t, PresaleError> {
                checked(self.checked_shr(v))
            }
        }
    };
}

checked_impl!(u16, u32);
checked_impl!(i32, u32);
checked_impl!(u32, u32);
checked_impl!(u64, u32);
checked_impl!(i64, u32);
checked_impl!(u128, u32);

pub trait SafeCast<T>: Sized {
    fn safe_cast(self) -> Result<T, PresaleError>;
}

macro_rules! try_into_impl {
    ($t:ty, $v:ty) => {
        impl SafeCast<$v> for $t {
            #[track_caller]
            fn safe_cast(self) -> Result<$v, PresaleError> {
                checked(self.try_into().ok())
            }
        }
    };
}

try_into_impl!(u128, u64);
try_into_impl!(i64, u64);
try_into_impl!(u64, i64);
try_into_impl!(usize, u32);

/// Converts a wide intermediate back into `u128`, failing on truncation.
#[track_caller]
pub fn u256_to_u128(value: U256) -> Result<u128, PresaleError> {
    checked((value <= U256::from(u128::MAX)).then(|| value.as_u128()))
}

uint::construct_uint! {
    pub struct U256(4);
}
