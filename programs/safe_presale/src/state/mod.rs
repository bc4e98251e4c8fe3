mod identifier;
pub use identifier::*;

mod pool;
pub use pool::*;

mod purchase_receipt;
pub use purchase_receipt::*;
