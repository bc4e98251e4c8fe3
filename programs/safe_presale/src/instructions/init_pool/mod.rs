mod params;
pub use params::*;

mod process_init_pool;
pub use process_init_pool::*;

mod process_create_metaplex_metadata;

mod process_mint;
