macro_rules! pool_seeds {
    ($seed_prefix:expr, $pool_key_bytes:expr, $bump:expr) => {
        &[
            $seed_prefix,
            $pool_key_bytes.as_ref(),
            $bump.as_ref(),
        ]
    };
}
