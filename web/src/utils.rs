/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes(core::array::from_fn(|_| (256. * random()) as u8))
}

/// Zero-padded three digit counter, saturating at 999.
pub(crate) fn format_for_counter(value: u32) -> String {
    format!("{:03}", value.min(999))
}
