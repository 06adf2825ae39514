//! Cost model: pricing tier transitions and compression savings.
//!
//! Pure functions over a fixed per-gigabyte-per-month rate table. Rates
//! decrease monotonically `Hot > Cool > Archive > deleted = 0`, so every
//! forward transition and every deletion yields a non-negative saving.

use crate::catalog::StorageTier;

/// Per-GB-per-month storage rates, USD.
pub const HOT_RATE: f64 = 0.0184;
pub const COOL_RATE: f64 = 0.0100;
pub const ARCHIVE_RATE: f64 = 0.00099;

/// Assumed size reduction for compressible content.
pub const COMPRESSION_RATIO: f64 = 0.30;

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Monthly rate for a tier; `None` is the virtual "deleted" tier at zero.
pub fn monthly_rate(tier: Option<StorageTier>) -> f64 {
    match tier {
        Some(StorageTier::Hot) => HOT_RATE,
        Some(StorageTier::Cool) => COOL_RATE,
        Some(StorageTier::Archive) => ARCHIVE_RATE,
        None => 0.0,
    }
}

/// Monthly saving from moving `size_bytes` from one tier to another
/// (`None` = deleted). Linear in size; zero bytes cost nothing.
pub fn tier_delta(size_bytes: u64, from: Option<StorageTier>, to: Option<StorageTier>) -> f64 {
    let size_gb = size_bytes as f64 / BYTES_PER_GB;
    (monthly_rate(from) - monthly_rate(to)) * size_gb
}

/// Projected monthly saving from compressing a `size_bytes` object.
///
/// Assumes the fixed compression ratio and prices the freed bytes at the Hot
/// rate, since compression candidates are flagged while sitting in Hot
/// storage.
pub fn compression_saving(size_bytes: u64) -> f64 {
    let freed_gb = size_bytes as f64 * COMPRESSION_RATIO / BYTES_PER_GB;
    freed_gb * HOT_RATE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_tier_costs_nothing() {
        for tier in [
            None,
            Some(StorageTier::Hot),
            Some(StorageTier::Cool),
            Some(StorageTier::Archive),
        ] {
            assert_eq!(tier_delta(1 << 30, tier, tier), 0.0);
        }
    }

    #[test]
    fn test_forward_transitions_save_money() {
        let size = 10 * (1u64 << 30);
        assert!(tier_delta(size, Some(StorageTier::Hot), Some(StorageTier::Cool)) > 0.0);
        assert!(tier_delta(size, Some(StorageTier::Cool), Some(StorageTier::Archive)) > 0.0);
        assert!(tier_delta(size, Some(StorageTier::Archive), None) > 0.0);
    }

    #[test]
    fn test_linear_in_size() {
        let one = tier_delta(1 << 30, Some(StorageTier::Hot), Some(StorageTier::Cool));
        let two = tier_delta(2 << 30, Some(StorageTier::Hot), Some(StorageTier::Cool));
        assert!((two - 2.0 * one).abs() < 1e-12);
    }

    #[test]
    fn test_zero_bytes_zero_delta() {
        assert_eq!(tier_delta(0, Some(StorageTier::Hot), None), 0.0);
        assert_eq!(compression_saving(0), 0.0);
    }

    #[test]
    fn test_hot_to_deleted_prices_full_rate() {
        let delta = tier_delta(1 << 30, Some(StorageTier::Hot), None);
        assert!((delta - HOT_RATE).abs() < 1e-12);
    }

    #[test]
    fn test_compression_saving_two_megabytes() {
        let size = 2 * 1024 * 1024;
        let expected = (size as f64 * 0.3 / (1024.0 * 1024.0 * 1024.0)) * HOT_RATE;
        assert!((compression_saving(size) - expected).abs() < 1e-15);
    }
}
