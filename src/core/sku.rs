//! SKU generation for products promoted into the shared catalog.
//!
//! Generated SKUs look like `AUTO-20250101120000-1A2B3C4D5E6F`: the prefix, a
//! UTC timestamp to the second, and 48 random bits from a v4 UUID. The random
//! tail keeps promotions within the same second apart. Uniqueness is still
//! enforced by the store.

use uuid::Uuid;

/// Prefix used when none is configured.
pub const DEFAULT_SKU_PREFIX: &str = "AUTO";

const RANDOM_SUFFIX_LEN: usize = 12;

/// Generates a new SKU with the given prefix.
///
/// A blank prefix falls back to [`DEFAULT_SKU_PREFIX`].
#[must_use]
pub fn generate_sku(prefix: &str) -> String {
    let prefix = match prefix.trim() {
        "" => DEFAULT_SKU_PREFIX.to_string(),
        p => p.to_uppercase(),
    };
    let stamp = chrono::Utc::now().format("%Y%m%d%H%M%S");
    let mut suffix = Uuid::new_v4().simple().to_string().to_uppercase();
    suffix.truncate(RANDOM_SUFFIX_LEN);
    format!("{prefix}-{stamp}-{suffix}")
}
