//! Cache key generators for consistent key naming.

/// Literal prefix for order cache entries. Part of the wire contract with
/// any other consumer of the cache.
const ORDER_KEY_PREFIX: &str = "order-id-";

/// Generates the cache key for an order by its identifier string.
///
/// The identifier is used verbatim: lookups probe the cache before the
/// identifier's format is validated.
#[must_use]
pub fn order_by_id(id: &str) -> String {
    format!("{ORDER_KEY_PREFIX}{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_key_uses_literal_prefix() {
        let key = order_by_id("65a1b2c3d4e5f6a7b8c9d0e1");
        assert_eq!(key, "order-id-65a1b2c3d4e5f6a7b8c9d0e1");
    }

    #[test]
    fn test_order_key_passes_raw_id_through() {
        // Malformed identifiers still get a key; the cache probe happens
        // before format validation.
        assert_eq!(order_by_id("not-hex"), "order-id-not-hex");
    }
}
