//! Memo identifier helpers.
//!
//! Memo IDs are opaque strings at the domain boundary so that records from
//! other stores (which may use any ID scheme) can be carried through an
//! import. The PostgreSQL store itself issues UUIDv7 values.

use uuid::Uuid;

/// Generate a new UUIDv7 identifier.
///
/// UUIDv7 embeds a millisecond Unix timestamp in its first 48 bits, so IDs
/// sort in creation order.
///
/// # Example
///
/// ```
/// use memo_core::ids::new_v7;
///
/// let a = new_v7();
/// let b = new_v7();
/// assert!(a < b);
/// ```
#[inline]
pub fn new_v7() -> Uuid {
    Uuid::now_v7()
}

/// Parse a memo ID issued by the PostgreSQL store.
///
/// Returns `None` for IDs from other schemes, e.g. the millisecond
/// timestamps a browser-side store hands out.
pub fn parse_store_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_v7_is_version_7() {
        assert_eq!(new_v7().get_version_num(), 7);
    }

    #[test]
    fn test_parse_store_id_roundtrips_generated_ids() {
        let id = new_v7();
        assert_eq!(parse_store_id(&id.to_string()), Some(id));
    }

    #[test]
    fn test_parse_store_id_rejects_foreign_ids() {
        assert_eq!(parse_store_id("1"), None);
        assert_eq!(parse_store_id("1712345678901"), None);
        assert_eq!(parse_store_id(""), None);
    }
}
