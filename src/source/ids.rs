//! UUID sources

use uuid::Uuid;
use crate::error::Result;

/// Supplier of random UUIDs
pub trait UuidSource: Send + Sync {
    /// Produce the next UUID
    fn next_uuid(&self) -> Result<Uuid>;
}

/// Version 4 UUIDs from the `uuid` crate. The default source.
#[derive(Debug, Clone, Copy, Default)]
pub struct V4Uuids;

impl UuidSource for V4Uuids {
    fn next_uuid(&self) -> Result<Uuid> {
        Ok(Uuid::new_v4())
    }
}

/// Always returns the same UUID
#[derive(Debug, Clone, Copy)]
pub struct FixedUuid(pub Uuid);

impl UuidSource for FixedUuid {
    fn next_uuid(&self) -> Result<Uuid> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v4_version() {
        let id = V4Uuids.next_uuid().unwrap();
        assert_eq!(id.get_version_num(), 4);
    }

    #[test]
    fn test_fixed_uuid() {
        let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let source = FixedUuid(id);
        assert_eq!(source.next_uuid().unwrap(), id);
        assert_eq!(source.next_uuid().unwrap(), id);
    }
}
