// ID Provider Port (for deterministic testing)

/// ID provider interface for adapters that assign ids themselves
pub trait IdProvider: Send + Sync {
    /// Generate a new unique listing ID
    fn generate_id(&self) -> String;
}

/// Random provider producing 24 hex chars, the same shape as store-native ids
pub struct HexIdProvider;

impl IdProvider for HexIdProvider {
    fn generate_id(&self) -> String {
        let mut hex = uuid::Uuid::new_v4().simple().to_string();
        hex.truncate(24);
        hex
    }
}
