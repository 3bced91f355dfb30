//! Error types for catalog key parsing

/// Errors raised when a textual key does not name a known catalog dimension
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Key is not one of EV/HV/MV/LV
    #[error("unknown voltage level: '{0}'")]
    UnknownVoltage(String),

    /// Key is not one of switchgear/transformer/cable/RMU
    #[error("unknown equipment class: '{0}'")]
    UnknownEquipmentClass(String),

    /// Key is not a voltage-prefixed equipment key such as `lvSwgr`
    #[error("unknown equipment pair: '{0}'")]
    UnknownPair(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_error_display() {
        let err = CatalogError::UnknownVoltage("XV".to_string());
        assert_eq!(err.to_string(), "unknown voltage level: 'XV'");

        let err = CatalogError::UnknownPair("lvFoo".to_string());
        assert!(err.to_string().contains("lvFoo"));
    }
}
