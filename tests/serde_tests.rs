#[cfg(feature = "serde")]
mod serde_tests {
    use minifake::{Dialect, MinifakeError, Options, PatternError, PatternErrorKind};

    #[test]
    #[ntest::timeout(100)]
    fn test_options_serialization() {
        let options = Options::new().with_symbol('*');
        let serialized = serde_json::to_string(&options).unwrap();
        assert_eq!(serialized, r#"{"symbol":"*"}"#);

        let deserialized: Options = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, options);
    }

    #[test]
    #[ntest::timeout(100)]
    fn test_options_default_when_fields_missing() {
        let deserialized: Options = serde_json::from_str("{}").unwrap();
        assert_eq!(deserialized, Options::default());
        assert_eq!(deserialized.symbol, '#');
    }

    #[test]
    #[ntest::timeout(100)]
    fn test_dialect_serialization() {
        let serialized = serde_json::to_string(&Dialect::CreditCard).unwrap();
        assert_eq!(serialized, r#""CreditCard""#);

        let deserialized: Dialect = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, Dialect::CreditCard);
    }

    #[test]
    #[ntest::timeout(100)]
    fn test_error_serialization() {
        let error = MinifakeError::InvalidPattern(PatternError {
            column: 3,
            kind: PatternErrorKind::InvertedRepeat { min: 9, max: 2 },
        });

        let serialized = serde_json::to_string(&error).unwrap();
        let deserialized: MinifakeError = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, error);
    }
}
