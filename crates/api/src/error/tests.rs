use super::*;

#[test]
fn test_validation_functions() {
    assert!(validate::parameter(true, "test", "should pass").is_ok());
    let err = validate::parameter(false, "test", "should fail").unwrap_err();

    match err {
        Error::InvalidArgument { context, message } => {
            assert_eq!(context, "test");
            assert_eq!(message, "should fail");
        }
        _ => panic!("Expected InvalidArgument error"),
    }

    assert!(validate::same_structure("field", &3u32, &3u32).is_ok());
    assert!(matches!(
        validate::same_structure("field", &3u32, &4u32),
        Err(Error::InvalidArgument { context: "field", .. })
    ));

    assert!(matches!(
        validate::representation(false, "point", "missing z"),
        Err(Error::Serialization { context: "point", .. })
    ));
}

#[test]
fn test_context_and_message() {
    let err = Error::invalid("old", "bad").with_context("new");
    assert_eq!(err, Error::invalid("new", "bad"));

    let err = Error::Exhausted { context: "search", attempts: 3 }.with_message("ignored");
    assert_eq!(err, Error::Exhausted { context: "search", attempts: 3 });

    let res: core::result::Result<(), Error> = Err(Error::serialization("a", "x"));
    assert_eq!(
        res.with_message("y"),
        Err(Error::serialization("a", "y"))
    );
}

#[test]
fn test_option_exhausted() {
    let found: Option<u8> = None;
    assert_eq!(
        found.or_exhausted("hash to curve", 256),
        Err(Error::Exhausted { context: "hash to curve", attempts: 256 })
    );
    assert_eq!(Some(1u8).or_exhausted("hash to curve", 256), Ok(1));
}

#[test]
fn test_display() {
    let err = Error::Unsupported {
        operation: "hash into GT",
        reason: "embedding degree is greater than one",
    };
    assert_eq!(
        err.to_string(),
        "hash into GT is not supported: embedding degree is greater than one"
    );
    assert_eq!(
        Error::Exhausted { context: "b search", attempts: 10 }.to_string(),
        "b search: no result after 10 attempts"
    );
}

#[test]
fn test_parse_error_conversion() {
    let parsed: core::result::Result<num_bigint::BigUint, _> = "12x".parse();
    let err: Error = parsed.unwrap_err().into();
    assert!(matches!(err, Error::Serialization { context: "integer parsing", .. }));
}
