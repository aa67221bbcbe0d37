use super::*;

#[test]
fn test_validation_functions() {
    assert!(validate::parameter(true, "test", "should pass").is_ok());
    let err = validate::parameter(false, "test", "should fail").unwrap_err();

    match err {
        Error::Parameter { name, reason } => {
            assert_eq!(name, "test");
            assert_eq!(reason, "should fail");
        }
        _ => panic!("Expected Parameter error"),
    }

    assert!(validate::below("message", 4, 5).is_ok());
    assert!(validate::below("message", 5, 5).is_err());
}

#[test]
fn test_error_display() {
    let err = Error::NoInverse {
        value: 0,
        modulus: 17,
    };
    assert_eq!(err.to_string(), "No inverse for 0 modulo 17");

    let err = Error::NoGenerator { candidates: 7 };
    assert!(err.to_string().contains("7 curve points"));

    let err = Error::param("p", "field modulus must be at least 5");
    assert_eq!(
        err.to_string(),
        "Invalid parameter 'p': field modulus must be at least 5"
    );
}

#[test]
fn test_param_accepts_owned_strings() {
    let err = Error::param("k", format!("out of range: {}", 42));
    match err {
        Error::Parameter { name, reason } => {
            assert_eq!(name, "k");
            assert_eq!(reason, "out of range: 42");
        }
        _ => panic!("Expected Parameter error"),
    }
}
