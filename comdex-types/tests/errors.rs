use comdex_types::{Capability, IndexError};

#[test]
fn display_unsupported() {
    let e = IndexError::unsupported(Capability::BarHistory.to_string());
    assert_eq!(e.to_string(), "unsupported capability: bar-history");
}

#[test]
fn display_invalid_arg_names_value() {
    let e = IndexError::invalid_arg("unrecognized keyword '不存在'");
    assert_eq!(e.to_string(), "invalid argument: unrecognized keyword '不存在'");
}

#[test]
fn display_connector_tagged() {
    let e = IndexError::connector("comdex-mock", "boom");
    assert_eq!(e.to_string(), "comdex-mock failed: boom");
}

#[test]
fn display_not_found() {
    let e = IndexError::not_found("instruments for 铜");
    assert_eq!(e.to_string(), "not found: instruments for 铜");
}

#[test]
fn error_serde_round_trip() {
    let e = IndexError::invalid_arg("unsupported frequency '2d'");
    let json = serde_json::to_string(&e).unwrap();
    let back: IndexError = serde_json::from_str(&json).unwrap();
    assert_eq!(back, e);
}
