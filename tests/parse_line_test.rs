use pretty_assertions::assert_eq;
use tmplparse::{
    config::{self, Config},
    parse_line, LineError, LineParser, Template, TokenKind, TypedValue,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn mov64() -> Template {
    Config::default()
        .template(config::DEFAULT_TEMPLATE)
        .unwrap()
        .clone()
}

#[test]
fn it_parses_register_move() {
    let (objects, success, message) = parse_line("mov64 r10 r11", &mov64()).into_parts();
    assert!(success);
    assert_eq!(message, "");
    assert_eq!(
        objects,
        vec![
            TypedValue::string(TokenKind::Identifier, "mov64", ""),
            TypedValue::integer(TokenKind::Register, 0x10, ""),
            TypedValue::integer(TokenKind::Register, 0x11, ""),
        ]
    );
}

#[test]
fn it_rejects_names_in_register_slots() {
    let (objects, success, message) = parse_line("mov64 bob alice", &mov64()).into_parts();
    assert!(!success);
    assert_eq!(
        message,
        "Expected type (6)Register but got type (0)Identifier: Expected a destination register"
    );
    let kinds: Vec<_> = objects.iter().map(|o| o.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Identifier]
    );
}

#[test]
fn it_reports_comment_only_line_as_empty() {
    let parsed = parse_line("; only a comment", &mov64());
    assert_eq!(parsed.clone().into_result(), Err(LineError::EmptyInput));
    assert!(parsed.objects.is_empty());
}

#[test]
fn it_drops_objects_on_length_mismatch() {
    let parsed = parse_line("mov64 r1", &mov64());
    assert_eq!(
        parsed.error,
        Some(LineError::LengthMismatch {
            objects: 2,
            template: 3
        })
    );
    assert!(parsed.objects.is_empty());

    let parsed = parse_line("mov64 r1 r2 r3", &mov64());
    assert!(matches!(parsed.error, Some(LineError::LengthMismatch { .. })));
}

#[test]
fn it_stops_at_first_invalid_number() {
    // The bare `r` fails; `zz` after it would otherwise be an identifier.
    let parsed = parse_line("mov64 r zz", &mov64());
    assert_eq!(parsed.error_message(), "Invalid number");
    assert_eq!(parsed.objects.len(), 2);
    assert_eq!(parsed.objects[1].get_integer(), Ok(0));
    assert!(!parsed.objects[1].descriptor().is_empty());
}

#[test]
fn it_keeps_register_text_to_hex_digits() {
    let template = Template::new()
        .expect(TokenKind::Register, "register")
        .expect(TokenKind::Identifier, "suffix");
    let parsed = parse_line("r2fxy", &template);
    assert!(parsed.is_success());
    assert_eq!(parsed.objects[0].get_integer(), Ok(0x2f));
    assert_eq!(parsed.objects[1].get_string(), Ok("xy"));
}

#[test]
fn it_parses_lines_with_configured_templates() {
    let config: Config = config::from_str(
        r#"{
            "parser": {"comment_delimiter": "!"},
            "templates": {
                "ld": [
                    {"expected_kind": "Identifier", "error_label": "Expected an opcode"},
                    {"expected_kind": "Register", "error_label": "Expected a register"},
                    {"expected_kind": "Uint16", "error_label": "Expected an address"}
                ]
            }
        }"#,
    )
    .unwrap();
    let parser = LineParser::new(config.parser.clone());
    let template = config.template("ld").unwrap();

    let parsed = parser.parse_line("LD R3 0FF0 ! load", template);
    assert!(parsed.is_success());
    assert_eq!(parsed.objects[2].get_integer(), Ok(0x0ff0));

    let parsed = parser.parse_line("ld r3 12", template);
    assert_eq!(
        parsed.error_message(),
        "Expected type (4)Uint16 but got type (5)Uint8: Expected an address"
    );
}

#[test]
fn it_validates_against_empty_template() {
    let parsed = parse_line("nop", &Template::new());
    assert!(matches!(parsed.error, Some(LineError::LengthMismatch { .. })));
}
