//! Integration tests for the formatting pipeline
//!
//! These go through the public API only: `format`, `print`, `Template`,
//! `TemplateCache` and the `formatted!` macro.

use std::io;

use pretty_assertions::assert_eq;

use brace_fmt::{
    format, format_with_options, formatted, print, ConfigError, FormatError, RenderOptions,
    Template, TemplateCache, TemplateError,
};

fn template_error(result: Result<String, FormatError>) -> TemplateError {
    match result {
        Err(FormatError::Template(e)) => e,
        other => panic!("expected a template error, got {other:?}"),
    }
}

#[test]
fn test_literals_and_placeholders_in_template_order() {
    let text = format("[{0}] <{1}> ({2})", &("a", 2, 'c')).expect("format");
    assert_eq!(text, "[a] <2> (99)");
}

#[test]
fn test_explicit_positions_reorder_and_repeat() {
    assert_eq!(format("{1} {0}", &("a", "b")).expect("format"), "b a");
    assert_eq!(
        format("{0}{1}{0}", &("ab", "-")).expect("format"),
        "ab-ab"
    );
}

#[test]
fn test_implicit_positions_follow_occurrence() {
    let implicit = format("{} {}", &("a", "b")).expect("format");
    let explicit = format("{0} {1}", &("a", "b")).expect("format");
    assert_eq!(implicit, "a b");
    assert_eq!(implicit, explicit);
}

#[test]
fn test_hex_width_keeps_low_order_digits() {
    assert_eq!(format("{:x}", &(260,)).expect("format"), "104");
    assert_eq!(format("{:4x}", &(260,)).expect("format"), "0104");
    assert_eq!(format("{:2x}", &(260,)).expect("format"), "04");
}

#[test]
fn test_char_layout() {
    assert_eq!(format("{:c}", &('A',)).expect("format"), "A");
    assert_eq!(format("{}", &('A',)).expect("format"), "65");
    assert_eq!(format("{:c}", &(97u8,)).expect("format"), "a");
}

#[test]
fn test_missing_closing_brace() {
    let err = template_error(format("Hello {", &(1,)));
    assert_eq!(err, TemplateError::MissingClosingBrace { offset: 6 });
    assert_eq!(err.span(), Some(6..7));
}

#[test]
fn test_position_gap() {
    let err = template_error(format("{0} {2}", &(1, 2, 3)));
    assert_eq!(err, TemplateError::PositionGap { position: 1 });
}

#[test]
fn test_position_out_of_range() {
    let err = template_error(format("{5}", &(1, 2, 3)));
    assert_eq!(
        err,
        TemplateError::PositionOutOfRange {
            position: 5,
            arity: 3,
            span: 0..3
        }
    );
}

#[test]
fn test_mixed_positioning() {
    let err = template_error(format("{} {0}", &(1,)));
    assert!(matches!(err, TemplateError::MixedPositioning { .. }));
}

#[test]
fn test_fewer_placeholders_than_arguments() {
    let err = template_error(format("{0}", &(1, 2)));
    assert_eq!(
        err,
        TemplateError::ArityMismatch {
            arity: 2,
            placeholders: 1
        }
    );
}

#[test]
fn test_repeated_position_may_leave_arguments_unused() {
    assert_eq!(format("{0} {0}", &("a", "b")).expect("format"), "a a");
    assert_eq!(format("{} {}", &("a", "b")).expect("format"), "a b");
}

#[test]
fn test_specifier_errors_point_into_the_template() {
    let err = template_error(format("ab {0:4q}", &(1,)));
    assert_eq!(
        err,
        TemplateError::InvalidLayoutChar {
            offset: 7,
            found: 'q'
        }
    );

    let err = template_error(format("{x}", &(1,)));
    assert_eq!(
        err,
        TemplateError::InvalidPositionChar {
            offset: 1,
            found: 'x'
        }
    );
}

#[test]
fn test_compile_twice_is_identical() {
    let a = Template::compile("id={0:08X} name={1}", 2).expect("compile");
    let b = Template::compile("id={0:08X} name={1}", 2).expect("compile");
    assert_eq!(a.segments(), b.segments());
}

#[test]
fn test_runtime_argument_lists() {
    let values = vec![3u32, 1, 2];
    assert_eq!(
        format("{2}{1}{0}", &values).expect("format"),
        "213"
    );
    assert_eq!(format("{}-{}", &["x", "y"]).expect("format"), "x-y");
    assert_eq!(format("{}", values.as_slice()).map_err(|e| e.to_string()), Err(
        "template error: template has 1 placeholder(s) for 3 argument(s)".to_string()
    ));
}

#[test]
fn test_print_streams_to_writer() {
    let mut sink = io::Cursor::new(Vec::new());
    print(&mut sink, "{0}:{1:o}", &("mode", 0o755)).expect("print");
    assert_eq!(sink.into_inner(), b"mode:755".to_vec());
}

#[test]
fn test_options_change_float_and_pointer_rendering() {
    let options = RenderOptions::from_toml("float_precision = 3\npointer_prefix = \"#\"")
        .expect("options");
    let text = format_with_options("{} {:p}", &(1.5, 255), &options).expect("format");
    assert_eq!(text, "1.500 #ff");
}

#[test]
fn test_cache_and_macro_agree_with_format() {
    let direct = format("{:08b}|{:3}", &(5, 7)).expect("format");
    let cached = TemplateCache::global()
        .format("{:08b}|{:3}", &(5, 7))
        .expect("cached");
    let macro_call = formatted!("{:08b}|{:3}", 5, 7).expect("macro");
    assert_eq!(direct, "00000101|  7");
    assert_eq!(cached, direct);
    assert_eq!(macro_call, direct);
}

#[test]
fn test_report_names_the_template() {
    let source = "total: {0:9z}";
    let err = Template::compile(source, 1).expect_err("bad layout");
    let report = err.report(source, "receipt");
    assert!(report.contains("receipt"));
    assert!(report.contains("invalid layout specifier 'z'"));
}

#[test]
fn test_out_of_range_precision_is_a_config_error() {
    let result = RenderOptions::from_toml("float_precision = 100000");
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn test_huge_width_is_rejected_before_rendering() {
    let err = template_error(format("[{:99999999999}]", &(1,)));
    assert_eq!(err, TemplateError::NumberOverflow { span: 3..14 });
}

#[test]
fn test_zero_then_layout_is_not_a_width() {
    let err = template_error(format("[{:0x}]", &(260,)));
    assert_eq!(
        err,
        TemplateError::InvalidNumberChar {
            offset: 4,
            found: 'x'
        }
    );
    assert_eq!(format("[{:04x}]", &(260,)).expect("format"), "[0104]");
}
