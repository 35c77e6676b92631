#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::parser::{parse_body, parse_file_text};

#[test]
fn test_velocity_field_layout() {
    let input = "U\n{\n  dimensions [0 1 -1 0 0 0 0];\n  internalField uniform (1 0 0);\n}";
    let body = parse_body(input).unwrap();
    let text = to_foam(&body);

    assert_eq!(
        text,
        "U\n{\n\tdimensions    [0 1 -1 0 0 0 0];\n\tinternalField uniform (1 0 0);\n}"
    );
    assert_eq!(parse_body(&text).unwrap(), body);
}

#[test]
fn test_keys_padded_to_longest_plus_one() {
    let dict = OrderedDict::new()
        .with("a", Value::scalar("1"))
        .with("longer", Value::str("x"))
        .with("flag", Value::Flag);
    let lines = Writer::default().dict_lines(&dict, 0);
    assert_eq!(lines, vec!["a      1;", "longer x;", "flag;"]);
}

#[test]
fn test_padding_is_per_level() {
    let dict = OrderedDict::new()
        .with("outerKeyName", Value::scalar("1"))
        .with("d", OrderedDict::new().with("k", Value::scalar("2")));
    let lines = Writer::default().dict_lines(&dict, 0);
    assert_eq!(lines, vec!["outerKeyName 1;", "d", "{", "\tk 2;", "}"]);
}

#[test]
fn test_custom_indent() {
    let dict = OrderedDict::new().with("d", OrderedDict::new().with("k", Value::scalar("2")));
    let lines = Writer::new("    ").dict_lines(&dict, 0);
    assert_eq!(lines[2], "    k 2;");
}

#[test]
fn test_directives_have_no_semicolon() {
    let body = parse_body("#include \"initialConditions\"\nU 1;").unwrap();
    let lines = Writer::default().dict_lines(&body, 0);
    assert_eq!(lines, vec!["#include \"initialConditions\"", "U        1;"]);
    assert_eq!(parse_body(&lines.join("\n")).unwrap(), body);
}

#[test]
fn test_valueless_directive_keeps_semicolon() {
    let body = parse_body("#remove;\na 1;\nb 2;\n").unwrap();
    assert_eq!(body.get(&["#remove"]).unwrap(), &Value::Flag);

    let text = to_foam(&body);
    assert!(text.starts_with("#remove;\n"));
    assert_eq!(parse_body(&text).unwrap(), body);
}

#[test]
fn test_list_layout() {
    let body = parse_body("vertices ((0 0 0) (1 0 0)); patches (inlet outlet);").unwrap();
    let text = to_foam(&body);
    assert_eq!(
        text,
        "vertices\n(\n\t(0 0 0)\n\t(1 0 0)\n);\npatches\n(\n\tinlet\n\toutlet\n);"
    );
    assert_eq!(parse_body(&text).unwrap(), body);
}

#[test]
fn test_counted_list_layout() {
    let body = parse_body("faces List<label> 2(4 5);").unwrap();
    let text = to_foam(&body);
    assert_eq!(text, "faces\nList<label>\n2\n(\n\t4\n\t5\n);");
    assert_eq!(parse_body(&text).unwrap(), body);
}

#[test]
fn test_named_dicts_in_list() {
    let body = parse_body("boundary ( inlet { type patch; faces ((0 4 7 3)); } );").unwrap();
    let expected = "boundary\n(\n\tinlet\n\t{\n\t\ttype  patch;\n\t\tfaces\n\t\t(\n\t\t\t(0 4 7 3)\n\t\t);\n\t}\n);";
    assert_eq!(to_foam(&body), expected);
    assert_eq!(parse_body(expected).unwrap(), body);
}

#[test]
fn test_empty_body_renders_nothing() {
    assert!(Writer::default().dict_lines(&OrderedDict::new(), 0).is_empty());
    assert_eq!(to_foam(&OrderedDict::new()), "");
}

#[test]
fn test_scientific_notation_round_trip() {
    let body = parse_body("a 1.23e-4; b -1.2e+3; c uniform 9e6; d (1e-3 0 -2E+2);").unwrap();
    let text = to_foam(&body);
    assert!(text.contains("1.23e-4;"));
    assert!(text.contains("uniform 9e6;"));
    assert!(text.contains("(1e-3 0 -2E+2);"));
    assert_eq!(parse_body(&text).unwrap(), body);
}

#[test]
fn test_solver_dictionary_round_trip() {
    let input = r#"
solvers
{
    "(U|k|epsilon).*"
    {
        solver          smoothSolver;
        smoother        symGaussSeidel;
        tolerance       1e-05;
        relTol          0.1;
    }
}
divSchemes
{
    default         none;
    div(phi,U)      bounded Gauss linearUpwind grad(U);
}
PISO { nCorrectors 2; momentumPredictor; }
"#;
    let body = parse_body(input).unwrap();
    let text = to_foam(&body);
    assert!(text.contains("\tdiv(phi,U) bounded Gauss linearUpwind grad(U);"));
    assert!(text.contains("\tmomentumPredictor;"));
    assert_eq!(parse_body(&text).unwrap(), body);
    assert_eq!(to_foam(&parse_body(&text).unwrap()), text);
}

#[test]
fn test_render_file_assembly() {
    let header = Header::new("U", "2.0", "ascii", "volVectorField");
    let body = OrderedDict::new().with("dimensions", Value::str("[0 1 -1 0 0 0 0]"));
    let text = Writer::default().render_file(None, &header, &body);

    let expected = format!(
        "{}\n\nFoamFile\n{{\n\tversion 2.0;\n\tformat  ascii;\n\tobject  U;\n\tclass   volVectorField;\n}}\n\n{}\n\ndimensions [0 1 -1 0 0 0 0];\n\n{}\n",
        DEFAULT_BANNER, SPACER, FOOTER
    );
    assert_eq!(text, expected);
}

#[test]
fn test_render_file_round_trip_keeps_banner_and_header() {
    let header = Header::new("controlDict", "2.0", "ascii", "dictionary");
    let body = parse_body("application icoFoam; endTime 0.5; functions {}").unwrap();
    let text = Writer::default().render_file(None, &header, &body);

    let parsed = parse_file_text(&text).unwrap();
    assert_eq!(parsed.banner.as_deref(), Some(DEFAULT_BANNER));
    assert_eq!(parsed.header.as_ref(), Some(&header));
    assert_eq!(parsed.body, body);

    let again = Writer::default().render_file(parsed.banner.as_deref(), &header, &parsed.body);
    assert_eq!(again, text);
}
