//! End-to-end behaviour of parameter type reconciliation.

use quill_common::{AnalyzerOptions, SourceSpan, diagnostic_codes};
use quill_docblock::{Comment, CommentParameter};
use quill_signature::{
    DiagnosticCollector, Function, FunctionLike, FunctionSignature, Method, Parameter,
    PendingDiagnostic, reconcile,
};
use quill_types::{TypeAtom, UnionType};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn site() -> SourceSpan {
    SourceSpan::new("src/lib.php", 120, 40).with_line(7)
}

fn ty(source: &str) -> UnionType {
    UnionType::parse(source).expect("test type should parse")
}

fn function(name: &str, parameters: Vec<Parameter>) -> Function {
    Function::new(name).with_signature(FunctionSignature::with_parameters(parameters))
}

fn comment(params: &[(&str, &str, bool)]) -> Comment {
    let mut comment = Comment::empty();
    for (name, source, variadic) in params {
        comment.add_parameter(CommentParameter::new(*name, ty(source), *variadic));
    }
    comment
}

fn run(entity: &mut impl FunctionLike, comment: &Comment) -> Vec<PendingDiagnostic> {
    init_logging();
    let mut diagnostics = Vec::new();
    reconcile(entity, &site(), comment, &mut diagnostics);
    diagnostics
}

fn param_type<'a>(entity: &'a impl FunctionLike, name: &str) -> &'a UnionType {
    entity
        .parameter_list()
        .iter()
        .find(|p| p.name() == name)
        .map(Parameter::union_type)
        .expect("parameter should exist")
}

// =========================================================================
// Scenarios
// =========================================================================

#[test]
fn test_comment_type_fills_untyped_and_null_default_adds_nothing() {
    // f(a, b = null) with `@param int $a`
    let mut f = function(
        "f",
        vec![
            Parameter::untyped("a"),
            Parameter::untyped("b").with_default(UnionType::null()),
        ],
    );
    let diagnostics = run(&mut f, &comment(&[("a", "int", false)]));

    assert!(diagnostics.is_empty());
    assert_eq!(param_type(&f, "a"), &ty("int"));
    assert!(param_type(&f, "b").is_empty());
}

#[test]
fn test_untyped_with_literal_default_widens_to_any() {
    // g(x = 5), no comment
    let mut g = function(
        "g",
        vec![Parameter::untyped("x").with_default(ty("int"))],
    );
    let diagnostics = run(&mut g, &Comment::empty());

    assert!(diagnostics.is_empty());
    let x = param_type(&g, "x");
    assert_eq!(x, &ty("mixed|int"));
    assert!(x.has_type(&TypeAtom::Any));
    assert!(!x.is_type(&TypeAtom::Int));
}

#[test]
fn test_declared_variadic_with_plain_comment_reports_once() {
    // h(int ...xs) with `@param int $x`
    let mut h = function("h", vec![Parameter::variadic("xs", ty("int"))]);
    let diagnostics = run(&mut h, &comment(&[("x", "int", false)]));

    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics[0];
    assert_eq!(
        diagnostic.code,
        diagnostic_codes::TYPE_MISMATCH_VARIADIC_PARAM
    );
    assert_eq!(diagnostic.span, site());
    assert_eq!(
        diagnostic.message_text(),
        "int x is not variadic in comment, but variadic in param (int ...xs)"
    );
    assert!(param_type(&h, "xs").has_type(&TypeAtom::Int));
}

// =========================================================================
// Comment fallback
// =========================================================================

#[test]
fn test_comment_type_is_superset_after_merge() {
    let mut f = function("f", vec![Parameter::untyped("value")]);
    run(&mut f, &comment(&[("value", "int|null", false)]));

    let value = param_type(&f, "value");
    assert!(value.has_type(&TypeAtom::Int));
    assert!(value.has_type(&TypeAtom::Null));
}

#[test]
fn test_name_match_takes_precedence_over_offset() {
    // Annotations listed in the opposite order from the declaration.
    let mut f = function(
        "f",
        vec![Parameter::untyped("a"), Parameter::untyped("b")],
    );
    run(&mut f, &comment(&[("b", "string", false), ("a", "int", false)]));

    assert_eq!(param_type(&f, "a"), &ty("int"));
    assert_eq!(param_type(&f, "b"), &ty("string"));
}

#[test]
fn test_unmatched_name_falls_back_to_offset() {
    let mut f = function(
        "f",
        vec![Parameter::untyped("first"), Parameter::untyped("second")],
    );
    run(
        &mut f,
        &comment(&[("renamed_a", "float", false), ("renamed_b", "bool", false)]),
    );

    assert_eq!(param_type(&f, "first"), &ty("float"));
    assert_eq!(param_type(&f, "second"), &ty("bool"));
}

#[test]
fn test_parameters_past_the_annotations_stay_untyped() {
    let mut f = function(
        "f",
        vec![Parameter::untyped("a"), Parameter::untyped("b")],
    );
    run(&mut f, &comment(&[("a", "int", false)]));

    assert_eq!(param_type(&f, "a"), &ty("int"));
    assert!(param_type(&f, "b").is_empty());
}

#[test]
fn test_declared_type_is_not_replaced_by_comment() {
    let mut f = function("f", vec![Parameter::new("a", ty("int"))]);
    let diagnostics = run(&mut f, &comment(&[("a", "string", false)]));

    assert!(diagnostics.is_empty());
    assert_eq!(param_type(&f, "a"), &ty("int"));
}

#[test]
fn test_variadic_comment_on_plain_parameter_reports_once() {
    let mut f = function("f", vec![Parameter::untyped("items")]);
    let diagnostics = run(&mut f, &comment(&[("items", "string", true)]));

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].code,
        diagnostic_codes::TYPE_MISMATCH_VARIADIC_COMMENT
    );
    assert_eq!(
        diagnostics[0].message_text(),
        "string ...items is variadic in comment, but not variadic in param (items)"
    );
    // The comment's type is merged regardless.
    assert_eq!(param_type(&f, "items"), &ty("string"));
}

#[test]
fn test_untyped_variadic_takes_comment_type_after_mismatch() {
    let mut f = function(
        "f",
        vec![Parameter::variadic("rest", UnionType::empty())],
    );
    let diagnostics = run(&mut f, &comment(&[("rest", "float", false)]));

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].code,
        diagnostic_codes::TYPE_MISMATCH_VARIADIC_PARAM
    );
    assert_eq!(param_type(&f, "rest"), &ty("float"));
}

#[test]
fn test_matching_variadic_markers_are_silent() {
    let mut f = function(
        "f",
        vec![
            Parameter::untyped("format"),
            Parameter::variadic("args", UnionType::empty()),
        ],
    );
    let diagnostics = run(
        &mut f,
        &comment(&[("format", "string", false), ("args", "int|string", true)]),
    );

    assert!(diagnostics.is_empty());
    assert_eq!(param_type(&f, "args"), &ty("int|string"));
}

#[test]
fn test_offset_counts_declared_parameters_only() {
    // One declared variadic parameter; extra annotations are never reached.
    let mut f = function(
        "f",
        vec![Parameter::variadic("xs", UnionType::empty())],
    );
    let diagnostics = run(
        &mut f,
        &comment(&[("a", "int", true), ("b", "string", true), ("c", "bool", true)]),
    );

    assert!(diagnostics.is_empty());
    assert_eq!(param_type(&f, "xs"), &ty("int"));
}

#[test]
fn test_untyped_annotation_keeps_later_offsets_aligned() {
    let doc = Comment::parse("/**\n * @param $x first\n * @param int $y second\n */");
    let mut f = function(
        "f",
        vec![Parameter::untyped("a"), Parameter::untyped("b")],
    );
    let diagnostics = run(&mut f, &doc);

    assert!(diagnostics.is_empty());
    assert!(param_type(&f, "a").is_empty());
    assert_eq!(param_type(&f, "b"), &ty("int"));
}

#[test]
fn test_repeated_annotation_name_keeps_later_offsets_aligned() {
    let doc = Comment::parse(
        "/**\n * @param int $p\n * @param string $p\n * @param bool $q\n */",
    );
    let mut f = function(
        "f",
        vec![
            Parameter::untyped("a"),
            Parameter::untyped("b"),
            Parameter::untyped("c"),
        ],
    );
    run(&mut f, &doc);

    assert_eq!(param_type(&f, "a"), &ty("int"));
    assert_eq!(param_type(&f, "b"), &ty("string"));
    assert_eq!(param_type(&f, "c"), &ty("bool"));
}

#[test]
fn test_unparseable_annotation_keeps_later_offsets_aligned() {
    let doc = Comment::parse("/**\n * @param int-bad $x\n * @param float $y\n */");
    let mut f = function(
        "f",
        vec![Parameter::untyped("a"), Parameter::untyped("b")],
    );
    run(&mut f, &doc);

    assert!(param_type(&f, "a").is_empty());
    assert_eq!(param_type(&f, "b"), &ty("float"));
}

#[test]
fn test_typed_parameter_matched_by_offset_still_checks_variadic_marker() {
    let mut f = function("f", vec![Parameter::new("count", ty("int"))]);
    let diagnostics = run(&mut f, &Comment::parse("/** @param int ...$other */"));

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].code,
        diagnostic_codes::TYPE_MISMATCH_VARIADIC_COMMENT
    );
    assert_eq!(param_type(&f, "count"), &ty("int"));
}

// =========================================================================
// Default values
// =========================================================================

#[test]
fn test_null_default_makes_typed_parameter_nullable() {
    let mut f = function(
        "f",
        vec![Parameter::new("limit", ty("int")).with_default(UnionType::null())],
    );
    let diagnostics = run(&mut f, &Comment::empty());

    assert!(diagnostics.is_empty());
    assert_eq!(param_type(&f, "limit"), &ty("int|null"));
}

#[test]
fn test_null_default_makes_comment_typed_parameter_nullable() {
    let mut f = function(
        "f",
        vec![Parameter::untyped("name").with_default(UnionType::null())],
    );
    run(&mut f, &comment(&[("name", "string", false)]));

    assert_eq!(param_type(&f, "name"), &ty("string|null"));
}

#[test]
fn test_null_default_never_warns() {
    let mut f = function(
        "f",
        vec![Parameter::new("count", ty("int")).with_default(UnionType::null())],
    );
    assert!(run(&mut f, &Comment::empty()).is_empty());
}

#[test]
fn test_incompatible_default_reports_and_still_merges() {
    let mut f = function(
        "f",
        vec![Parameter::new("count", ty("int")).with_default(ty("string"))],
    );
    let diagnostics = run(&mut f, &Comment::empty());

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, diagnostic_codes::TYPE_MISMATCH_DEFAULT);
    assert_eq!(
        diagnostics[0].message_text(),
        "Default value for int count can't be string"
    );
    assert_eq!(param_type(&f, "count"), &ty("int|string"));
}

#[test]
fn test_compatible_default_is_silent() {
    let mut f = function(
        "f",
        vec![Parameter::new("ratio", ty("float")).with_default(ty("int"))],
    );
    let diagnostics = run(&mut f, &Comment::empty());

    assert!(diagnostics.is_empty());
    assert_eq!(param_type(&f, "ratio"), &ty("float|int"));
}

#[test]
fn test_default_is_checked_against_comment_type() {
    let mut f = function(
        "f",
        vec![Parameter::untyped("flag").with_default(ty("string"))],
    );
    let diagnostics = run(&mut f, &comment(&[("flag", "bool", false)]));

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, diagnostic_codes::TYPE_MISMATCH_DEFAULT);
    assert_eq!(param_type(&f, "flag"), &ty("bool|string"));
}

#[test]
fn test_untyped_parameter_is_never_exactly_its_default() {
    for default in ["int", "string", "array", "float|bool"] {
        let mut f = function(
            "f",
            vec![Parameter::untyped("p").with_default(ty(default))],
        );
        run(&mut f, &Comment::empty());

        let p = param_type(&f, "p");
        assert_ne!(p, &ty(default), "default {default} narrowed the parameter");
        assert!(p.has_type(&TypeAtom::Any));
    }
}

// =========================================================================
// Internal entities and other entity kinds
// =========================================================================

#[test]
fn test_internal_entity_is_untouched() {
    let mut builtin = Function::internal("strlen").with_signature(
        FunctionSignature::with_parameters(vec![
            Parameter::untyped("string"),
            Parameter::new("n", ty("int")).with_default(ty("string")),
            Parameter::variadic("rest", UnionType::empty()).with_default(UnionType::null()),
        ]),
    );
    builtin.set_has_return(true);
    builtin.set_is_return_type_undefined(true);
    let before = builtin.clone();

    let diagnostics = run(
        &mut builtin,
        &comment(&[("string", "string", true), ("n", "bool", false)]),
    );

    assert!(diagnostics.is_empty());
    assert_eq!(builtin, before);
}

#[test]
fn test_method_parameters_are_reconciled() {
    let mut method = Method::new("Cache", "get").with_signature(
        FunctionSignature::with_parameters(vec![
            Parameter::untyped("key"),
            Parameter::untyped("fallback").with_default(UnionType::null()),
        ]),
    );
    let diagnostics = run(
        &mut method,
        &comment(&[("key", "string", false), ("fallback", "int", false)]),
    );

    assert!(diagnostics.is_empty());
    assert_eq!(param_type(&method, "key"), &ty("string"));
    assert_eq!(param_type(&method, "fallback"), &ty("int|null"));
}

#[test]
fn test_counts_and_flags_are_not_changed_by_reconciliation() {
    let mut f = function(
        "f",
        vec![
            Parameter::untyped("a"),
            Parameter::untyped("b").with_default(ty("int")),
        ],
    );
    f.set_has_yield(true);
    run(&mut f, &comment(&[("a", "int", false)]));

    assert_eq!(f.number_of_required_parameters(), 1);
    assert_eq!(f.number_of_optional_parameters(), 1);
    assert!(f.has_yield());
    assert!(!f.has_return());
}

#[test]
fn test_parsed_doc_comment_drives_reconciliation() {
    let doc = Comment::parse(
        "/**\n * Format a message.\n *\n * @param string $format\n * @param mixed ...$args\n */",
    );
    let mut f = function(
        "sprintf_like",
        vec![
            Parameter::untyped("format"),
            Parameter::variadic("args", UnionType::empty()),
        ],
    );
    let diagnostics = run(&mut f, &doc);

    assert!(diagnostics.is_empty());
    assert_eq!(param_type(&f, "format"), &ty("string"));
    assert!(param_type(&f, "args").has_type(&TypeAtom::Any));
}

// =========================================================================
// Sinks
// =========================================================================

#[test]
fn test_collector_renders_warnings_at_the_declaration_site() {
    init_logging();
    let options = AnalyzerOptions::default();
    let mut collector = DiagnosticCollector::new(&options);
    let mut f = function(
        "f",
        vec![Parameter::new("count", ty("int")).with_default(ty("string"))],
    );
    reconcile(&mut f, &site(), &Comment::empty(), &mut collector);

    let diagnostics = collector.take_diagnostics();
    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics[0];
    assert_eq!(diagnostic.code, diagnostic_codes::TYPE_MISMATCH_DEFAULT);
    assert_eq!(&*diagnostic.file, "src/lib.php");
    assert_eq!(diagnostic.start, 120);
    assert_eq!(diagnostic.line, 7);
}

#[test]
fn test_collector_respects_suppressed_codes() {
    init_logging();
    let mut options = AnalyzerOptions::default();
    options.suppress(diagnostic_codes::TYPE_MISMATCH_VARIADIC_PARAM);
    let mut collector = DiagnosticCollector::new(&options);
    let mut h = function("h", vec![Parameter::variadic("xs", ty("int"))]);
    reconcile(
        &mut h,
        &site(),
        &comment(&[("x", "int", false)]),
        &mut collector,
    );

    assert!(collector.diagnostics().is_empty());
    assert!(param_type(&h, "xs").has_type(&TypeAtom::Int));
}
