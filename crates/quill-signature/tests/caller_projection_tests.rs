//! Caller-side argument mapping through the `FunctionLike` accessors.

use quill_signature::{Function, FunctionLike, FunctionSignature, Method, Parameter};
use quill_types::{TypeAtom, UnionType};

fn int() -> UnionType {
    UnionType::of(TypeAtom::Int)
}

fn printf() -> Function {
    Function::new("printf").with_signature(FunctionSignature::with_parameters(vec![
        Parameter::new("format", UnionType::of(TypeAtom::String)),
        Parameter::variadic("values", int()),
    ]))
}

#[test]
fn test_declared_positions_map_to_their_parameters() {
    let f = printf();
    let format = f.parameter_for_caller(0).expect("position 0 is declared");
    assert_eq!(format.name(), "format");
    assert!(!format.is_variadic());

    let values = f.parameter_for_caller(1).expect("position 1 is declared");
    assert_eq!(values.name(), "values");
    assert!(!values.is_variadic());
    assert_eq!(values.union_type(), &int());
}

#[test]
fn test_trailing_variadic_absorbs_extra_arguments() {
    let f = printf();
    for index in 2..10 {
        let projected = f
            .parameter_for_caller(index)
            .expect("variadic tail should cover every later position");
        assert_eq!(projected.name(), "values");
        assert!(!projected.is_variadic());
        assert_eq!(projected.union_type(), &int());
    }
}

#[test]
fn test_projection_leaves_the_declaration_variadic() {
    let f = printf();
    let _ = f.parameter_for_caller(5);
    assert!(f.parameter_list()[1].is_variadic());
    assert!(f.is_variadic());
}

#[test]
fn test_non_variadic_list_has_no_parameter_past_the_end() {
    let f = Function::new("pair").with_signature(FunctionSignature::with_parameters(vec![
        Parameter::untyped("left"),
        Parameter::untyped("right"),
    ]));
    assert!(f.parameter_for_caller(1).is_some());
    assert!(f.parameter_for_caller(2).is_none());
    assert!(!f.is_variadic());
}

#[test]
fn test_empty_list_has_no_caller_parameter() {
    let f = Function::new("noop");
    assert!(f.parameter_for_caller(0).is_none());
    assert_eq!(f.number_of_parameters(), 0);
}

#[test]
fn test_parameters_appended_during_parsing_are_visible() {
    let mut method = Method::new("Logger", "log");
    method.append_parameter(Parameter::untyped("level"));
    method.append_parameter(Parameter::variadic("context", UnionType::empty()));
    method.set_number_of_required_parameters(1);
    method.set_number_of_optional_parameters(1);

    assert_eq!(method.number_of_parameters(), method.parameter_list().len());
    let extra = method
        .parameter_for_caller(3)
        .expect("variadic tail should cover position 3");
    assert_eq!(extra.name(), "context");
    assert!(!extra.is_variadic());
}

#[test]
fn test_replacing_the_list_changes_the_projection() {
    let mut f = printf();
    f.set_parameter_list(vec![Parameter::untyped("only")]);

    assert_eq!(
        f.parameter_for_caller(0).map(|p| p.name().to_string()),
        Some("only".to_string())
    );
    assert!(f.parameter_for_caller(1).is_none());
}
