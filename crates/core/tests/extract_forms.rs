use carve_core::extract::{extract_functions, ExtractError, ExtractOptions, Extractor};
use carve_core::model::DeclarationShape;

fn only_unit_shape(source: &str, name: &str) -> DeclarationShape {
    let result = extract_functions(source);
    assert_eq!(result.len(), 1, "expected exactly one match in {source:?}");
    result.get(name).expect("unit present").shape
}

#[test]
fn empty_source_yields_empty_mapping() {
    assert!(extract_functions("").is_empty());
}

#[test]
fn source_without_declarations_yields_empty_mapping() {
    let result = extract_functions("let x = 1;\nconsole.log(x);\nconst y = 2;\n");
    assert!(result.is_empty());
}

#[test]
fn arrow_with_params_is_recognized() {
    assert_eq!(only_unit_shape("const foo = (a, b) => {", "foo"), DeclarationShape::Arrow);
}

#[test]
fn arrow_without_params_is_recognized() {
    assert_eq!(only_unit_shape("const foo = () => {", "foo"), DeclarationShape::Arrow);
}

#[test]
fn classic_function_is_recognized() {
    assert_eq!(only_unit_shape("function foo(a, b) {", "foo"), DeclarationShape::Function);
}

#[test]
fn optional_parts_may_be_omitted() {
    assert_eq!(only_unit_shape("function foo {", "foo"), DeclarationShape::Bare);
    assert_eq!(only_unit_shape("const foo = {", "foo"), DeclarationShape::Assigned);
    assert_eq!(only_unit_shape("const foo = (a) {", "foo"), DeclarationShape::Assigned);
    assert_eq!(only_unit_shape("const foo => {", "foo"), DeclarationShape::Arrow);
    assert_eq!(only_unit_shape("function foo(a) => {", "foo"), DeclarationShape::Arrow);
}

#[test]
fn whitespace_between_parts_is_flexible() {
    let result = extract_functions("const   foo\n=\n(\n  a,\n  b\n)\n=>\n{ return a; }");
    assert_eq!(result.len(), 1);
    assert_eq!(result.get("foo").unwrap().shape, DeclarationShape::Arrow);
}

#[test]
fn declarations_not_opening_a_block_are_ignored() {
    let result = extract_functions("const foo = 1;\nconst bar = (a) => a + 1;\nfunction baz() {}");
    let names: Vec<&str> = result.names().collect();
    assert_eq!(names, vec!["baz"]);
}

#[test]
fn extracted_names_appear_in_source() {
    let source = "function alpha() {}\nconst beta = () => {}\nconst gamma = {}\nlet delta = () => {}";
    let result = extract_functions(source);
    assert_eq!(result.len(), 3);
    for name in result.names() {
        assert!(source.contains(name), "{name} should appear in the source");
    }
}

#[test]
fn unicode_identifiers_are_words() {
    let source = "const café = () => { return 'ok'; }";
    let result = extract_functions(source);
    assert_eq!(result.body("café"), Some(source));
}

#[test]
fn custom_keywords_extend_the_grammar() {
    let options = ExtractOptions::default().with_keywords(["const", "function", "let"]);
    let extractor = Extractor::new(&options).expect("extractor");
    let result = extractor.extract("let a = () => {}\nconst b = () => {}\nvar c = () => {}");
    let names: Vec<&str> = result.names().collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(result.body("b"), Some("const b = () => {}\nvar c = () => {}"));
}

#[test]
fn invalid_keyword_sets_are_rejected() {
    let empty = ExtractOptions::default().with_keywords(Vec::<String>::new());
    assert!(matches!(Extractor::new(&empty), Err(ExtractError::NoKeywords)));

    let bad = ExtractOptions::default().with_keywords(["const", "fn("]);
    let err = Extractor::new(&bad).unwrap_err();
    assert!(err.to_string().contains("fn("));
}

#[test]
fn line_numbers_are_one_based() {
    let source = "\n\nfunction a() {}\n// gap\nfunction b() {}\n";
    let result = extract_functions(source);
    assert_eq!(result.get("a").unwrap().line, 3);
    assert_eq!(result.get("b").unwrap().line, 5);
}
