use model_helper_syntax::{JavaSyntaxTree, SyntaxError, SyntaxTree, TypeKind};

const ARTICLE: &str = r#"
package com.example.models;

import java.util.List;
import javax.persistence.Transient;

/**
 * A news article.
 */
public class Article extends com.example.base.GenericContent<Article> {
    private static final long serialVersionUID = 1L;

    @Column
    private String title;
    private int first, second;
    protected List<String> tags;

    @Transient
    private transient String cached;

    public Article() {
        int local = 0;
    }

    static class Meta {
        boolean visible;
    }
}

class Trailing {
    String ignored;
}
"#;

#[test]
fn test_primary_type_is_first_top_level_declaration() {
    let tree = JavaSyntaxTree::parse(ARTICLE).unwrap();
    let primary = tree.find_primary_type().unwrap();
    assert_eq!(primary.name, "Article");
    assert_eq!(primary.kind, TypeKind::Class);
    assert_eq!(primary.supertype.as_deref(), Some("GenericContent"));
}

#[test]
fn test_field_declarations_in_source_order_including_nested_types() {
    let tree = JavaSyntaxTree::parse(ARTICLE).unwrap();
    let primary = tree.find_primary_type().unwrap();
    let fields = tree.find_field_declarations(&primary);

    let types: Vec<&str> = fields.iter().map(|f| f.declared_type.as_str()).collect();
    assert_eq!(types, ["long", "String", "int", "List", "String", "boolean"]);

    assert!(fields[0].modifiers.contains("final"));
    assert!(fields[0].modifiers.contains("static"));
    assert_eq!(fields[1].annotations, ["Column"]);
    assert!(fields[4].annotations.contains(&"Transient".to_string()));
    assert!(fields[4].modifiers.contains("transient"));
}

#[test]
fn test_variable_declarators_per_field() {
    let tree = JavaSyntaxTree::parse(ARTICLE).unwrap();
    let primary = tree.find_primary_type().unwrap();
    let fields = tree.find_field_declarations(&primary);

    let names: Vec<String> = tree
        .find_variable_declarators(&fields[2])
        .into_iter()
        .map(|v| v.name)
        .collect();
    assert_eq!(names, ["first", "second"]);
}

#[test]
fn test_local_variables_are_not_fields() {
    let tree = JavaSyntaxTree::parse(ARTICLE).unwrap();
    let primary = tree.find_primary_type().unwrap();
    let all: Vec<String> = tree
        .find_field_declarations(&primary)
        .iter()
        .flat_map(|f| tree.find_variable_declarators(f))
        .map(|v| v.name)
        .collect();
    assert!(!all.contains(&"local".to_string()));
    assert!(!all.contains(&"ignored".to_string()));
}

#[test]
fn test_class_without_superclass() {
    let tree = JavaSyntaxTree::parse("public class Widget { String name; }").unwrap();
    let primary = tree.find_primary_type().unwrap();
    assert_eq!(primary.supertype, None);
}

#[test]
fn test_interface_can_be_primary() {
    let tree = JavaSyntaxTree::parse("public interface Shape extends Comparable<Shape> {}").unwrap();
    let primary = tree.find_primary_type().unwrap();
    assert_eq!(primary.kind, TypeKind::Interface);
    assert_eq!(primary.name, "Shape");
    assert_eq!(primary.supertype, None);
}

#[test]
fn test_no_type_declaration() {
    let tree = JavaSyntaxTree::parse("package com.example;\nimport java.util.List;\n").unwrap();
    assert!(tree.find_primary_type().is_none());
}

#[test]
fn test_invalid_source_is_rejected_with_position() {
    let err = JavaSyntaxTree::parse("public class Broken { private String = ; }").unwrap_err();
    match err {
        SyntaxError::Parse { line, column } => {
            assert_eq!(line, 1);
            assert!(column >= 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_foreign_scope_yields_no_fields() {
    let tree = JavaSyntaxTree::parse("class A { int a; }").unwrap();
    let other = JavaSyntaxTree::parse("\n\n\n\nclass B { int b; int c; }").unwrap();
    let scope = other.find_primary_type().unwrap();
    assert!(tree.find_field_declarations(&scope).is_empty());
}

#[test]
fn test_top_level_statements_are_rejected() {
    for source in [
        "class A {} foo();",
        "int x = 5;",
        "x = 1; class B { int n; }",
        "System.out.println(\"hi\");",
    ] {
        let err = JavaSyntaxTree::parse(source).unwrap_err();
        assert!(
            matches!(err, SyntaxError::Parse { line: 1, .. }),
            "{source:?} gave {err:?}"
        );
    }
}

#[test]
fn test_compilation_unit_items_are_accepted() {
    let source = "// header\npackage a.b;\n\nimport java.util.List;\n;\n/* note */\nclass A {}\n";
    let tree = JavaSyntaxTree::parse(source).unwrap();
    assert_eq!(tree.find_primary_type().unwrap().name, "A");
}

#[test]
fn test_deeply_nested_initializer() {
    let terms = vec!["\"a\""; 10_000].join(" + ");
    let source = format!(
        "class Sql {{\n    private static final String Q = {terms};\n    private String name;\n}}\n"
    );
    let tree = JavaSyntaxTree::parse(source).unwrap();
    let primary = tree.find_primary_type().unwrap();
    let fields = tree.find_field_declarations(&primary);
    let names: Vec<String> = fields
        .iter()
        .flat_map(|f| tree.find_variable_declarators(f))
        .map(|v| v.name)
        .collect();
    assert_eq!(names, ["Q", "name"]);
}

#[test]
fn test_error_after_deep_nesting_is_located() {
    let terms = vec!["1"; 10_000].join(" + ");
    let source = format!("class Deep {{\n    int total = {terms};\n    int = ;\n}}\n");
    let err = JavaSyntaxTree::parse(source).unwrap_err();
    assert!(matches!(err, SyntaxError::Parse { .. }));
}
