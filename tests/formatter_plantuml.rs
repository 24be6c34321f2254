use pyclassgram::core::ClassRecord;
use pyclassgram::formatters::{PlantUmlFormatter, Rendered};
use pyclassgram::{extract, render, DiagramModel};

fn render_source(source: &str) -> String {
    let model = extract(source).unwrap().into_model().unwrap();
    render(&model).into_text().unwrap()
}

#[test]
fn animal_scenario_snapshot() {
    let text = render_source(
        "class Animal:\n    species = \"?\"\n    def speak(self): pass\nclass Dog(Animal):\n    def speak(self): pass",
    );

    let expected = "\
@startuml
skinparam classAttributeIconSize 0
skinparam linetype ortho

class Animal {
  +species
  --
  +speak()
}

class Dog {
  +speak()
}

Animal <|-- Dog
@enduml
";
    assert_eq!(text, expected);
}

#[test]
fn attribute_precedes_separator_and_method_follows() {
    let text = render_source("class A:\n    x = 1\n    def foo(self): pass\n");
    let x = text.find("  +x\n").unwrap();
    let sep = text.find("  --\n").unwrap();
    let foo = text.find("  +foo()\n").unwrap();
    assert!(x < sep && sep < foo);
}

#[test]
fn separator_only_when_both_member_kinds_present() {
    let text = render_source(
        r#"
class OnlyAttrs:
    a = 1

class OnlyMethods:
    def m(self): pass

class Nothing:
    pass
"#,
    );
    assert!(!text.contains("--\n"));
    assert!(text.contains("class OnlyAttrs {\n  +a\n}"));
    assert!(text.contains("class OnlyMethods {\n  +m()\n}"));
    assert!(text.contains("class Nothing {\n}"));
}

#[test]
fn members_sorted_by_rendered_label() {
    let text = render_source(
        r#"
class Service:
    zeta = 1
    alpha = 2
    def run(self): pass
    def __secret(self): pass
    def _helper(self): pass
    def __init__(self): pass
"#,
    );
    let expected_block = "\
class Service {
  +alpha
  +zeta
  --
  #_helper()
  +__init__()
  +run()
  -__secret()
}";
    assert!(text.contains(expected_block), "got:\n{text}");
}

#[test]
fn edges_listed_after_all_blocks_in_order() {
    let text = render_source("class A: pass\nclass B(A): pass\nclass C(A, mod.B): pass\n");
    let tail = "\nA <|-- B\nA <|-- C\nmod.B <|-- C\n@enduml\n";
    assert!(text.ends_with(tail), "got:\n{text}");
    let last_block = text.rfind("}\n").unwrap();
    assert!(last_block < text.find("A <|-- B").unwrap());
}

#[test]
fn no_edge_section_without_bases() {
    let text = render_source("class Solo:\n    pass\nclass Pair(get_base()):\n    pass\n");
    assert!(!text.contains("<|--"));
    assert!(text.ends_with("class Pair {\n}\n@enduml\n"));
}

#[test]
fn empty_model_renders_empty() {
    assert_eq!(render(&DiagramModel::new()), Rendered::Empty);
}

#[test]
fn skinparams_can_be_disabled() {
    let model: DiagramModel = vec![ClassRecord::new("Bare")].into_iter().collect();
    let text = PlantUmlFormatter::new()
        .with_skinparams(false)
        .render(&model)
        .into_text()
        .unwrap();
    assert_eq!(text, "@startuml\n\nclass Bare {\n}\n@enduml\n");
}

#[test]
fn format_to_file_skips_empty_models() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("diagram.puml");

    let written = PlantUmlFormatter::new()
        .format_to_file(&DiagramModel::new(), &out)
        .unwrap();
    assert!(!written);
    assert!(!out.exists());

    let model: DiagramModel = vec![ClassRecord::new("A").with_method("go")]
        .into_iter()
        .collect();
    assert!(PlantUmlFormatter::new().format_to_file(&model, &out).unwrap());
    let s = std::fs::read_to_string(&out).unwrap();
    assert!(s.starts_with("@startuml\n"));
    assert!(s.contains("  +go()"));
}
