use pyclassgram::core::ProjectAnalyzer;
use pyclassgram::formatters::PlantUmlFormatter;
use pyclassgram::Extraction;
use std::fs;

#[test]
fn analyzer_end_to_end_on_single_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let src = dir.path().join("zoo.py");
    fs::write(
        &src,
        "class Animal:\n    legs = 4\n    def speak(self): pass\n\nclass Cat(Animal):\n    def __purr(self): pass\n",
    )
    .unwrap();

    let model = ProjectAnalyzer::new()
        .analyze(&src)
        .unwrap()
        .into_model()
        .unwrap();
    assert_eq!(model.len(), 2);

    let out = dir.path().join("zoo.puml");
    assert!(PlantUmlFormatter::new().format_to_file(&model, &out).unwrap());
    let s = fs::read_to_string(&out).unwrap();

    assert!(s.starts_with("@startuml\n"));
    assert!(s.contains("class Cat {\n  -__purr()\n}"));
    assert!(s.contains("Animal <|-- Cat"));
    assert!(s.ends_with("@enduml\n"));
}

#[test]
fn single_file_with_invalid_syntax_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let src = dir.path().join("broken.py");
    fs::write(&src, "class Broken(:\n    pass\n").unwrap();

    let err = ProjectAnalyzer::new().analyze(&src).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("broken.py"));
    assert!(message.contains("invalid syntax"));
}

#[test]
fn directory_analysis_merges_files_and_skips_broken_ones() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("pkg")).unwrap();
    fs::write(root.join("pkg/a_base.py"), "class Base:\n    def run(self): pass\n").unwrap();
    fs::write(
        root.join("pkg/b_child.py"),
        "from .a_base import Base\n\nclass Child(Base):\n    name = 'c'\n",
    )
    .unwrap();
    fs::write(root.join("pkg/c_broken.py"), "def oops(:\n").unwrap();
    fs::write(root.join("pkg/d_helpers.py"), "def helper():\n    return 1\n").unwrap();
    fs::write(
        root.join("pkg/e_more.py"),
        "class Base:\n    def stop(self): pass\n",
    )
    .unwrap();

    let model = ProjectAnalyzer::new()
        .analyze(root)
        .unwrap()
        .into_model()
        .unwrap();

    let order: Vec<&str> = model.classes().iter().map(|c| c.name()).collect();
    assert_eq!(order, vec!["Base", "Child"]);

    let methods: Vec<&str> = model
        .class("Base")
        .unwrap()
        .methods()
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(methods, vec!["run", "stop"]);
    assert_eq!(model.edges().len(), 1);
}

#[test]
fn directory_without_classes_is_empty() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join("script.py"), "print('hi')\n").unwrap();

    let result = ProjectAnalyzer::new().analyze(dir.path()).unwrap();
    assert_eq!(result, Extraction::Empty);
}

#[test]
fn analyze_source_bypasses_filesystem() {
    let result = ProjectAnalyzer::new()
        .analyze_source("class Inline: pass\n")
        .unwrap();
    assert_eq!(result.into_model().unwrap().classes()[0].name(), "Inline");
}
