//! Whole-build tests: raw templated XML in, resolved XML out.
use glaze::{BuilderSink, TemplateEngine, UiLoader};

fn engine_with(enabled: &[&str]) -> TemplateEngine {
    let mut engine = TemplateEngine::new();
    engine.enable_conditions(enabled);
    engine
}

#[test]
fn template_free_input_round_trips() {
    let source = concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>",
        "<!-- Generated with glade -->",
        "<interface>",
        "<requires lib=\"gtk+\" version=\"3.12\"/>",
        "<object class=\"GtkButton\" id=\"bt\">",
        "<property name=\"label\" translatable=\"yes\">_Quit</property>",
        "</object>",
        "</interface>",
    );
    let out = engine_with(&[]).build(source).unwrap();
    assert_eq!(out, source);
}

#[test]
fn if_else_keeps_exactly_one_branch() {
    let source =
        r#"<interface><if condition="a&amp;b"><x/><else><y/></else></if></interface>"#;
    assert_eq!(
        engine_with(&["a", "b"]).build(source).unwrap(),
        "<interface><x/></interface>"
    );
    assert_eq!(
        engine_with(&["a"]).build(source).unwrap(),
        "<interface><y/></interface>"
    );
}

#[test]
fn copyobject_clones_by_id() {
    let out = engine_with(&[])
        .build(r#"<interface><object id="src"><child/></object><copyobject id="src"/></interface>"#)
        .unwrap();
    assert_eq!(
        out,
        r#"<interface><object id="src"><child/></object><object id="src"><child/></object></interface>"#
    );
}

#[test]
fn icon_paths_are_remapped() {
    let mut engine = engine_with(&[]);
    engine.replace_icon_path("old/", "new/");
    let out = engine
        .build(r#"<interface><property name="pixbuf">old/icon.png</property></interface>"#)
        .unwrap();
    assert_eq!(
        out,
        r#"<interface><property name="pixbuf">new/icon.png</property></interface>"#
    );
}

#[test]
fn if_attribute_prunes_or_keeps_elements() {
    let source = r#"<interface><button if="x|y"/></interface>"#;
    assert_eq!(engine_with(&[]).build(source).unwrap(), "<interface/>");
    assert_eq!(
        engine_with(&["y"]).build(source).unwrap(),
        "<interface><button/></interface>"
    );
}

#[test]
fn cyclic_copyobject_references_still_build() {
    // A copyobject for an id that (directly or through another clone)
    // contains itself must not expand without bound; the offending tags
    // are left in place and the build completes.
    let out = engine_with(&[])
        .build(
            r#"<interface><object id="a"><copyobject id="a"/></object><copyobject id="a"/></interface>"#,
        )
        .unwrap();
    assert_eq!(out.matches(r#"<object id="a">"#).count(), 2);
    assert_eq!(out.matches(r#"<copyobject id="a"/>"#).count(), 2);
}

#[test]
fn build_output_is_stable_under_rebuilding() {
    // A resolved document contains no templating constructs, so feeding it
    // back through the same engine must be a fixed point.
    let source = r#"<interface><if condition="a"><x if="b"/><else><y/></else></if><button if="a"/></interface>"#;
    let engine = engine_with(&["a", "b"]);
    let once = engine.build(source).unwrap();
    assert_eq!(engine.build(&once).unwrap(), once);
}

#[test]
fn templating_constructs_never_leak_into_output() {
    let source = concat!(
        "<interface>",
        r#"<if condition="on"><object id="kept"><if condition="off"><gone/></if></object></if>"#,
        r#"<if condition="off"><object id="dropped"/></if>"#,
        r#"<box if="on"><label if="off"/></box>"#,
        "</interface>",
    );
    let out = engine_with(&["on"]).build(source).unwrap();
    assert!(!out.contains("<if"));
    assert!(!out.contains("<else"));
    assert!(!out.contains("if="));
    assert!(out.contains(r#"<object id="kept"/>"#));
    assert!(!out.contains("dropped"));
    assert!(!out.contains("gone"));
    assert!(out.contains("<box/>"));
}

struct CapturingSink {
    documents: Vec<String>,
}

impl BuilderSink for CapturingSink {
    fn add_from_string(&mut self, xml: &str) {
        self.documents.push(xml.to_string());
    }
}

#[test]
fn loader_feeds_resolved_xml_to_the_sink() {
    let loader = UiLoader::new(engine_with(&["nice"]));
    let mut sink = CapturingSink { documents: vec![] };
    loader
        .load_string(
            r#"<interface><if condition="nice"><x/></if></interface>"#,
            &mut sink,
        )
        .unwrap();
    assert_eq!(sink.documents, vec!["<interface><x/></interface>".to_string()]);
}

#[test]
fn loader_writes_the_debug_dump() {
    let dir = tempfile::tempdir().unwrap();
    let dump = dir.path().join("output.glade");
    let loader = UiLoader::new(engine_with(&[])).with_debug_dump(&dump);
    let mut sink = CapturingSink { documents: vec![] };
    loader.load_string("<interface/>", &mut sink).unwrap();
    assert_eq!(std::fs::read_to_string(&dump).unwrap(), "<interface/>");
}

#[test]
fn loader_reports_missing_files() {
    let loader = UiLoader::new(TemplateEngine::new());
    let mut sink = CapturingSink { documents: vec![] };
    let err = loader
        .load_file(std::path::Path::new("/no/such/file.glade"), &mut sink)
        .unwrap_err();
    assert!(err.to_string().contains("/no/such/file.glade"));
    assert!(sink.documents.is_empty());
}

#[test]
fn full_platform_adaptive_description() {
    // One description file, two platforms.
    let source = concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>",
        "<interface>",
        r#"<object class="GtkWindow" id="main">"#,
        r#"<property name="icon">icons/app.png</property>"#,
        r#"<if condition="windows|macos"><child><object class="GtkMenuBar" id="menu"/></child>"#,
        r#"<else><child><object class="GtkHeaderBar" id="header"/></child></else></if>"#,
        r#"<child><object class="GtkButton" id="proto"/></child>"#,
        "</object>",
        r#"<copyobject id="proto"/>"#,
        "</interface>",
    );

    let mut linux = engine_with(&["linux"]);
    linux.replace_icon_path("icons", "/usr/share/app/icons");
    let out = linux.build(source).unwrap();
    assert!(out.contains("GtkHeaderBar"));
    assert!(!out.contains("GtkMenuBar"));
    assert!(out.contains("/usr/share/app/icons/app.png"));
    assert_eq!(out.matches(r#"<object class="GtkButton" id="proto"/>"#).count(), 2);

    let windows = engine_with(&["windows"]);
    let out = windows.build(source).unwrap();
    assert!(out.contains("GtkMenuBar"));
    assert!(!out.contains("GtkHeaderBar"));
    assert!(out.contains("icons/app.png"));
}
