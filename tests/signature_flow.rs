use std::io::Write;

use mailsig::exporter;
use mailsig::fields::{DEFAULT_EMAIL, DEFAULT_NAME, DEFAULT_TITLE};
use mailsig::template::TemplateSource;
use mailsig::{Field, FieldValues, Session};

fn write_template(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("mail.html");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        concat!(
            r#"<table><tr><td>"#,
            r#"<span style="font-weight:bold;">{name}</span>"#,
            r#"<span style="font-weight:400;">{title}</span>"#,
            r#"<a href="mailto:{email}">{email}</a>"#,
            r#"</td></tr></table>"#
        ),
        name = DEFAULT_NAME,
        title = DEFAULT_TITLE,
        email = DEFAULT_EMAIL,
    )
    .unwrap();
    path
}

#[test]
fn bind_and_export_full_signature() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = write_template(&dir);

    let fields = FieldValues {
        name: "Ayşe Kaya".to_string(),
        email: "ayse.kaya@acerpro.com.tr".to_string(),
        title: "Analist".to_string(),
    };

    let mut session = Session::new(fields);
    session
        .load_template(&TemplateSource::parse(template_path.to_str().unwrap()))
        .unwrap();

    let bound = session.bound_document().unwrap();
    assert!(bound.contains(">Ayşe Kaya</span>"));
    assert!(bound.contains(">Analist</span>"));
    assert!(bound.contains(r#"href="mailto:ayse.kaya@acerpro.com.tr""#));
    assert!(!bound.contains(DEFAULT_NAME));
    assert!(!bound.contains(DEFAULT_TITLE));
    assert!(!bound.contains(DEFAULT_EMAIL));

    let out_dir = tempfile::tempdir().unwrap();
    let outcome = exporter::export(bound, &session.fields().name, out_dir.path()).unwrap();

    assert_eq!(outcome.file_name, "ayse-kaya.html");
    let written = std::fs::read_to_string(out_dir.path().join("ayse-kaya.html")).unwrap();
    assert_eq!(written, session.bound_document().unwrap());
}

#[test]
fn later_edits_rebind_before_export() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = write_template(&dir);

    let mut session = Session::new(FieldValues::default());
    session
        .load_template(&TemplateSource::parse(template_path.to_str().unwrap()))
        .unwrap();

    session.set_field(Field::Name, "Mehmet Demir");
    session.set_field(Field::Name, "Ümit Öztürk");
    session.set_field(Field::Email, "umit.ozturk@acerpro.com.tr");

    let out_dir = tempfile::tempdir().unwrap();
    let outcome = exporter::export(
        session.bound_document().unwrap(),
        &session.fields().name,
        out_dir.path(),
    )
    .unwrap();

    assert_eq!(outcome.file_name, "umit-ozturk.html");
    let written = std::fs::read_to_string(&outcome.path).unwrap();
    assert!(written.contains("Ümit Öztürk"));
    assert!(!written.contains("Mehmet Demir"));
    assert_eq!(written.matches("umit.ozturk@acerpro.com.tr").count(), 2);
}
