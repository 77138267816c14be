//! Shared fixtures for CLI integration tests.

#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};

pub fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("formfill").unwrap();
    cmd.env_remove("FORMFILL_FORMS_DIR").env_remove("RUST_LOG");
    cmd
}

fn widget(doc: &mut Document, parent: ObjectId, name: Option<&str>, on: &str) -> ObjectId {
    let on_stream = doc.add_object(Stream::new(dictionary! {}, b"0 g".to_vec()));
    let off_stream = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
    let mut states = Dictionary::new();
    states.set("Off", Object::Reference(off_stream));
    states.set(on, Object::Reference(on_stream));
    let mut field = dictionary! {
        "Parent" => Object::Reference(parent),
        "AS" => "Off",
        "AP" => dictionary! { "N" => states },
    };
    if let Some(name) = name {
        field.set("T", Object::string_literal(name));
        field.set("FT", "Btn");
    }
    doc.add_object(field)
}

/// An I-130 style form:
///
/// - `form1.FamilyName` (text)
/// - `form1.Agree` (checkbox, on-state `Yes`)
/// - `form1.Married` (checkbox group, two unnamed widgets, on-state `1`)
/// - `form1.Question_Yes[0]` / `form1.Question_No[0]` (synthetic yes/no)
pub fn form_pdf() -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let form1 = doc.new_object_id();

    let family = doc.add_object(dictionary! {
        "T" => Object::string_literal("FamilyName"),
        "FT" => "Tx",
        "Parent" => Object::Reference(form1),
    });
    let agree = widget(&mut doc, form1, Some("Agree"), "Yes");

    let married = doc.new_object_id();
    let married_kids = vec![
        Object::Reference(widget(&mut doc, married, None, "1")),
        Object::Reference(widget(&mut doc, married, None, "1")),
    ];
    doc.objects.insert(
        married,
        Object::Dictionary(dictionary! {
            "T" => Object::string_literal("Married"),
            "FT" => "Btn",
            "Parent" => Object::Reference(form1),
            "Kids" => married_kids,
        }),
    );

    let yes = widget(&mut doc, form1, Some("Question_Yes[0]"), "1");
    let no = widget(&mut doc, form1, Some("Question_No[0]"), "2");

    doc.objects.insert(
        form1,
        Object::Dictionary(dictionary! {
            "T" => Object::string_literal("form1"),
            "Kids" => vec![
                Object::Reference(family),
                Object::Reference(agree),
                Object::Reference(married),
                Object::Reference(yes),
                Object::Reference(no),
            ],
        }),
    );
    let acroform = doc.add_object(dictionary! {
        "Fields" => vec![Object::Reference(form1)],
    });
    finish(doc, Some(acroform))
}

/// A valid PDF without an AcroForm.
pub fn plain_pdf() -> Vec<u8> {
    finish(Document::with_version("1.7"), None)
}

fn finish(mut doc: Document, acroform: Option<ObjectId>) -> Vec<u8> {
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => Vec::<Object>::new(),
        "Count" => Object::Integer(0),
    });
    let mut catalog = dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    };
    if let Some(id) = acroform {
        catalog.set("AcroForm", Object::Reference(id));
    }
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// A forms directory holding `i-130.pdf` and `plain.pdf`.
pub fn forms_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("i-130.pdf"), form_pdf()).unwrap();
    std::fs::write(dir.path().join("plain.pdf"), plain_pdf()).unwrap();
    dir
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

/// Find a field dictionary by fully-qualified name in a saved PDF.
pub fn field_dict(path: &Path, name: &str) -> Dictionary {
    let doc = Document::load(path).unwrap();
    let catalog = doc.catalog().unwrap();
    let acroform_id = catalog.get(b"AcroForm").unwrap().as_reference().unwrap();
    let acroform = doc.get_dictionary(acroform_id).unwrap();
    let fields = acroform.get(b"Fields").unwrap().as_array().unwrap();

    let mut stack: Vec<(ObjectId, String)> = fields
        .iter()
        .map(|f| (f.as_reference().unwrap(), String::new()))
        .collect();
    while let Some((id, prefix)) = stack.pop() {
        let dict = doc.get_dictionary(id).unwrap();
        let qualified = match dict.get(b"T") {
            Ok(Object::String(bytes, _)) => {
                let part = String::from_utf8_lossy(bytes);
                if prefix.is_empty() {
                    part.into_owned()
                } else {
                    format!("{prefix}.{part}")
                }
            }
            _ => prefix.clone(),
        };
        if qualified == name {
            return dict.clone();
        }
        if let Ok(kids) = dict.get(b"Kids").and_then(Object::as_array) {
            for kid in kids {
                stack.push((kid.as_reference().unwrap(), qualified.clone()));
            }
        }
    }
    panic!("field {name} not found");
}

/// The kid dictionaries of a field.
pub fn kid_dicts(path: &Path, name: &str) -> Vec<Dictionary> {
    let doc = Document::load(path).unwrap();
    let parent = field_dict(path, name);
    parent
        .get(b"Kids")
        .and_then(Object::as_array)
        .unwrap()
        .iter()
        .map(|kid| doc.get_dictionary(kid.as_reference().unwrap()).unwrap().clone())
        .collect()
}

pub fn name_of(dict: &Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key) {
        Ok(Object::Name(name)) => Some(String::from_utf8_lossy(name).into_owned()),
        _ => None,
    }
}
