//! PDF fixtures shared by the facade's unit tests.

use lopdf::{Document, Object, ObjectId, Stream, dictionary};

fn checkbox(doc: &mut Document, parent: ObjectId, name: &str, on: &str) -> ObjectId {
    let on_stream = doc.add_object(Stream::new(dictionary! {}, b"0 g".to_vec()));
    let off_stream = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
    let mut states = lopdf::Dictionary::new();
    states.set("Off", Object::Reference(off_stream));
    states.set(on, Object::Reference(on_stream));
    doc.add_object(dictionary! {
        "T" => Object::string_literal(name),
        "FT" => "Btn",
        "Parent" => Object::Reference(parent),
        "AS" => "Off",
        "AP" => dictionary! { "N" => states },
    })
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

/// A form with one non-terminal root `form1` holding a text field, a plain
/// checkbox, and a synthetic yes/no pair.
pub(crate) fn form_pdf() -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let form1 = doc.new_object_id();
    let family = doc.add_object(dictionary! {
        "T" => Object::string_literal("FamilyName"),
        "FT" => "Tx",
        "Parent" => Object::Reference(form1),
    });
    let agree = checkbox(&mut doc, form1, "Agree", "Yes");
    let yes = checkbox(&mut doc, form1, "Question_Yes[0]", "1");
    let no = checkbox(&mut doc, form1, "Question_No[0]", "2");
    doc.objects.insert(
        form1,
        Object::Dictionary(dictionary! {
            "T" => Object::string_literal("form1"),
            "Kids" => vec![
                Object::Reference(family),
                Object::Reference(agree),
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

/// A valid PDF with no AcroForm.
pub(crate) fn plain_pdf() -> Vec<u8> {
    finish(Document::with_version("1.7"), None)
}
