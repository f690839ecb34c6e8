//! Fixture PDFs built with lopdf, one line of Helvetica text per page.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use lopdf::{Document, Object, Stream, dictionary};

/// Build a PDF whose pages each show one line of text.
pub fn pdf_with_pages(texts: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ];

    let mut page_ids = Vec::new();
    for text in texts {
        let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

        let resources = dictionary! {
            "Font" => dictionary! { "F1" => Object::Reference(font_id) },
        };

        page_ids.push(doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => media_box.clone(),
            "Contents" => Object::Reference(content_id),
            "Resources" => resources,
        }));
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(texts.len() as i64),
    });

    for &pid in &page_ids {
        if let Ok(page_obj) = doc.get_object_mut(pid) {
            if let Ok(dict) = page_obj.as_dict_mut() {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Write a fixture PDF into `dir` under `name` and return its path.
pub fn write_pdf(dir: &Path, name: &str, texts: &[&str]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, pdf_with_pages(texts)).unwrap();
    path
}

/// Count `--- PAGE n ---` headers and return the numbers in print order.
pub fn page_headers(report: &str) -> Vec<usize> {
    report
        .lines()
        .filter_map(|line| {
            line.strip_prefix("--- PAGE ")
                .and_then(|rest| rest.strip_suffix(" ---"))
                .and_then(|n| n.parse().ok())
        })
        .collect()
}
