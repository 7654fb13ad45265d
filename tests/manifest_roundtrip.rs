// tests/manifest_roundtrip.rs
//
// Writing the manifest and reading it back must reproduce the id list
// (in order), the has_header flags, and the field sets.
//
use std::fs;
use std::path::PathBuf;

use license_scrape::manifest::Manifest;
use license_scrape::record::{LicenseRef, assemble};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("license_scrape_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn template(title: &str, id: &str, body: &str) -> String {
    format!("---\ntitle: {title}\nspdx-id: {id}\n---\n\n{body}\n")
}

#[test]
fn roundtrip_preserves_ids_headers_and_fields() {
    let mit = assemble(
        &LicenseRef::new("MIT License", "mit"),
        &template("MIT License", "MIT", "Copyright (c) [year] [fullname]"),
        |_| true,
    )
    .unwrap();
    let zero_bsd = assemble(
        &LicenseRef::new("BSD Zero Clause License", "0bsd"),
        &template("BSD Zero Clause License", "0BSD", "Copyright (c) <year>"),
        |_| false,
    )
    .unwrap();

    let manifest = Manifest::from_records(vec![mit, zero_bsd]);
    assert_eq!(manifest.ids, vec!["mit".to_string(), "0bsd".to_string()]);

    let dir = tmp_dir("roundtrip");
    let path = dir.join("licenses.manifest.json");
    manifest.write(&path).unwrap();

    let back = Manifest::read(&path).unwrap();
    assert_eq!(back.ids, manifest.ids);

    for (orig, read) in manifest.licenses.iter().zip(&back.licenses) {
        assert_eq!(read.spdx_id_lower, orig.spdx_id_lower);
        assert_eq!(read.has_header, orig.has_header);
        assert_eq!(read.fields, orig.fields);
        assert_eq!(read.nickname, orig.nickname);
        // Template text is not part of the manifest.
        assert_eq!(read.template, None);
    }
}

#[test]
fn manifest_json_shape_is_ids_plus_licenses() {
    let rec = assemble(
        &LicenseRef::new("MIT License", "mit"),
        &template("MIT License", "MIT", "Copyright (c) [year]"),
        |_| false,
    )
    .unwrap();

    let manifest = Manifest::from_records(vec![rec]);
    let json = serde_json::to_value(&manifest).unwrap();

    assert_eq!(json["ids"][0], "mit");
    assert_eq!(json["licenses"][0]["spdx_id"], "MIT");
    assert_eq!(json["licenses"][0]["has_header"], false);
    assert_eq!(json["licenses"][0]["fields"][0], "year");
    assert!(json["licenses"][0].get("template").is_none());
}
