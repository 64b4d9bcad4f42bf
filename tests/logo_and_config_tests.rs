mod common;

use common::fixtures::*;
use common::pdf_assertions::{color_image_count, soft_mask_count};
use common::{GeneratedPdf, TestResult, generate_with, generator_with_logos, init_logging};
use issue_form::{FormConfig, FormGenerator, FormSnapshot, InMemoryResourceProvider, PipelineError};
use std::fs;

#[test]
fn test_broken_logo_draws_marker_on_both_pages() -> TestResult {
    init_logging();
    let provider = InMemoryResourceProvider::new();
    provider.add("broken.png", b"definitely not a png".to_vec())?;
    let generator = generator_with_logos(provider);

    let mut snapshot = FormSnapshot::default();
    snapshot.selected_logo = "broken.png".into();
    let (form, pdf) = generate_with(&generator, &snapshot)?;

    assert_pdf_page_count!(pdf, 2);
    assert!(form.report.logo_error.is_some());
    for page in 1..=2 {
        assert!(
            pdf.page_text(page).iter().any(|s| s.starts_with("Logo error:")),
            "page {page} is missing the logo marker"
        );
    }
    assert_eq!(color_image_count(&pdf.doc), 0);
    Ok(())
}

#[test]
fn test_missing_logo_is_silently_omitted() -> TestResult {
    let generator = generator_with_logos(InMemoryResourceProvider::new());
    let mut snapshot = FormSnapshot::default();
    snapshot.selected_logo = "nowhere.png".into();
    let (form, pdf) = generate_with(&generator, &snapshot)?;

    assert_eq!(form.report.logo_error, None);
    assert_pdf_not_contains_text!(pdf, "Logo error");
    assert_pdf_page_count!(pdf, 2);
    Ok(())
}

#[test]
fn test_logo_from_directory_is_embedded_once() -> TestResult {
    init_logging();
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("demoforce_logo.png"), logo_png())?;

    let config = FormConfig {
        logos_dir: dir.path().to_path_buf(),
        ..FormConfig::default()
    };
    let generator = FormGenerator::new(config)?;
    assert_eq!(generator.logos().available(), vec!["demoforce_logo.png"]);

    let (form, pdf) = generate_with(&generator, &FormSnapshot::default())?;
    assert_eq!(form.report.logo_error, None);
    // shared by both page headers
    assert_eq!(color_image_count(&pdf.doc), 1);
    // the transparent corner keeps an alpha mask
    assert_eq!(soft_mask_count(&pdf.doc), 1);
    Ok(())
}

#[test]
fn test_explicit_selection_beats_default() -> TestResult {
    let provider = InMemoryResourceProvider::new();
    provider.add("demoforce_logo.png", b"junk".to_vec())?;
    provider.add("apex.png", logo_png())?;
    let generator = generator_with_logos(provider);

    let mut snapshot = FormSnapshot::default();
    snapshot.selected_logo = "apex.png".into();
    let (form, pdf) = generate_with(&generator, &snapshot)?;
    assert_eq!(form.report.logo_error, None);
    assert_eq!(color_image_count(&pdf.doc), 1);
    Ok(())
}

#[test]
fn test_config_file_overrides_labels() -> TestResult {
    init_logging();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("form.json");
    fs::write(
        &path,
        r#"{
            "document": { "heading": "KIT RECORD", "code": "HR-9" },
            "accounts": { "helpdesk_email": "it@example.test" }
        }"#,
    )?;

    let config = FormConfig::from_file(&path)?;
    let generator = FormGenerator::with_resources(
        config,
        std::sync::Arc::new(InMemoryResourceProvider::new()),
    )?;
    let form = generator.generate(&FormSnapshot::default())?;
    let pdf = GeneratedPdf::from_bytes(form.bytes)?;

    assert_page_shows!(pdf, 1, "KIT RECORD");
    assert_page_shows!(pdf, 1, "HR-9");
    assert_page_shows!(pdf, 2, "it@example.test");
    // untouched sections keep their defaults
    assert_page_shows!(pdf, 2, "NEW STARTER PASSWORDS");
    Ok(())
}

#[test]
fn test_unknown_config_keys_are_rejected() {
    let err = FormConfig::from_json(r#"{ "pagee": {} }"#).unwrap_err();
    assert!(matches!(err, PipelineError::Config(_)));
}

#[test]
fn test_missing_config_file_is_a_config_error() {
    let err = FormConfig::from_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, PipelineError::Config(_)));
}
