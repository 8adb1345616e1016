mod common;

use common::{ReportFixture, TestResult};
use std::fs;
use texreport::{ColorStyle, ReportError, ReportFont, ReportSettings};

#[test]
fn test_settings_load_from_file_and_validate() -> TestResult {
    let fixture = ReportFixture::new()?;
    let json = serde_json::json!({
        "author": "Modeling Team",
        "title": "Study Report",
        "subTitle": "Simulation Results",
        "keywords": ["PK"],
        "software": "Suite",
        "softwareVersion": "11.2",
        "templateFolder": fixture.template_folder,
        "contentFileName": "content",
        "font": "Helvetica",
        "colorStyle": "BlackAndWhite",
        "draft": true,
        "saveArtifacts": true
    });
    let path = fixture.path().join("settings.json");
    fs::write(&path, serde_json::to_string_pretty(&json)?)?;

    let settings = ReportSettings::from_file(&path)?;
    settings.validate()?;

    assert_eq!(settings.font, ReportFont::Helvetica);
    assert_eq!(settings.color_style, ColorStyle::BlackAndWhite);
    assert!(settings.draft);
    assert!(settings.save_artifacts);
    assert!(settings.delete_working_dir);
    assert_eq!(settings.number_of_compilations, 3);
    Ok(())
}

#[test]
fn test_settings_round_trip_uses_camel_case() -> TestResult {
    let fixture = ReportFixture::new()?;
    let json = serde_json::to_value(fixture.settings())?;

    assert_eq!(json["subTitle"], "Simulation Results");
    assert_eq!(json["numberOfCompilations"], 3);
    assert_eq!(json["colorStyle"], "Color");
    Ok(())
}

#[test]
fn test_malformed_settings_are_a_json_error() {
    let result = ReportSettings::from_json("{\"author\": 3}");
    assert!(matches!(result, Err(ReportError::Json(_))));
}

#[test]
fn test_template_folder_without_layout_is_rejected() -> TestResult {
    let fixture = ReportFixture::new()?;
    let empty = fixture.path().join("Empty");
    fs::create_dir_all(&empty)?;
    let settings = ReportSettings {
        template_folder: empty,
        ..fixture.settings()
    };

    match settings.validate() {
        Err(ReportError::Settings(message)) => assert!(message.contains("Empty.tex")),
        other => panic!("unexpected result: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_implement_fills_fixture_template() -> TestResult {
    let fixture = ReportFixture::new()?;
    let target = fixture.path().join("report.tex");
    fs::copy(fixture.settings().template_full_path()?, &target)?;

    fixture.settings().implement(&target)?;

    let source = fs::read_to_string(&target)?;
    assert!(!source.contains('@'));
    assert!(source.contains("\\title{Study Report}"));
    assert!(source.contains("\\font{Default}"));
    Ok(())
}
