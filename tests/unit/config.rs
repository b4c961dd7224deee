use super::*;

fn sample() -> CoverConfig {
    CoverConfig {
        width: 630,
        height: 1200,
        title: "Go编程完全指南".to_string(),
        subtitle: "构建高效、可靠的现代后端服务".to_string(),
        author: "AI生成 © 2024".to_string(),
        font_path: PathBuf::from("fonts/NotoSansSC-Regular.ttf"),
        output_path: PathBuf::from("cover_chinese.png"),
    }
}

#[test]
fn validate_checks_canvas() {
    assert!(sample().validate().is_ok());

    let mut c = sample();
    c.height = 0;
    assert!(matches!(c.validate(), Err(CoverError::Validation(_))));

    let mut c = sample();
    c.width = 70_000;
    assert!(c.validate().is_err());
}

#[test]
fn json_file_round_trips_and_requires_every_field() {
    let dir = PathBuf::from("target").join("unit_config");
    std::fs::create_dir_all(&dir).unwrap();

    let ok = dir.join("ok.json");
    std::fs::write(&ok, serde_json::to_string_pretty(&sample()).unwrap()).unwrap();
    assert_eq!(CoverConfig::from_json_file(&ok).unwrap(), sample());

    let partial = dir.join("partial.json");
    std::fs::write(&partial, r#"{"width": 10, "height": 10}"#).unwrap();
    assert!(matches!(
        CoverConfig::from_json_file(&partial),
        Err(CoverError::Validation(_))
    ));

    let zero = dir.join("zero.json");
    let mut c = sample();
    c.width = 0;
    std::fs::write(&zero, serde_json::to_string(&c).unwrap()).unwrap();
    assert!(CoverConfig::from_json_file(&zero).is_err());

    assert!(matches!(
        CoverConfig::from_json_file(&dir.join("missing.json")),
        Err(CoverError::Io { .. })
    ));
}
