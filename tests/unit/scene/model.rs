use super::*;

const SCENE: &str = r#"{
  "root": {
    "kind": "composite",
    "size": {"width": 20, "height": 10},
    "background": [255, 255, 255, 255],
    "children": [
      {"kind": "solid", "rect": {"min": {"x": 0, "y": 0}, "max": {"x": 4, "y": 2}},
       "color": [255, 0, 0, 255], "align": "right", "valign": "bottom"},
      null,
      {"kind": "solid", "rect": {"min": {"x": 1, "y": 1}, "max": {"x": 3, "y": 3}},
       "color": [0, 0, 255, 255], "align": 9}
    ]
  }
}"#;

#[test]
fn parses_and_builds_scene() {
    let scene = Scene::from_json_str(SCENE).unwrap();
    let layer = scene.build(".").unwrap();
    assert_eq!(layer.rect(), Rect::from_origin_size(Point::ZERO, Size::new(20, 10)));

    let img = layer.render();
    assert_eq!(img.dimensions(), (20, 10));
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(16, 8).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(19, 9).0, [255, 0, 0, 255]);
    // unknown numeric alignment keeps the child's own coordinates
    assert_eq!(img.get_pixel(1, 1).0, [0, 0, 255, 255]);
    assert_eq!(img.get_pixel(0, 1).0, [255, 255, 255, 255]);
}

#[test]
fn alignment_defaults_when_omitted() {
    let scene = Scene::from_json_str(SCENE).unwrap();
    let LayerDesc::Composite(root) = &scene.root else {
        panic!("root should be a composite");
    };
    assert!(!root.parallel);
    assert_eq!(root.origin, Point::ZERO);
    assert_eq!(root.align, Alignment::Default);
    assert_eq!(root.valign, VerticalAlignment::Default);
    assert!(root.children[1].is_none());
}

#[test]
fn json_round_trips_through_pretty_printer() {
    let scene = Scene::from_json_str(SCENE).unwrap();
    let text = scene.to_json_pretty().unwrap();
    let again = Scene::from_json_str(&text).unwrap();
    assert_eq!(
        again.build(".").unwrap().render(),
        scene.build(".").unwrap().render()
    );
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Scene::from_json_str("{\"root\": {\"kind\": \"triangle\"}}").unwrap_err();
    assert!(matches!(err, LayerError::Serde(_)));
}

#[test]
fn validation_reports_the_offending_node() {
    let text = r#"{"root": {"kind": "composite", "size": {"width": 5, "height": 5},
        "children": [null, {"kind": "solid",
            "rect": {"min": {"x": 4, "y": 0}, "max": {"x": 1, "y": 2}},
            "color": [0, 0, 0, 255]}]}}"#;
    let err = Scene::from_json_str(text).unwrap().validate().unwrap_err();
    assert!(matches!(err, LayerError::Validation(_)));
    assert!(err.to_string().contains("root.children[1]"));

    let text = r#"{"root": {"kind": "composite", "size": {"width": -1, "height": 5}}}"#;
    assert!(Scene::from_json_str(text).unwrap().build(".").is_err());

    let text = r#"{"root": {"kind": "image", "source": "  "}}"#;
    assert!(Scene::from_json_str(text).unwrap().validate().is_err());
}

#[test]
fn full_range_rect_passes_validation() {
    let text = r#"{"root": {"kind": "solid",
        "rect": {"min": {"x": -2147483648, "y": 0}, "max": {"x": 2147483647, "y": 1}},
        "color": [0, 0, 0, 255]}}"#;
    Scene::from_json_str(text).unwrap().validate().unwrap();
}

#[test]
fn image_sources_resolve_against_assets_root() {
    let dir = std::path::PathBuf::from("target")
        .join("unit_scene")
        .join("assets");
    std::fs::create_dir_all(&dir).unwrap();
    image::RgbaImage::from_pixel(3, 3, image::Rgba([0, 255, 0, 255]))
        .save(dir.join("dot.png"))
        .unwrap();

    let text = r#"{"root": {"kind": "composite", "size": {"width": 9, "height": 9},
        "children": [{"kind": "image", "source": "dot.png",
                      "align": "center", "valign": "middle"}]}}"#;
    let layer = Scene::from_json_str(text).unwrap().build(&dir).unwrap();
    let img = layer.render();
    assert_eq!(img.get_pixel(3, 3).0, [0, 255, 0, 255]);
    assert_eq!(img.get_pixel(5, 5).0, [0, 255, 0, 255]);
    assert_eq!(img.get_pixel(2, 3).0, [0, 0, 0, 0]);

    let missing = r#"{"root": {"kind": "image", "source": "nope.png"}}"#;
    assert!(Scene::from_json_str(missing).unwrap().build(&dir).is_err());
}
