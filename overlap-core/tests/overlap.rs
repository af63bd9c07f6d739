use overlap_core::{Axis, BoxError, CanonicalBox, RawBox, normalize, overlaps};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn raw(value: serde_json::Value) -> RawBox {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_grid_scenarios() {
    init_tracing();

    let a = raw(json!({ "x": 0, "y": 1, "width": 2, "height": 3 }));
    let cases = [
        (json!({ "x": 0, "y": 1, "width": 1, "height": 1 }), true),
        (json!({ "x": 0, "y": 0, "width": 1, "height": 1 }), false),
        (json!({ "x": 0, "y": 3, "width": 1, "height": 1 }), true),
        (json!({ "x": 0, "y": 4, "width": 1, "height": 1 }), false),
        (json!({ "x": -1, "y": 1, "width": 1, "height": 1 }), false),
        (json!({ "x": 1, "y": 1, "width": 1, "height": 1 }), true),
        (json!({ "x": 2, "y": 1, "width": 1, "height": 1 }), false),
    ];

    for (b, expected) in cases {
        let b = raw(b);
        assert_eq!(overlaps(&a, &b).unwrap(), expected, "{b:?}");
        assert_eq!(overlaps(&b, &a).unwrap(), expected, "{b:?} reversed");
    }
}

#[test]
fn test_conventions_agree() {
    init_tracing();

    let edges = raw(json!({ "top": 1, "left": 0, "bottom": 4, "right": 2 }));
    let xywh = raw(json!({ "x": 0, "y": 1, "width": 2, "height": 3 }));
    assert_eq!(normalize(&edges).unwrap(), normalize(&xywh).unwrap());

    let probe = raw(json!({ "top": 2, "left": 1, "bottom": 3, "right": 5 }));
    assert_eq!(
        overlaps(&edges, &probe).unwrap(),
        overlaps(&xywh, &probe).unwrap()
    );
}

#[test]
fn test_adjacent_boxes() {
    let left = CanonicalBox::try_new(0.0, 0.0, 10.0, 10.0).unwrap();
    let right = CanonicalBox::try_new(0.0, 10.0, 10.0, 20.0).unwrap();
    let below = CanonicalBox::try_new(10.0, 0.0, 20.0, 10.0).unwrap();
    let diagonal = CanonicalBox::try_new(10.0, 10.0, 20.0, 20.0).unwrap();

    for other in [right, below, diagonal] {
        assert!(!left.overlaps(&other));
        assert!(!other.overlaps(&left));
    }
    assert!(Axis::Vertical.overlaps(&left, &right));
    assert!(!Axis::Horizontal.overlaps(&left, &right));
}

#[test]
fn test_errors_name_fields() {
    let cases = [
        (json!({ "left": 2, "bottom": 3, "right": 4 }), "top"),
        (json!({ "top": 1, "bottom": 3, "right": 4 }), "left"),
        (json!({ "top": 1, "left": 2, "right": 4 }), "bottom"),
        (json!({ "top": 1, "left": 2, "bottom": 3 }), "right"),
        (json!({ "top": 3.1, "left": 2, "bottom": 3, "right": 4 }), "less than"),
        (json!({ "top": 1, "left": 4.1, "bottom": 3, "right": 4 }), "less than"),
    ];

    for (value, needle) in cases {
        let err = normalize(&raw(value)).unwrap_err();
        assert!(err.to_string().contains(needle), "{err}");
    }
}

#[test]
fn test_json_surface() {
    let a = RawBox::from_json(r#"{"top": 0, "left": 0, "width": 4, "height": 4}"#).unwrap();
    let b = RawBox::from_json(r#"{"x": 2, "y": 2, "right": 6, "bottom": 6}"#).unwrap();
    assert!(overlaps(&a, &b).unwrap());

    let err = RawBox::from_json("42").unwrap_err();
    assert!(matches!(err, BoxError::Json { .. }));
}
