use approx::assert_relative_eq;
use config::constants::RAD_TO_DEG;
use vector3d::{find_angle_in_triangle, Point, Vector3D, VectorError};

fn fixtures() -> (Vector3D, Vector3D) {
    (
        Vector3D::from_xyz(0.0, 0.0, 1.0),
        Vector3D::from_xyz(1.0, 0.0, 0.0),
    )
}

#[test]
fn default_construction() {
    let v = Vector3D::default();
    assert_eq!([v.x, v.y, v.z, v.w], [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn fixture_components() {
    let (v1, _) = fixtures();
    assert_eq!(v1.x, 0.0);
    assert_eq!(v1.y, 0.0);
    assert_eq!(v1.z, 1.0);
    assert_eq!(v1.w, 1.0);
}

#[test]
fn cross_product_is_perpendicular() {
    let (mut v1, v2) = fixtures();
    let result = v1.cross_product(&v2);
    assert_eq!(result.x, 0.0);
    assert_eq!(result.y, 1.0);
    assert_eq!(result.z, 0.0);
    assert_eq!(result.w, 1.0);

    let angle = find_angle_in_triangle(
        Point::new(0.0, 0.0),
        Point::new(v2.x, v2.y),
        Point::new(result.x, result.y),
    )
    .unwrap()
        * RAD_TO_DEG;
    assert_eq!(angle.round(), 90.0);
}

#[test]
fn cross_product_mutates_receiver() {
    let (mut v1, v2) = fixtures();
    let original = v1;
    let result = v1.cross_product(&v2);
    assert_ne!(v1, original);
    assert_eq!((v1.x, v1.y, v1.z), (result.x, result.y, result.z));
}

#[test]
fn get_length_is_squared_length() {
    let (mut v1, _) = fixtures();
    v1.x = 0.0;
    v1.y = 0.0;
    v1.z = 0.0;
    assert_eq!(v1.get_length(), 1.0);

    let ones = Vector3D::new(1.0, 1.0, 1.0, 1.0);
    assert_eq!(ones.get_length(), 4.0);
    assert_ne!(ones.get_length(), 2.0);
}

#[test]
fn get_length_rounding() {
    // x² + 1 == 1.23456 up to representation error
    let v = Vector3D::new(0.23456f64.sqrt(), 0.0, 0.0, 1.0);
    assert_relative_eq!(v.length_squared(), 1.23456, epsilon = 1e-12);
    assert_eq!(v.get_length_with_precision(2), 1.23);
    assert_eq!(v.get_length(), 1.23);
    assert_eq!(v.get_length_with_precision(0), 1.0);
}

#[test]
fn normalize_gives_unit_length() {
    let mut v = Vector3D::new(3.0, 3.0, 3.0, 0.0);
    v.normalize();
    assert_eq!(v.get_length(), 1.0);

    let (mut v1, _) = fixtures();
    v1.x = 3.0;
    v1.y = 3.0;
    v1.z = 3.0;
    v1.normalize();
    assert_eq!(v1.get_length(), 1.0);
}

#[test]
fn normalize_zero_vector() {
    let mut v = Vector3D::new(0.0, 0.0, 0.0, 0.0);
    v.normalize();
    assert_eq!([v.x, v.y, v.z, v.w], [0.0; 4]);
    assert!(!v.x.is_nan());
}

#[test]
fn clone_independence() {
    let a = Vector3D::new(1.0, 2.0, 3.0, 4.0);
    #[allow(clippy::clone_on_copy)]
    let mut b = a.clone();
    b.x = 99.0;
    assert_eq!(a.x, 1.0);
    assert_eq!(b.x, 99.0);
}

#[test]
fn to_json_round_trip() {
    let source = Vector3D::new(-7.25, 0.1, 1e-9, 42.0);
    let json = source.to_json();

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let object = parsed.as_object().unwrap();
    assert_eq!(object.len(), 4);
    assert_eq!(object["x"].as_f64(), Some(source.x));
    assert_eq!(object["y"].as_f64(), Some(source.y));
    assert_eq!(object["z"].as_f64(), Some(source.z));
    assert_eq!(object["w"].as_f64(), Some(source.w));

    assert_eq!(Vector3D::from_json(&json).unwrap(), source);
}

#[test]
fn to_json_non_finite_is_not_round_trippable() {
    let v = Vector3D::new(f64::NAN, 0.0, 0.0, 1.0);
    let json = v.to_json();
    assert!(json.contains("\"x\":null"));
    assert!(matches!(
        Vector3D::from_json(&json),
        Err(VectorError::Json(_))
    ));
}
