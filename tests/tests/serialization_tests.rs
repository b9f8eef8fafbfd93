//! Serialized forms of fields, points, groups and parameter specs

use bnpair_algorithms::ec::repr::PointRepr;
use bnpair_algorithms::field::repr::{ElementRepr, FieldRepr};
use bnpair_algorithms::group::repr::{SourceGroupRepr, TargetGroupRepr};
use bnpair_algorithms::{
    Affine, BarretoNaehrigParameterSpec, Field, Group, Jacobian, PairingKind, PairingSourceGroup,
    PairingTargetGroup, Point, Projective,
};
use bnpair_api::Error;
use bnpair_tests::{toy_group, toy_spec};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn through_json<T: serde::Serialize + serde::de::DeserializeOwned>(value: &T) -> T {
    let json = serde_json::to_string(value).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn test_field_tower_survives_json() {
    let bn = toy_group(PairingKind::Ate);
    let f12 = bn.gt().field();
    let repr: FieldRepr = through_json(&f12.to_repr());
    let decoded = Field::from_repr(&repr).unwrap();
    assert_eq!(&decoded, f12);
    assert_eq!(decoded.absolute_degree(), 12);
}

#[test]
fn test_prime_field_json_shape() {
    let fp = Field::prime(101u32.into()).unwrap();
    let json = serde_json::to_value(fp.to_repr()).unwrap();
    assert_eq!(json, serde_json::json!({ "characteristic": "101" }));

    let element = fp.from_i64(-1);
    let json = serde_json::to_value(element.to_repr()).unwrap();
    assert_eq!(json, serde_json::json!("100"));
}

#[test]
fn test_field_elements_survive_json() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let bn = toy_group(PairingKind::Ate);
    let f12 = bn.gt().field();
    for _ in 0..10 {
        let e = f12.random(&mut rng);
        let repr: ElementRepr = through_json(&e.to_repr());
        assert_eq!(f12.element_from_repr(&repr).unwrap(), e);
    }
}

#[test]
fn test_element_rejects_wrong_shape() {
    let bn = toy_group(PairingKind::Ate);
    let f2 = bn.g2().field();
    let bad = ElementRepr::Coefficients(vec![ElementRepr::Integer("1".into())]);
    assert!(matches!(
        f2.element_from_repr(&bad),
        Err(Error::Serialization { .. })
    ));
    let bad = ElementRepr::Integer("not a number".into());
    assert!(matches!(
        f2.prime_field().element_from_repr(&bad),
        Err(Error::Serialization { .. })
    ));
}

#[test]
fn test_points_survive_json_in_every_coordinate_system() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let bn = toy_group(PairingKind::Tate);
    for group in [bn.g1(), bn.g2()] {
        let curve = group.curve();
        let p = group.uniformly_random_element(&mut rng).unwrap();

        let repr: PointRepr = through_json(&p.to_repr());
        assert_eq!(Point::<Jacobian>::from_repr(curve, &repr).unwrap(), p);

        let affine: Point<Affine> = p.convert();
        let repr: PointRepr = through_json(&affine.to_repr());
        assert_eq!(Point::<Affine>::from_repr(curve, &repr).unwrap(), affine);

        let projective: Point<Projective> = p.convert();
        let repr: PointRepr = through_json(&projective.to_repr());
        assert_eq!(
            Point::<Projective>::from_repr(curve, &repr).unwrap(),
            projective
        );
    }
}

#[test]
fn test_neutral_point_survives_json() {
    let bn = toy_group(PairingKind::Ate);
    let o = bn.g1().neutral_element();
    let repr: PointRepr = through_json(&o.to_repr());
    let decoded = Point::<Jacobian>::from_repr(bn.g1().curve(), &repr).unwrap();
    assert!(decoded.is_neutral());
}

#[test]
fn test_point_off_curve_rejected() {
    let bn = toy_group(PairingKind::Ate);
    let g = bn.g1().generator().unwrap();
    let mut repr = g.to_repr();
    repr.y = repr.x.clone();
    assert!(Point::<Jacobian>::from_repr(bn.g1().curve(), &repr).is_err());
}

#[test]
fn test_source_groups_survive_json() {
    let bn = toy_group(PairingKind::Ate);
    for group in [bn.g1(), bn.g2()] {
        let repr: SourceGroupRepr = through_json(&group.to_repr());
        let decoded = PairingSourceGroup::from_repr(&repr).unwrap();
        assert_eq!(&decoded, group);
        assert_eq!(decoded.generator().unwrap(), group.generator().unwrap());
    }
}

#[test]
fn test_source_group_json_uses_camel_case() {
    let bn = toy_group(PairingKind::Ate);
    let json = serde_json::to_value(bn.g1().to_repr()).unwrap();
    assert_eq!(json["size"], serde_json::json!("99709"));
    assert_eq!(json["cofactor"], serde_json::json!("1"));
    assert!(json.get("generator").is_some());
    assert!(json.get("a6").is_some());
}

#[test]
fn test_target_group_survives_json() {
    let bn = toy_group(PairingKind::Tate);
    let repr: TargetGroupRepr = through_json(&bn.gt().to_repr());
    let decoded = PairingTargetGroup::from_repr(&repr).unwrap();
    assert_eq!(&decoded, bn.gt());
    assert_eq!(decoded.size(), bn.gt().size());
}

#[test]
fn test_parameter_spec_json() {
    for kind in [PairingKind::Tate, PairingKind::Ate] {
        let spec = toy_spec(kind);
        let json = spec.to_json().unwrap();
        assert!(json.contains("\"characteristic\": \"100003\""));
        assert!(json.contains("\"hash\": \"SHA-256\""));
        assert_eq!(BarretoNaehrigParameterSpec::from_json(&json).unwrap(), spec);
    }
}

#[test]
fn test_named_spec_json() {
    let spec = BarretoNaehrigParameterSpec::named("BN254").unwrap();
    let decoded = BarretoNaehrigParameterSpec::from_json(&spec.to_json().unwrap()).unwrap();
    assert_eq!(decoded, spec);
}

#[test]
fn test_parameter_spec_rejects_malformed_json() {
    assert!(matches!(
        BarretoNaehrigParameterSpec::from_json("{\"characteristic\": 5}"),
        Err(Error::Serialization { .. })
    ));
    let mut value = serde_json::to_value(toy_spec(PairingKind::Ate)).unwrap();
    value["size"] = serde_json::json!("-3");
    assert!(matches!(
        BarretoNaehrigParameterSpec::from_json(&value.to_string()),
        Err(Error::Serialization { .. })
    ));
}
