use paw_derive::api_model;
use serde_json::json;

#[api_model(deny_unknown_fields = false)]
#[derive(Clone, PartialEq, Eq)]
struct Lenient {
    reference_image_id: String,
}

#[api_model]
struct Strict {
    life_span: String,
}

#[api_model(rename_all = "camelCase")]
struct Camel {
    bred_for: String,
}

#[test]
fn api_model_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/api_model_pass.rs");
}

#[test]
fn lenient_model_ignores_unknown_keys() {
    let value: Lenient =
        serde_json::from_value(json!({ "reference_image_id": "26pHT3Qk7", "extra": 1 }))
            .expect("unknown keys are tolerated");
    assert_eq!(value, Lenient { reference_image_id: "26pHT3Qk7".to_owned() });
}

#[test]
fn strict_model_rejects_unknown_keys() {
    let res = serde_json::from_value::<Strict>(json!({ "life_span": "10 - 12 years", "x": 1 }));
    assert!(res.is_err());

    let ok: Strict = serde_json::from_value(json!({ "life_span": "10 - 12 years" })).unwrap();
    assert_eq!(ok.life_span, "10 - 12 years");
}

#[test]
fn rename_policy_is_applied() {
    let camel = Camel { bred_for: "Sheep guarding".to_owned() };
    assert_eq!(serde_json::to_value(&camel).unwrap(), json!({ "bredFor": "Sheep guarding" }));
}
