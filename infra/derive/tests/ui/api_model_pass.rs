use paw_derive::api_model;

#[api_model(deny_unknown_fields = false)]
#[derive(Clone, PartialEq, Eq)]
pub struct Measure {
    pub imperial: String,
    pub metric: String,
}

#[api_model(rename_all = "camelCase")]
pub struct Strict {
    pub reference_image_id: String,
}

fn main() {}
