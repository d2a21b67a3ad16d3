//! Property tests for the conversion rules.
//!
//! Values are generated as JSON and mirrored into the native, HCL and TOML
//! representations; every representation must produce the same outcome.

#![cfg(all(feature = "derive", feature = "json", feature = "toml", feature = "hcl"))]

mod common;

use proptest::prelude::*;
use serde_json::{json, Value};
use tessera_conversion::{convert, Color, DocumentValue, Enumeration};

use common::{to_hcl, to_native, to_toml};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumeration)]
enum TextAnchor {
    Center,
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

// ============ Generators ============

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1.0e9f64..1.0e9).prop_map(|n| json!(n)),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z#0-9(),% -]{0,12}".prop_map(Value::String),
    ]
}

fn document() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,4}", inner), 0..3)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

fn numbers(len: impl Into<prop::collection::SizeRange>) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, len)
}

/// Same outcome from every representation of `value`.
fn agree<T>(value: &Value) -> Result<(), TestCaseError>
where
    T: tessera_conversion::Convert + PartialEq + std::fmt::Debug,
{
    let expected = convert::<T>(value);
    prop_assert_eq!(&convert::<T>(&to_native(value)), &expected);
    prop_assert_eq!(&convert::<T>(&to_hcl(value)), &expected);
    if let Some(toml) = to_toml(value) {
        prop_assert_eq!(&convert::<T>(&toml), &expected);
    }
    Ok(())
}

// ============ Properties ============

proptest! {
    #[test]
    fn bool_converts_exactly_the_booleans(value in document()) {
        match DocumentValue::as_bool(&value) {
            Some(b) => {
                prop_assert_eq!(convert::<bool>(&value), Ok(b));
            }
            None => {
                let error = convert::<bool>(&value).unwrap_err();
                prop_assert_eq!(error.message(), "value must be a boolean");
            }
        }
    }

    #[test]
    fn pairs_reject_every_other_length(items in prop::collection::vec(leaf(), 0..8)) {
        prop_assume!(items.len() != 2);
        let error = convert::<[f64; 2]>(&Value::Array(items)).unwrap_err();
        prop_assert_eq!(error.message(), "value must be an array of two numbers");
    }

    #[test]
    fn quads_of_numbers_pass_through(items in numbers(4)) {
        let value = json!(&items);
        let quad = convert::<[f64; 4]>(&value).unwrap();
        prop_assert_eq!(quad.to_vec(), items);
    }

    #[test]
    fn sequences_of_numbers_pass_through(items in numbers(0..32)) {
        let value = json!(&items);
        prop_assert_eq!(convert::<Vec<f64>>(&value), Ok(items));
    }

    #[test]
    fn sequences_of_strings_keep_order(items in prop::collection::vec("[a-z]{0,6}", 0..16)) {
        let value = json!(&items);
        prop_assert_eq!(convert::<Vec<String>>(&value), Ok(items));
    }

    #[test]
    fn enumeration_names_round_trip((constant, name) in prop::sample::select(TextAnchor::NAMES)) {
        prop_assert_eq!(constant.name(), name);
        prop_assert_eq!(convert::<TextAnchor>(&json!(name)), Ok(constant));
    }

    #[test]
    fn color_parsing_never_panics(input in ".{0,24}") {
        let _ = Color::parse(&input);
    }

    #[test]
    fn representations_agree(value in document()) {
        agree::<bool>(&value)?;
        agree::<f64>(&value)?;
        agree::<String>(&value)?;
        agree::<TextAnchor>(&value)?;
        agree::<Color>(&value)?;
        agree::<[f64; 2]>(&value)?;
        agree::<[f32; 3]>(&value)?;
        agree::<[f64; 4]>(&value)?;
        agree::<Vec<f64>>(&value)?;
        agree::<Vec<String>>(&value)?;
    }
}

#[test]
fn every_anchor_has_a_distinct_name() {
    let mut names: Vec<&str> = TextAnchor::NAMES.iter().map(|(_, name)| *name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), TextAnchor::NAMES.len());
    assert!(names.contains(&"bottom-right"));
}
