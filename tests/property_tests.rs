//! Property-based tests for scalar classification and round trips.
//!
//! These complement the example-based integration tests by exercising
//! the classifier and the printer across generated inputs.

use proptest::prelude::*;
use yamlite::{parse_str, to_yaml_string, Element, Item, Mapping, YamlParser};

fn reparse(item: &Item) -> Item {
    let text = to_yaml_string(item);
    match parse_str(&text) {
        Ok(back) => back,
        Err(e) => panic!("re-parse failed: {}\ntext was:\n{}", e, text),
    }
}

proptest! {
    #[test]
    fn prop_i64_survives_text(n in any::<i64>()) {
        let doc = format!("v: {}\n", n);
        let item = parse_str(&doc).unwrap();
        let map = item.value.as_map().unwrap();
        prop_assert_eq!(map.get("v").unwrap().value.as_int().unwrap(), n);
    }

    #[test]
    fn prop_finite_double_survives_roundtrip(
        d in any::<f64>().prop_filter("finite", |d| d.is_finite())
    ) {
        let mut map = Mapping::new();
        map.insert("v".to_string(), Item::new(Element::Double(d)));
        let back = reparse(&Item::new(Element::Map(map)));

        let v = &back.value.as_map().unwrap().get("v").unwrap().value;
        prop_assert!(v.is_double(), "kind changed: {:?}", v);
        prop_assert_eq!(v.as_double().unwrap(), d);
    }

    #[test]
    fn prop_classification_is_deterministic(
        value in "[a-zA-Z0-9 _.\\-]{0,24}"
    ) {
        let doc = format!("k: {}\n", value);
        let mut first = YamlParser::new();
        let mut second = YamlParser::new();
        let a = first.parse_str(&doc);
        let b = second.parse_str(&doc);
        match (a, b) {
            (Ok(()), Ok(())) => prop_assert_eq!(first.root().unwrap(), second.root().unwrap()),
            (Err(e1), Err(e2)) => prop_assert_eq!(e1, e2),
            (a, b) => prop_assert!(false, "diverged: {:?} vs {:?}", a, b),
        }
    }

    #[test]
    fn prop_classifier_assigns_one_scalar_kind(
        word in "[a-z][a-z0-9_]{0,15}"
    ) {
        // Plain words never classify as numbers or booleans unless they
        // are exactly "true"/"false".
        let doc = format!("k: {}\n", word);
        let item = parse_str(&doc).unwrap();
        let v = &item.value.as_map().unwrap().get("k").unwrap().value;
        if word == "true" || word == "false" {
            prop_assert!(v.is_bool());
        } else {
            prop_assert!(v.is_string());
            prop_assert_eq!(v.as_str().unwrap(), word.as_str());
        }
    }

    #[test]
    fn prop_int_map_roundtrip(
        entries in prop::collection::btree_map("[a-z]{1,8}", any::<i64>(), 0..12)
    ) {
        let map: Mapping = entries
            .iter()
            .map(|(k, v)| (k.clone(), Item::new(Element::Int(*v))))
            .collect();
        let original = Item::new(Element::Map(map));
        prop_assert_eq!(reparse(&original), original);
    }

    #[test]
    fn prop_string_seq_roundtrip(
        items in prop::collection::vec("[a-z][a-z ]{0,10}[a-z]", 1..10)
    ) {
        let seq: Vec<Item> = items
            .iter()
            .map(|s| Item::new(Element::String(s.clone())))
            .collect();
        let original = Item::new(Element::Seq(seq));
        prop_assert_eq!(reparse(&original), original);
    }
}
