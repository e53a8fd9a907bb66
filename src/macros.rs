#[macro_export]
macro_rules! yaml {
    // Handle null
    (null) => {
        $crate::Element::None
    };

    // Handle true
    (true) => {
        $crate::Element::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Element::Bool(false)
    };

    // Handle empty sequence
    ([]) => {
        $crate::Element::Seq(vec![])
    };

    // Handle non-empty sequence
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Element::Seq(vec![$($crate::Item::new($crate::yaml!($elem))),*])
    };

    // Handle empty mapping
    ({}) => {
        $crate::Element::Map($crate::Mapping::new())
    };

    // Handle non-empty mapping
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::Mapping::new();
        $(
            map.insert($key.to_string(), $crate::Item::new($crate::yaml!($value)));
        )*
        $crate::Element::Map(map)
    }};

    // Fallback for any expression with a From conversion
    ($other:expr) => {
        $crate::Element::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Element, Item, Mapping};

    #[test]
    fn test_yaml_macro_primitives() {
        assert_eq!(yaml!(null), Element::None);
        assert_eq!(yaml!(true), Element::Bool(true));
        assert_eq!(yaml!(false), Element::Bool(false));
        assert_eq!(yaml!(42), Element::Int(42));
        assert_eq!(yaml!(3.5), Element::Double(3.5));
        assert_eq!(yaml!("hello"), Element::String("hello".to_string()));
    }

    #[test]
    fn test_yaml_macro_sequences() {
        assert_eq!(yaml!([]), Element::Seq(vec![]));

        let seq = yaml!([1, 2, 3]);
        match seq {
            Element::Seq(items) => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[0], Item::new(Element::Int(1)));
                assert_eq!(items[1], Item::new(Element::Int(2)));
                assert_eq!(items[2], Item::new(Element::Int(3)));
            }
            _ => panic!("Expected sequence"),
        }
    }

    #[test]
    fn test_yaml_macro_mappings() {
        assert_eq!(yaml!({}), Element::Map(Mapping::new()));

        let map = yaml!({
            "name": "Alice",
            "age": 30
        });

        match map {
            Element::Map(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(
                    map.get("name"),
                    Some(&Item::new(Element::String("Alice".to_string())))
                );
                assert_eq!(map.get("age"), Some(&Item::new(Element::Int(30))));
            }
            _ => panic!("Expected mapping"),
        }
    }

    #[test]
    fn test_yaml_macro_nested() {
        let value = yaml!({
            "server": {
                "host": "localhost",
                "port": 8080
            },
            "tags": ["a", "b"]
        });

        let map = match value {
            Element::Map(map) => map,
            _ => panic!("Expected mapping"),
        };
        let server = map.get("server").unwrap().value.as_map().unwrap();
        assert_eq!(
            server.get("port").unwrap().value.as_int().unwrap(),
            8080
        );
        let tags = map.get("tags").unwrap().value.as_seq().unwrap();
        assert_eq!(tags.len(), 2);
    }
}
