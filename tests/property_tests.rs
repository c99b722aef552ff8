use ini_reader::{IniError, IniReader};
use proptest::prelude::*;

/// 节名：不含 `]`、换行，不以注释符开头
fn section_name() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_ .]{0,12}"
}

/// 键：不含 `=`，去除首尾空白后非空
fn item_key() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,8}"
}

/// 值：不含换行，首尾无空白
fn item_value() -> impl Strategy<Value = String> {
    "([a-zA-Z0-9_/=.,]([a-zA-Z0-9_/=., ]{0,16}[a-zA-Z0-9_/=.,])?)?"
}

fn sections() -> impl Strategy<Value = Vec<(String, Vec<(String, String)>)>> {
    prop::collection::btree_map(
        section_name(),
        prop::collection::vec((item_key(), item_value()), 1..6),
        1..6,
    )
    .prop_map(|map| map.into_iter().collect::<Vec<_>>())
}

fn render(sections: &[(String, Vec<(String, String)>)]) -> String {
    let mut text = String::new();
    for (name, items) in sections {
        text.push_str(&format!("[{}]\n", name));
        for (key, value) in items {
            text.push_str(&format!("{}={}\n", key, value));
        }
    }
    text
}

proptest! {
    #[test]
    fn test_serializer_roundtrip(sections in sections()) {
        let mut ini = IniReader::new();
        ini.parse(&render(&sections)).unwrap();

        let mut reparsed = IniReader::new();
        reparsed.parse(&ini.to_text().unwrap()).unwrap();

        prop_assert_eq!(reparsed.document(), ini.document());
        prop_assert_eq!(ini.section_count(), sections.len());
    }

    #[test]
    fn test_parsed_items_keep_order(sections in sections()) {
        let mut ini = IniReader::new();
        ini.parse(&render(&sections)).unwrap();

        for (name, items) in &sections {
            let group = ini.get_items(name).unwrap();
            let parsed: Vec<(String, String)> = group
                .iter()
                .map(|item| (item.key.clone(), item.value.clone()))
                .collect();
            prop_assert_eq!(&parsed, items);
        }
    }

    #[test]
    fn test_duplicate_section_always_fails(sections in sections(), pick in any::<prop::sample::Index>()) {
        let mut with_duplicate = sections.clone();
        let duplicate = with_duplicate[pick.index(sections.len())].clone();
        with_duplicate.push(duplicate);

        let mut ini = IniReader::new();
        let result = ini.parse(&render(&with_duplicate));

        prop_assert!(matches!(result, Err(IniError::DuplicateSection(_))));
        prop_assert!(!ini.is_parsed());
        prop_assert_eq!(ini.section_count(), 0);
    }

    #[test]
    fn test_filters(
        sections in sections(),
        include_mask in prop::collection::vec(any::<bool>(), 6),
        exclude_mask in prop::collection::vec(any::<bool>(), 6),
    ) {
        let mut ini = IniReader::new();
        let mut included = Vec::new();
        let mut excluded = Vec::new();
        for (i, (name, _)) in sections.iter().enumerate() {
            if include_mask[i] {
                ini.include_section(name.as_str());
                included.push(name.clone());
            }
            if exclude_mask[i] {
                ini.exclude_section(name.as_str());
                excluded.push(name.clone());
            }
        }

        ini.parse(&render(&sections)).unwrap();

        for name in ini.sections() {
            prop_assert!(!excluded.iter().any(|e| e == name));
            if !included.is_empty() {
                prop_assert!(included.iter().any(|i| i == name));
            }
        }
        for (name, _) in &sections {
            let wanted = (included.is_empty() || included.contains(name)) && !excluded.contains(name);
            prop_assert_eq!(ini.exists(name), wanted);
        }
    }

    #[test]
    fn test_set_then_get(section in section_name(), key in item_key(), values in prop::collection::vec(item_value(), 1..4)) {
        let mut ini = IniReader::new();
        for value in &values {
            ini.set(&section, key.as_str(), value.as_str());
        }

        prop_assert_eq!(ini.get(&section, &key), Some(values[0].as_str()));
        prop_assert_eq!(ini.get_all(&section, &key).unwrap().len(), values.len());
    }

    #[test]
    fn test_erase_semantics(key in item_key(), count in 1usize..5) {
        let mut ini = IniReader::new();
        for i in 0..count {
            ini.set("s", key.as_str(), i.to_string());
        }
        // 生成的键都以字母开头，不会与这个键互为前缀
        ini.set("s", "9other", "x");

        ini.erase_first("s", &key).unwrap();
        prop_assert_eq!(ini.get_all("s", &key).unwrap().len(), count - 1);
        prop_assert_eq!(ini.item_count("s"), count);

        let removed = ini.erase("s", &key).unwrap();
        prop_assert_eq!(removed, count - 1);
        prop_assert!(!ini.item_exists("s", &key));
        prop_assert!(ini.item_exists("s", "9other"));
    }
}
