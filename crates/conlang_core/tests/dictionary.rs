use conlang_core::{Dictionary, Entry, EntryPatch};

#[test]
fn add_then_lookup_returns_all_fields() {
    let mut dictionary = Dictionary::new();
    dictionary.add("cat", "kat", "small feline", "kæt").unwrap();

    assert!(dictionary.is_word("cat"));
    assert_eq!(
        dictionary.lookup("cat"),
        Some(&Entry {
            spelling: "cat".to_string(),
            definition: "small feline".to_string(),
            sound: "kat".to_string(),
            change: "kæt".to_string(),
        })
    );
    assert_eq!(dictionary.define("cat"), Some("small feline"));
}

#[test]
fn update_only_touches_present_fields() {
    let mut dictionary = Dictionary::new();
    dictionary.add("cat", "kat", "small feline", "kæt").unwrap();

    let entry = dictionary
        .update("cat", EntryPatch::new().sound("kæt"))
        .unwrap();
    assert_eq!(entry.sound, "kæt");
    assert_eq!(entry.definition, "small feline");
    assert_eq!(entry.change, "kæt");

    let entry = dictionary.update("cat", EntryPatch::new()).unwrap();
    assert_eq!(entry.definition, "small feline");
}

#[test]
fn operations_on_unknown_headwords_are_no_ops() {
    let mut dictionary = Dictionary::new();
    assert!(dictionary
        .update("ghost", EntryPatch::new().definition("x"))
        .is_none());
    assert!(dictionary.lookup("ghost").is_none());
    assert!(dictionary.define("ghost").is_none());
    assert!(dictionary.redefine("ghost", "x").is_none());
    assert!(dictionary.change_sound("ghost", "a", "b").is_none());
    assert!(dictionary.remove("ghost").is_none());
    assert!(dictionary.is_empty());
}

#[test]
fn redefine_and_change_sound_replace_values() {
    let mut dictionary = Dictionary::new();
    dictionary.add("tree", "tri", "plant", "tri").unwrap();

    assert_eq!(
        dictionary.redefine("tree", "woody plant").unwrap().definition,
        "woody plant"
    );
    let entry = dictionary.change_sound("tree", "triː", "tʃriː").unwrap();
    assert_eq!(entry.sound, "triː");
    assert_eq!(entry.change, "tʃriː");
}

#[test]
fn respell_moves_entry_to_new_headword() {
    let mut dictionary = Dictionary::new();
    dictionary.add("colour", "kʌlə", "hue", "kʌlə").unwrap();

    let entry = dictionary.respell("colour", "color").unwrap().clone();
    assert_eq!(entry.spelling, "color");
    assert_eq!(entry.definition, "hue");
    assert!(!dictionary.is_word("colour"));
    assert_eq!(dictionary.headwords(), vec!["color"]);

    assert!(dictionary.respell("color", "").is_none());
    assert!(dictionary.is_word("color"));
}

#[test]
fn remove_returns_the_dropped_entry() {
    let mut dictionary = Dictionary::new();
    dictionary.add("a", "a", "first", "a").unwrap();
    dictionary.add("b", "b", "second", "b").unwrap();

    let removed = dictionary.remove("a").unwrap();
    assert_eq!(removed.definition, "first");
    assert_eq!(dictionary.len(), 1);
    assert_eq!(
        dictionary.entries().map(|e| e.spelling.as_str()).collect::<Vec<_>>(),
        vec!["b"]
    );
}

#[test]
fn entry_serialization_uses_expected_wire_fields() {
    let entry = Entry {
        spelling: "cat".to_string(),
        definition: "small feline".to_string(),
        sound: "kat".to_string(),
        change: "kæt".to_string(),
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["spelling"], "cat");
    assert_eq!(json["change"], "kæt");
    assert_eq!(serde_json::from_value::<Entry>(json).unwrap(), entry);
}
