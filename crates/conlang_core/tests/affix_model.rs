use conlang_core::{Affix, AffixField, AffixPatch, Item, Kind, Tagged};

#[test]
fn set_keeps_fields_absent_from_patch() {
    let mut affix = Affix::new("un-", "", "neg", "not");
    affix.set(AffixPatch::new().suffix("-ed"));

    assert_eq!(affix.prefix(), "un-");
    assert_eq!(affix.suffix(), "-ed");
    assert_eq!(affix.category(), "neg");
    assert_eq!(affix.grammeme(), "not");
}

#[test]
fn set_replaces_every_present_field() {
    let mut affix = Affix::new("a-", "-b", "c", "d");
    let updated = affix
        .set(
            AffixPatch::new()
                .prefix("w-")
                .category("number")
                .grammeme("dual"),
        )
        .clone();

    assert_eq!(updated.circumfix(), ("w-", "-b"));
    assert_eq!(updated.grammar(), ("number", "dual"));
}

#[test]
fn clear_field_is_the_only_way_to_empty_by_name() {
    let mut affix = Affix::new("in-", "-ing", "aspect", "progressive");
    affix.clear_field(AffixField::Suffix);
    affix.clear_field(AffixField::Grammeme);
    assert_eq!(affix.circumfix(), ("in-", ""));
    assert_eq!(affix.grammar(), ("aspect", ""));
}

#[test]
fn affix_round_trips_through_json() {
    let affix = Affix::new("ge-", "-t", "tense", "past");
    let json = serde_json::to_value(&affix).unwrap();
    assert_eq!(json["prefix"], "ge-");
    assert_eq!(json["suffix"], "-t");
    assert_eq!(json["category"], "tense");
    assert_eq!(json["grammeme"], "past");
    assert_eq!(serde_json::from_value::<Affix>(json).unwrap(), affix);
}

#[test]
fn set_returns_the_full_record() {
    let mut affix = Affix::new("", "-s", "number", "plural");
    let record = affix.set(AffixPatch::new().grammeme("paucal")).clone();
    assert_eq!(record, Affix::new("", "-s", "number", "paucal"));
    assert_eq!(record.circumfix(), ("", "-s"));
    assert_eq!(record.grammar(), ("number", "paucal"));
}

#[test]
fn affix_items_are_tagged_as_affixes() {
    assert_eq!(Item::from(Affix::default()).kind(), Kind::Affix);
}
