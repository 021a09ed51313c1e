use conlang_core::{Environment, Item, LexiconError, Phoneme, Rule, RuleStore};
use std::collections::BTreeSet;

fn rule(source: &str, target: &str, env: &str) -> Rule {
    Rule::new(source, target, Environment::parse(env).unwrap()).unwrap()
}

#[test]
fn lifecycle_add_clear_and_snapshot() {
    let mut store = RuleStore::new();
    let first = store.add(Item::from(rule("p", "b", "V_V"))).unwrap();
    let second = store.add(Item::from(rule("t", "d", "V_V"))).unwrap();
    assert_ne!(first, second);

    let snapshot = store.clear();
    assert!(snapshot.read().contains_key(&first));
    assert!(snapshot.read().contains_key(&second));
    assert!(store.all().is_empty());
    assert!(store.is_empty());
}

#[test]
fn non_rules_are_rejected() {
    let mut store = RuleStore::new();
    assert!(!RuleStore::is_rule(&Item::from("p > b")));
    assert!(store.add(Item::from("p > b")).is_none());
    assert!(store
        .add(Item::from(Phoneme::bare("p").unwrap()))
        .is_none());
    assert!(store.is_empty());
}

#[test]
fn identifiers_never_collide_and_survive_updates() {
    let mut store = RuleStore::new();
    let ids = (0..64)
        .map(|_| store.insert(rule("k", "g", "V_V")))
        .collect::<BTreeSet<_>>();
    assert_eq!(ids.len(), 64);

    let id = *ids.iter().next().unwrap();
    let updated = store.update(id, Item::from(rule("k", "x", "_#"))).unwrap();
    assert_eq!(updated, id);
    assert_eq!(store.get(id).unwrap().target(), "x");
    assert_eq!(store.len(), 64);
}

#[test]
fn get_and_remove_unknown_ids() {
    let mut store = RuleStore::new();
    let missing = uuid::Uuid::new_v4();
    assert!(!store.has(missing));
    assert!(store.get(missing).is_none());
    assert!(matches!(
        store.try_get(missing),
        Err(LexiconError::UnknownKey(_))
    ));
    assert!(!store.remove(missing));
}

#[test]
fn describe_lists_each_rule() {
    let mut store = RuleStore::new();
    store.insert(rule("s", "z", "V_V"));
    assert_eq!(
        store.describe(),
        vec!["Change s to z when the sound is between a vowel and a vowel.".to_string()]
    );
}

#[test]
fn rules_round_trip_through_json() {
    let original = rule("p", "f", "#_");
    let json = serde_json::to_value(&original).unwrap();
    assert_eq!(json["source"], "p");
    assert_eq!(json["environment"], serde_json::json!(["boundary", "focus"]));
    assert_eq!(serde_json::from_value::<Rule>(json).unwrap(), original);
}

#[test]
fn deserialize_rejects_blank_source_or_target() {
    for (source, target) in [("", "b"), ("p", " "), ("", "")] {
        let value = serde_json::json!({
            "source": source,
            "target": target,
            "environment": ["focus"]
        });
        let err = serde_json::from_value::<Rule>(value).unwrap_err();
        assert!(
            err.to_string().contains("must not be blank"),
            "unexpected error: {err}"
        );
    }
}

#[test]
fn deserialized_rule_items_enter_the_store() {
    let value = serde_json::json!({
        "kind": "Rule",
        "value": {"source": "p", "target": "b", "environment": ["focus"]}
    });
    let item: Item = serde_json::from_value(value).unwrap();
    assert_eq!(item.as_rule().map(Rule::source), Some("p"));

    let mut store = RuleStore::new();
    let id = store.add(item).unwrap();
    assert_eq!(store.describe(), vec!["Change p to b in any environment.".to_string()]);
    assert!(store.has(id));
}

#[test]
fn deserialize_rejects_environment_without_focus() {
    let value = serde_json::json!({
        "source": "p",
        "target": "b",
        "environment": ["boundary"]
    });
    let err = serde_json::from_value::<Rule>(value).unwrap_err();
    assert!(
        err.to_string().contains("exactly one focus slot"),
        "unexpected error: {err}"
    );
}
