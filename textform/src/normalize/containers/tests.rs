//! Tests for typed container normalization.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    rc::Rc,
    sync::Arc,
};

use uuid::Uuid;

use crate::{
    IdFormat, Key, Opaque,
    normalize::{Normalizer, traits::Normalize},
};

const FIRST: Uuid = Uuid::from_u128(0x0000_0001_0000_4000_8000_0000_0000_0001);
const SECOND: Uuid = Uuid::from_u128(0x0000_0002_0000_4000_8000_0000_0000_0002);
const FIRST_TEXT: &str = "00000001-0000-4000-8000-000000000001";
const SECOND_TEXT: &str = "00000002-0000-4000-8000-000000000002";

#[test]
fn uuid_becomes_canonical_string() {
    let text: String = FIRST.normalize();
    assert_eq!(text, FIRST_TEXT);
}

#[test]
fn normalized_string_is_fixed_point() {
    let text = FIRST.normalize();
    assert_eq!(text.clone().normalize(), text);
}

#[test]
fn passthrough_scalars_unchanged() {
    assert_eq!(0i32.normalize(), 0i32);
    assert_eq!(42u64.normalize(), 42u64);
    assert_eq!("x".to_string().normalize(), "x");
    assert!(true.normalize());
}

#[test]
fn option_maps_inner_identifier() {
    assert_eq!(Some(FIRST).normalize(), Some(FIRST_TEXT.to_string()));
    assert_eq!(None::<Uuid>.normalize(), None);
}

#[test]
fn result_maps_both_sides() {
    let ok: Result<Uuid, Uuid> = Ok(FIRST);
    assert_eq!(ok.normalize(), Ok(FIRST_TEXT.to_string()));

    let err: Result<Uuid, Uuid> = Err(SECOND);
    assert_eq!(err.normalize(), Err(SECOND_TEXT.to_string()));
}

#[test]
fn vec_preserves_order_and_length() {
    let normalized = vec![SECOND, FIRST, SECOND].normalize();
    assert_eq!(normalized, vec![SECOND_TEXT, FIRST_TEXT, SECOND_TEXT]);
}

#[test]
fn vecdeque_and_array_map_elements() {
    let deque: VecDeque<Uuid> = [FIRST].into_iter().collect();
    assert_eq!(deque.normalize(), VecDeque::from([FIRST_TEXT.to_string()]));

    let array = [FIRST, SECOND].normalize();
    assert_eq!(array, [FIRST_TEXT.to_string(), SECOND_TEXT.to_string()]);
}

#[test]
fn empty_containers_stay_empty() {
    assert!(Vec::<Uuid>::new().normalize().is_empty());
    assert!(BTreeMap::<String, Uuid>::new().normalize().is_empty());
}

#[test]
fn smart_pointers_rebuild_inner() {
    assert_eq!(*Box::new(FIRST).normalize(), FIRST_TEXT);
    assert_eq!(*Arc::new(FIRST).normalize(), FIRST_TEXT);
    assert_eq!(*Rc::new(SECOND).normalize(), SECOND_TEXT);
}

#[test]
fn shared_arc_leaves_other_handles_untouched() {
    let shared = Arc::new(vec![FIRST]);
    let normalized = Arc::clone(&shared).normalize();
    assert_eq!(*normalized, vec![FIRST_TEXT.to_string()]);
    assert_eq!(*shared, vec![FIRST]);
}

#[test]
fn hashmap_normalizes_values() {
    let mut runs: HashMap<String, Uuid> = HashMap::new();
    runs.insert("latest".into(), FIRST);
    let normalized = runs.normalize();
    assert_eq!(normalized["latest"], FIRST_TEXT);
}

#[test]
fn map_keys_are_never_normalized() {
    let mut owners: BTreeMap<Uuid, Uuid> = BTreeMap::new();
    owners.insert(FIRST, SECOND);
    let normalized: BTreeMap<Uuid, String> = owners.normalize();
    assert_eq!(normalized.get(&FIRST).map(String::as_str), Some(SECOND_TEXT));
}

#[test]
fn sets_keep_every_element() {
    let ids: HashSet<Uuid> = [FIRST, SECOND].into_iter().collect();
    let normalized = ids.normalize();
    assert_eq!(normalized.len(), 2);
    assert!(normalized.contains(FIRST_TEXT));

    let ordered: BTreeSet<Uuid> = [SECOND, FIRST].into_iter().collect();
    let normalized: Vec<String> = ordered.normalize().into_iter().collect();
    assert_eq!(normalized, vec![FIRST_TEXT, SECOND_TEXT]);
}

#[test]
fn nested_typed_containers() {
    let mut batches: HashMap<&str, Vec<Option<Uuid>>> = HashMap::new();
    batches.insert("nightly", vec![Some(FIRST), None]);
    let normalized = batches.normalize();
    assert_eq!(
        normalized["nightly"],
        vec![Some(FIRST_TEXT.to_string()), None]
    );
}

#[test]
fn normalize_with_uses_configuration() {
    let braced = Normalizer::canonical().with_format(IdFormat::Braced);
    assert_eq!(
        vec![FIRST].normalize_with(&braced),
        vec![format!("{{{FIRST_TEXT}}}")]
    );
}

#[test]
fn keys_and_opaque_leaves_pass_through() {
    let key = Key::Uuid(FIRST);
    assert_eq!(key.clone().normalize(), key);

    let opaque = Opaque::new(7u8);
    assert!(opaque.clone().normalize().ptr_eq(&opaque));
}
