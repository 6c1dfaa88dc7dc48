//! Depth-first rebuild of value trees on an explicit work stack.
//!
//! Each container on the path from the root to the current node has one frame
//! holding the children already normalized and an iterator over the rest.
//! Nesting depth is bounded by heap memory, not by the thread's call stack.

use std::{collections::btree_map, mem, slice, vec};

use super::Normalizer;
use crate::{Key, Mapping, Value};

// =============================================================================
// Owned walk
// =============================================================================

enum OwnedFrame {
    Sequence {
        done: Vec<Value>,
        rest: vec::IntoIter<Value>,
    },
    Mapping {
        done: Vec<(Key, Value)>,
        key: Option<Key>,
        rest: btree_map::IntoIter<Key, Value>,
    },
}

impl OwnedFrame {
    fn next_child(&mut self) -> Option<Value> {
        match self {
            Self::Sequence { rest, .. } => rest.next(),
            Self::Mapping { key, rest, .. } => {
                let (next_key, value) = rest.next()?;
                *key = Some(next_key);
                Some(value)
            }
        }
    }

    fn accept(&mut self, value: Value) {
        match self {
            Self::Sequence { done, .. } => done.push(value),
            Self::Mapping { done, key, .. } => {
                if let Some(key) = key.take() {
                    done.push((key, value));
                }
            }
        }
    }

    fn finish(self) -> Value {
        match self {
            Self::Sequence { done, .. } => Value::Sequence(done),
            // Entries arrive in key order, so this is a bulk build.
            Self::Mapping { done, .. } => Value::Mapping(done.into_iter().collect::<Mapping>()),
        }
    }
}

/// Normalizes a leaf, or opens a frame for a container and returns `None`.
///
/// Container payloads are taken out of `value`, leaving an empty shell that
/// drops in constant time.
fn enter_owned(
    mut value: Value,
    normalizer: &Normalizer,
    stack: &mut Vec<OwnedFrame>,
) -> Option<Value> {
    let frame = match &mut value {
        Value::Sequence(items) => {
            let items = mem::take(items);
            Some(OwnedFrame::Sequence {
                done: Vec::with_capacity(items.len()),
                rest: items.into_iter(),
            })
        }
        Value::Mapping(map) => {
            let map = mem::take(map);
            Some(OwnedFrame::Mapping {
                done: Vec::with_capacity(map.len()),
                key: None,
                rest: map.into_iter(),
            })
        }
        Value::Uuid(id) => return Some(Value::Text(normalizer.format_id(*id))),
        _ => None,
    };
    match frame {
        Some(frame) => {
            stack.push(frame);
            None
        }
        None => Some(value),
    }
}

pub(super) fn normalize_owned(value: Value, normalizer: &Normalizer) -> Value {
    let mut stack = Vec::new();
    let mut ready = enter_owned(value, normalizer, &mut stack);
    while let Some(frame) = stack.last_mut() {
        if let Some(child) = ready.take() {
            frame.accept(child);
        }
        ready = match frame.next_child() {
            Some(child) => enter_owned(child, normalizer, &mut stack),
            None => stack.pop().map(OwnedFrame::finish),
        };
    }
    // The stack drains only after the root frame is finished into `ready`.
    ready.unwrap_or_default()
}

// =============================================================================
// Borrowed walk
// =============================================================================

enum BorrowedFrame<'a> {
    Sequence {
        done: Vec<Value>,
        rest: slice::Iter<'a, Value>,
    },
    Mapping {
        done: Vec<(Key, Value)>,
        key: Option<&'a Key>,
        rest: btree_map::Iter<'a, Key, Value>,
    },
}

impl<'a> BorrowedFrame<'a> {
    fn next_child(&mut self) -> Option<&'a Value> {
        match self {
            Self::Sequence { rest, .. } => rest.next(),
            Self::Mapping { key, rest, .. } => {
                let (next_key, value) = rest.next()?;
                *key = Some(next_key);
                Some(value)
            }
        }
    }

    fn accept(&mut self, value: Value) {
        match self {
            Self::Sequence { done, .. } => done.push(value),
            Self::Mapping { done, key, .. } => {
                if let Some(key) = key.take() {
                    done.push((key.clone(), value));
                }
            }
        }
    }

    fn finish(self) -> Value {
        match self {
            Self::Sequence { done, .. } => Value::Sequence(done),
            Self::Mapping { done, .. } => Value::Mapping(done.into_iter().collect::<Mapping>()),
        }
    }
}

fn enter_borrowed<'a>(
    value: &'a Value,
    normalizer: &Normalizer,
    stack: &mut Vec<BorrowedFrame<'a>>,
) -> Option<Value> {
    match value {
        Value::Sequence(items) => {
            stack.push(BorrowedFrame::Sequence {
                done: Vec::with_capacity(items.len()),
                rest: items.iter(),
            });
            None
        }
        Value::Mapping(map) => {
            stack.push(BorrowedFrame::Mapping {
                done: Vec::with_capacity(map.len()),
                key: None,
                rest: map.iter(),
            });
            None
        }
        Value::Uuid(id) => Some(Value::Text(normalizer.format_id(*id))),
        scalar => Some(scalar.clone()),
    }
}

pub(super) fn normalize_borrowed(value: &Value, normalizer: &Normalizer) -> Value {
    let mut stack = Vec::new();
    let mut ready = enter_borrowed(value, normalizer, &mut stack);
    while let Some(frame) = stack.last_mut() {
        if let Some(child) = ready.take() {
            frame.accept(child);
        }
        ready = match frame.next_child() {
            Some(child) => enter_borrowed(child, normalizer, &mut stack),
            None => stack.pop().map(BorrowedFrame::finish),
        };
    }
    ready.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::{Opaque, mapping, sequence};

    const CANONICAL: Normalizer = Normalizer::canonical();

    fn sample() -> Value {
        mapping! {
            "id" => Uuid::from_u128(1),
            "runs" => sequence![
                mapping! { "run" => Uuid::from_u128(2), "ok" => true },
                sequence![],
                mapping! {},
            ],
            "note" => Value::Null,
        }
    }

    #[test]
    fn owned_and_borrowed_walks_agree() {
        let input = sample();
        let borrowed = normalize_borrowed(&input, &CANONICAL);
        let owned = normalize_owned(input, &CANONICAL);
        assert_eq!(owned, borrowed);
    }

    #[test]
    fn leaf_root_is_returned_directly() {
        assert_eq!(normalize_owned(Value::Int(4), &CANONICAL), Value::Int(4));
        assert_eq!(
            normalize_owned(Value::Uuid(Uuid::nil()), &CANONICAL),
            Value::from("00000000-0000-0000-0000-000000000000")
        );
    }

    #[test]
    fn empty_containers_survive() {
        assert_eq!(normalize_owned(mapping! {}, &CANONICAL), mapping! {});
        assert_eq!(normalize_borrowed(&sequence![], &CANONICAL), sequence![]);
    }

    #[test]
    fn sibling_containers_keep_their_own_children() {
        let input = sequence![sequence![1, 2], sequence![3], 4];
        assert_eq!(normalize_owned(input.clone(), &CANONICAL), input);
    }

    #[test]
    fn borrowed_walk_shares_opaque_allocations() {
        let handle = Opaque::new(vec![1u8, 2, 3]);
        let input = mapping! { "payload" => handle.clone() };
        let output = normalize_borrowed(&input, &CANONICAL);
        let Some(Value::Other(copied)) = output.get("payload") else {
            panic!("payload should stay opaque");
        };
        assert!(copied.ptr_eq(&handle));
    }
}
