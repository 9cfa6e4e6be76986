use super::rows::{RowId, RowList};

#[test]
fn test_new_list_holds_floor_rows() {
    let list: RowList<String, 1> = RowList::new();
    assert_eq!(list.len(), 1);
    assert_eq!(list.ids().collect::<Vec<_>>(), vec![RowId::new(1)]);
    assert_eq!(list.next_id(), RowId::new(2));

    let empty: RowList<String, 0> = RowList::new();
    assert!(empty.is_empty());
    assert_eq!(empty.next_id(), RowId::new(1));
}

#[test]
fn test_remove_last_row_at_floor_is_noop() {
    let mut list: RowList<String, 1> = RowList::new();
    let only = list.ids().next().unwrap();

    assert!(list.remove(only).is_none());
    assert_eq!(list.len(), 1);
    assert!(list.contains(only));
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let mut list: RowList<String, 0> = RowList::with_rows(2);
    assert!(list.remove(RowId::new(42)).is_none());
    assert_eq!(list.len(), 2);
}

#[test]
fn test_floor_zero_allows_empty() {
    let mut list: RowList<String, 0> = RowList::new();
    let id = list.push("only".to_string());
    assert_eq!(list.remove(id), Some("only".to_string()));
    assert!(list.is_empty());
}

#[test]
fn test_ids_are_never_reused() {
    let mut list: RowList<String, 1> = RowList::new();
    let mut issued = list.ids().collect::<Vec<_>>();

    for round in 0..5 {
        let id = list.add();
        issued.push(id);
        if round % 2 == 0 {
            list.remove(id);
        }
    }
    // remove the original row too, now that others exist
    list.remove(RowId::new(1));

    let next = list.next_id();
    assert!(issued.iter().all(|id| *id < next));

    let fresh = list.add();
    assert_eq!(fresh, next);
    assert!(!issued.contains(&fresh));
}

#[test]
fn test_iteration_preserves_insertion_order() {
    let mut list: RowList<String, 0> = RowList::new();
    let a = list.push("a".to_string());
    list.push("b".to_string());
    list.push("c".to_string());
    list.remove(a);
    list.push("d".to_string());

    let values: Vec<&str> = list.values().map(String::as_str).collect();
    assert_eq!(values, vec!["b", "c", "d"]);
}

#[test]
fn test_deserialize_pads_to_floor() {
    let list: RowList<String, 1> = serde_json::from_str("[]").unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.values().next().map(String::as_str), Some(""));

    let list: RowList<String, 1> = serde_json::from_str(r#"["x", "y"]"#).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list.next_id(), RowId::new(3));
}

#[test]
fn test_serialize_as_plain_sequence() {
    let list: RowList<String, 0> = RowList::from_values(vec!["a".to_string(), "b".to_string()]);
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, r#"["a","b"]"#);
}
