use stackwalk::table::HashTable;

use std::collections::HashMap;

use crate::Op;

#[quickcheck]
fn get_returns_latest_insert(ops: Vec<Op<String, i16>>, buckets: u8) -> bool {
    let mut table = HashTable::with_buckets(usize::from(buckets) + 1).unwrap();
    let mut map = HashMap::new();

    for op in &ops {
        match op {
            Op::Insert(k, v) => {
                table.insert(k, f32::from(*v));
                map.insert(k.clone(), f32::from(*v));
            }
            Op::Remove(k) => {
                table.delete(k);
                map.remove(k);
            }
        }
    }

    table.len() == map.len() && map.iter().all(|(k, v)| table.get(k) == Some(*v))
}

#[quickcheck]
fn each_key_counted_once(keys: Vec<String>) -> bool {
    let mut table = HashTable::with_buckets(2).unwrap();
    for key in keys.iter().chain(keys.iter()) {
        table.insert(key, 1.0);
    }

    let distinct: std::collections::HashSet<_> = keys.iter().collect();
    table.len() == distinct.len() && table.iter().count() == distinct.len()
}

#[quickcheck]
fn delete_all_empties_table(keys: Vec<String>) -> bool {
    let mut table = HashTable::new();
    for key in &keys {
        table.insert(key, 1.0);
    }
    table.delete_all();

    table.is_empty() && keys.iter().all(|key| table.search(key).is_none())
}
