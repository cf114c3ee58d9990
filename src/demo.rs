use std::io::Write;

use itertools::Itertools;

use crate::{
    errors::as_io_error,
    heap::MaxHeap,
    linked_list::LinkedList,
    options::{HeapOptions, ListOptions},
};

const RULE: &str = "=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=";

/// Insert the keys one at a time, then extract the maximum repeatedly,
/// logging the heap's internal layout after every step.
///
/// Returns the result of each extraction; `None` marks an extraction
/// from an empty heap. With `strict` set, such an extraction is an error.
pub fn heap_demo(opts: &HeapOptions) -> std::io::Result<Vec<Option<i64>>> {
    let mut heap = MaxHeap::with_capacity(opts.keys.len());
    for k in opts.keys.iter() {
        heap.insert(*k);
        log::info!("insert {}: {}", k, heap);
    }

    let mut res = Vec::with_capacity(opts.extractions);
    for _ in 0..opts.extractions {
        match heap.try_extract_max() {
            Ok(x) => {
                log::debug!("extracted {} leaving {} keys", x, heap.size());
                log::info!("extract {}: {}", x, heap);
                res.push(Some(x));
            }
            Err(e) if opts.strict => return Err(as_io_error(e)),
            Err(e) => {
                log::warn!("{}", e);
                res.push(None);
            }
        }
    }
    Ok(res)
}

/// Sort `keys` into non-increasing order by passing them through a heap.
pub fn heap_sort<K: Ord + Clone>(keys: &[K]) -> Vec<K> {
    let mut heap: MaxHeap<K> = keys.iter().cloned().collect();
    std::iter::from_fn(|| heap.extract_max()).collect()
}

pub fn sort_keys<W: Write>(keys: &[i64], out: &mut W) -> std::io::Result<()> {
    log::info!("sorting {} keys", keys.len());
    let sorted = heap_sort(keys);
    writeln!(out, "{}", sorted.iter().join(" "))
}

fn write_list<W: Write>(list: &LinkedList<i64>, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", list)?;
    writeln!(out, "Linked list length is: {}", list.len())?;
    writeln!(out, "{}", RULE)
}

/// Walk through the linked list operations, printing the list after each.
pub fn list_demo<W: Write>(opts: &ListOptions, out: &mut W) -> std::io::Result<()> {
    log::info!("building a linked list of {} values", opts.values.len());

    let mut list = LinkedList::new();
    for v in opts.values.iter() {
        list.prepend(*v);
    }
    writeln!(out, "{}", list)?;

    for v in opts.delete.iter() {
        writeln!(out, "Deleting by value = {}", v)?;
        let n = list.delete_all_by_value(v);
        log::debug!("removed {} nodes holding {}", n, v);
        write_list(&list, out)?;
    }

    if let Some(head) = list.iter().next().copied() {
        writeln!(out, "Deleting by value = {}; target is head node", head)?;
        list.delete_all_by_value(&head);
        write_list(&list, out)?;
    }

    writeln!(out, "Deleting head")?;
    if list.delete_head().is_none() {
        log::warn!("list was already empty");
    }
    write_list(&list, out)?;

    for v in opts.search.iter() {
        writeln!(out, "Searching for {}", v)?;
        match list.search(v) {
            Some(_) => writeln!(out, "search result: found")?,
            None => writeln!(out, "search result: not found")?,
        }
        writeln!(out, "{}", RULE)?;
    }

    writeln!(out, "Empty list")?;
    let mut empty: LinkedList<i64> = LinkedList::new();
    empty.delete_all_by_value(&10);
    writeln!(out, "{}", empty)?;
    writeln!(out, "Empty linked list length is: {}", empty.len())?;
    writeln!(out, "{}", RULE)?;

    Ok(())
}
