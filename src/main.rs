//! Walks through the main list operations, logging buffer changes. Set `RUST_LOG=trace` to see
//! every reallocation.

use std::thread;

use specialized_collections::collections::contiguous::ArrayList;
use specialized_collections::collections::traits::List;
use specialized_collections::collections::wrappers::{Synchronized, Unmodifiable};
use specialized_collections::error::ListError;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<(), ListError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    println!("\n[ArrayList]\n");

    let mut list = ArrayList::new();
    println!("{list:?}");
    for i in 1..=5 {
        list.push(i);
    }
    println!("{list:?}");

    let removed = list.remove(2)?;
    println!("removed {removed}, now {list}");

    match list.get(10) {
        Ok(value) => println!("get(10) = {value}"),
        Err(error) => println!("get(10) failed: {error}"),
    }

    println!("sub_list(1, 3) = {:?}", list.sub_list(1, 3)?.to_vec());

    println!("\n[Wrapped buffer]\n");

    let buf: Box<[String]> = ["a", "b", "c"].map(String::from).into();
    let mut wrapped = ArrayList::wrap(buf, 3)?;
    wrapped.push("d".to_string());
    wrapped.push("e".to_string());
    println!("{wrapped:?}");

    println!("\n[Cursor]\n");

    let mut cursor = list.cursor(0)?;
    println!("next = {}", cursor.next(&list)?);
    list.push(6);
    if let Err(error) = cursor.next(&list) {
        println!("after an outside push: {error}");
    }

    println!("\n[Spliterator]\n");

    let numbers: ArrayList<u64> = (1..=100).collect();
    let mut upper = numbers.spliterator();
    let pieces = match upper.try_split(&numbers) {
        Some(lower) => vec![lower, upper],
        None => vec![upper],
    };

    let total = thread::scope(|scope| {
        let handles: Vec<_> = pieces
            .into_iter()
            .map(|mut piece| {
                let numbers = &numbers;
                scope.spawn(move || {
                    let mut sum = 0;
                    piece.for_each_remaining(numbers, |v| sum += v).map(|()| sum)
                })
            })
            .collect();

        handles
            .into_iter()
            .filter_map(|handle| handle.join().ok())
            .sum::<Result<u64, ListError>>()
    })?;
    println!("sum of 1..=100 over two threads = {total}");

    println!("\n[Wrappers]\n");

    let read_only = Unmodifiable::new(&list);
    println!("read-only len = {}", read_only.len());

    let mut shared = Synchronized::new(list.clone());
    shared.push(7)?;
    println!("synchronized = {}", *shared.lock());

    let mut attempt = Unmodifiable::new(&list);
    if let Err(error) = attempt.push(8) {
        println!("push through read-only wrapper: {error}");
    }

    Ok(())
}
