use criterion::{black_box, criterion_group, criterion_main, Criterion};

use indexed_list::{ArrayList, LinkedList, List};

pub static LEN: usize = 1_000;

fn filled<L: List<u64>>(mut list: L) -> L {
    for i in 0..LEN {
        list.add(i, i as u64).unwrap();
    }
    list
}

fn criterion_benchmark(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();

    let linked = filled(LinkedList::with_capacity(LEN));
    c.bench_function("linked get middle", |b| {
        b.iter(|| *linked.get(black_box(LEN / 2)).unwrap())
    });
    c.bench_function("linked get near end", |b| {
        b.iter(|| *linked.get(black_box(LEN - 3)).unwrap())
    });

    let array = filled(ArrayList::with_capacity(LEN));
    c.bench_function("array get middle", |b| {
        b.iter(|| *array.get(black_box(LEN / 2)).unwrap())
    });

    let mut linked = filled(LinkedList::with_capacity(LEN + 1));
    c.bench_function("linked add+remove front", |b| {
        b.iter(|| {
            linked.add(0, 7).unwrap();
            linked.remove(black_box(0)).unwrap()
        })
    });

    let mut array = filled(ArrayList::with_capacity(LEN + 1));
    c.bench_function("array add+remove front", |b| {
        b.iter(|| {
            array.add(0, 7).unwrap();
            array.remove(black_box(0)).unwrap()
        })
    });

    let mut linked = filled(LinkedList::with_capacity(LEN + 1));
    c.bench_function("linked cursor insert+remove", |b| {
        b.iter(|| {
            let mut cursor = linked.cursor_mut(LEN / 2).unwrap();
            cursor.insert_after(7);
            cursor.move_next();
            cursor.remove_current().unwrap()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
