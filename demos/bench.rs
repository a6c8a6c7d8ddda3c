use std::hint;
use sllist::List;
use sllist::bench::Bench;

const LEN: usize = 1_000;

fn make_list(len: usize) -> List<u64> {
  let mut r = List::new();
  for i in 0 .. len {
    r.add(i as u64);
  }
  r
}

fn main() -> std::io::Result<()> {
  let mut bench = Bench::new();

  bench.add("add", || {
    let _: List<u64> = hint::black_box(make_list(hint::black_box(LEN)));
  }, 1_000);

  bench.add("add-bumpalo", || {
    let bump = bumpalo::Bump::new();
    let mut r = List::new_in(&bump);
    for i in 0 .. hint::black_box(LEN) {
      r.add(i as u64);
    }
    let _: _ = hint::black_box(&r);
  }, 1_000);

  {
    let list = make_list(LEN);
    bench.add("get-last", move || {
      let _: _ = hint::black_box(list.get(hint::black_box(LEN - 1)));
    }, 10_000);
  }

  {
    let list = make_list(LEN);
    bench.add("clone", move || {
      let _: List<u64> = hint::black_box(list.clone());
    }, 1_000);
  }

  {
    let mut list = make_list(LEN);
    bench.add("take", move || {
      let mut r = list.take();
      let _: _ = hint::black_box(&mut r);
      list.move_from(&mut r);
    }, 100_000);
  }

  bench.add("drain", || {
    let mut r = make_list(hint::black_box(LEN));
    while ! r.is_empty() {
      r.rem();
    }
    let _: _ = hint::black_box(r);
  }, 100);

  let _ = bench.run()?;

  Ok(())
}
