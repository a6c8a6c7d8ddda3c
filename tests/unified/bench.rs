use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;
use expect_test::expect;
use sllist::bench::Bench;
use sllist::bench::Timing;
use sllist::bench::DEFAULT_ITERATIONS;

fn report(bench: &mut Bench) -> (Vec<Timing>, String) {
  let mut out = Vec::new();
  let timings = bench.run_to(&mut out).unwrap();
  (timings, String::from_utf8(out).unwrap())
}

#[test]
fn test_api() {
  let mut bench = Bench::new();
  let _ = Bench::default();
  bench.add("a", || (), 3);
  bench.add_default("b", || ());
  let _ = bench.len();
  let _ = bench.is_empty();
  let _ = format!("{:?}", bench);
}

#[test]
fn test_warm_up_then_timed_calls() {
  let calls = Rc::new(Cell::new(0));
  let mut bench = Bench::new();

  {
    let calls = calls.clone();
    bench.add("count", move || calls.set(calls.get() + 1), 5);
  }

  let (timings, _) = report(&mut bench);

  assert!(calls.get() == 6);
  assert!(timings.len() == 1);
  assert!(timings[0].iterations == 5);
}

#[test]
fn test_default_iterations() {
  let calls = Rc::new(Cell::new(0));
  let mut bench = Bench::new();

  {
    let calls = calls.clone();
    bench.add_default("count", move || calls.set(calls.get() + 1));
  }

  let (timings, _) = report(&mut bench);

  assert!(calls.get() == DEFAULT_ITERATIONS + 1);
  assert!(timings[0].iterations == 1000);
}

#[test]
fn test_timing_accuracy() {
  let mut bench = Bench::new();

  bench.add("Sleep Test", || thread::sleep(Duration::from_micros(1000)), 5);

  let (timings, out) = report(&mut bench);
  let t = &timings[0];

  assert!(t.name == "Sleep Test");
  assert!(t.total_micros >= 5000);
  assert!(t.average_micros >= 1000.0);
  assert!(t.average_micros == t.total_micros as f64 / 5.0);

  assert!(out.starts_with("\nRunning Benchmarks...\n\n[BENCH] Sleep Test                    Average: "));
  assert!(out.contains(" μs (Total: "));
  assert!(out.contains(" μs for 5 iterations)\n"));
  assert!(out.ends_with("\nBenchmarking Complete!\n"));
}

#[test]
fn test_multiple_benchmarks_in_order() {
  let mut bench = Bench::new();

  bench.add("Test 1", || thread::sleep(Duration::from_micros(100)), 3);
  bench.add("Test 2", || thread::sleep(Duration::from_micros(200)), 3);

  let (timings, out) = report(&mut bench);

  assert!(timings.len() == 2);
  assert!(timings[0].name == "Test 1");
  assert!(timings[1].name == "Test 2");
  assert!(timings[1].total_micros >= 600);

  let i = out.find("[BENCH] Test 1").unwrap();
  let j = out.find("[BENCH] Test 2").unwrap();
  assert!(i < j);
}

#[test]
fn test_timing_display() {
  let t = Timing {
    name: String::from("add"),
    iterations: 4,
    total_micros: 10,
    average_micros: 2.5,
  };

  expect!["[BENCH] add                           Average: 2.500 μs (Total: 10 μs for 4 iterations)"]
    .assert_eq(&t.to_string());
}

#[test]
#[should_panic]
fn test_zero_iterations() {
  let mut bench = Bench::new();
  bench.add("never", || (), 0);
}
