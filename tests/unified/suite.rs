use std::cell::RefCell;
use std::rc::Rc;
use expect_test::expect;
use sllist::List;
use sllist::suite;
use sllist::suite::Failure;
use sllist::suite::Suite;
use sllist::suite::Tally;

fn report(suite: &Suite) -> (Tally, String) {
  let mut out = Vec::new();
  let tally = suite.run_to(&mut out).unwrap();
  (tally, String::from_utf8(out).unwrap())
}

#[test]
fn test_api() {
  let mut suite = Suite::new();
  let _ = Suite::default();
  suite.add("a", || Ok(()));
  suite.add(String::from("b"), || Err(Failure::new("no")));
  let _ = suite.len();
  let _ = suite.is_empty();
  let _ = format!("{:?}", suite);
  let _ = Failure::new("x").message();
  let _ = suite::assert_eq(1, 1, "");
  let _ = suite::assert_true(true, "");
}

#[test]
fn test_report() {
  let mut suite = Suite::new();

  suite.add("Test equality", || suite::assert_eq(5, 5, "5 should be equal to 5"));
  suite.add("Test truthiness", || suite::assert_true(3 < 4, "3 is less than 4"));
  suite.add("Test inequality", || suite::assert_eq(2, 3, "2 should not be equal to 3"));

  let (tally, out) = report(&suite);

  assert!(tally == Tally { passed: 2, total: 3 });
  assert!(! tally.all_passed());

  expect![[r#"
      [PASS] Test equality
      [PASS] Test truthiness
      [FAIL] Test inequality: 2 should not be equal to 3

      2 out of 3 tests passed
  "#]].assert_eq(&out);
}

#[test]
fn test_empty_suite() {
  let suite = Suite::new();
  let (tally, out) = report(&suite);
  assert!(suite.is_empty());
  assert!(tally.all_passed());
  expect![[r#"

      0 out of 0 tests passed
  "#]].assert_eq(&out);
}

#[test]
fn test_default_messages() {
  expect!["assert_eq failed"]
    .assert_eq(&suite::assert_eq(2, 3, "").unwrap_err().to_string());
  expect!["assert_true failed"]
    .assert_eq(&suite::assert_true(false, "").unwrap_err().to_string());
}

#[test]
fn test_panics_are_caught() {
  let mut suite = Suite::new();

  suite.add("static message", || panic!("boom"));
  suite.add("formatted message", || panic!("boom {}", 2));
  suite.add("after", || Ok(()));

  let (tally, out) = report(&suite);

  assert!(tally == Tally { passed: 1, total: 3 });

  expect![[r#"
      [FAIL] static message: boom
      [FAIL] formatted message: boom 2
      [PASS] after

      1 out of 3 tests passed
  "#]].assert_eq(&out);
}

#[test]
fn test_runs_in_registration_order() {
  let seen = Rc::new(RefCell::new(Vec::new()));
  let mut suite = Suite::new();

  for name in ["c", "a", "b"] {
    let seen = seen.clone();
    suite.add(name, move || {
      seen.borrow_mut().push(name);
      Ok(())
    });
  }

  expect![[r#"["c", "a", "b"]"#]].assert_eq(&format!("{:?}", suite));

  let (tally, _) = report(&suite);

  assert!(tally.all_passed());
  expect![[r#"["c", "a", "b"]"#]].assert_eq(&format!("{:?}", seen.borrow()));
}

#[test]
fn test_list_errors_propagate() {
  let mut suite = Suite::new();

  suite.add("end to end", || {
    let mut list = List::new();
    list.add(1);
    list.add(2);
    list.add(3);
    suite::assert_eq(list.size(), 3, "size after three adds")?;
    suite::assert_eq(list.get(2)?, 3, "last value")?;
    list.rem();
    list.rem();
    suite::assert_eq(list.get(0)?, 1, "first value")?;
    list.rem();
    list.rem();
    suite::assert_true(list.is_empty(), "drained")
  });

  suite.add("read past the end", || {
    let list = List::<u64>::new();
    let _ = list.get(0)?;
    Ok(())
  });

  let (tally, out) = report(&suite);

  assert!(tally == Tally { passed: 1, total: 2 });

  expect![[r#"
      [PASS] end to end
      [FAIL] read past the end: index 0 out of range for list of size 0

      1 out of 2 tests passed
  "#]].assert_eq(&out);
}
