use std::process::ExitCode;
use sllist::List;
use sllist::suite;
use sllist::suite::Suite;

fn main() -> std::io::Result<ExitCode> {
  let mut suite = Suite::new();

  suite.add("add then get", || {
    let mut list = List::new();
    list.add(1);
    list.add(2);
    list.add(3);
    suite::assert_eq(list.size(), 3, "")?;
    suite::assert_eq(list.get(0)?, 1, "")?;
    suite::assert_eq(list.get(1)?, 2, "")?;
    suite::assert_eq(list.get(2)?, 3, "")
  });

  suite.add("rem down to one", || {
    let mut list = List::new();
    list.add(1);
    list.add(2);
    list.add(3);
    list.rem();
    list.rem();
    suite::assert_eq(list.size(), 1, "")?;
    suite::assert_eq(list.get(0)?, 1, "")
  });

  suite.add("rem on empty", || {
    let mut list = List::<i32>::new();
    list.rem();
    suite::assert_eq(list.size(), 0, "")
  });

  suite.add("read past the end", || {
    let mut list = List::new();
    list.add(1);
    suite::assert_true(list.get(list.size()).is_err(), "get(size) must fail")
  });

  suite.add("copy is independent", || {
    let mut a = List::new();
    a.add(1);
    let b = a.clone();
    a.add(2);
    suite::assert_eq(b.size(), 1, "")
  });

  suite.add("move empties the source", || {
    let mut a = List::new();
    a.add(1);
    a.add(2);
    let b = a.take();
    suite::assert_eq(a.size(), 0, "")?;
    suite::assert_eq(b.get(1)?, 2, "")
  });

  let tally = suite.run()?;

  if tally.all_passed() {
    Ok(ExitCode::SUCCESS)
  } else {
    Ok(ExitCode::FAILURE)
  }
}
