//! A minimal named-check runner.
//!
//! Checks are registered with [`Suite::add`] and run in order by
//! [`Suite::run`]. A check fails by returning a [`Failure`] or by panicking;
//! either way the failure is reported and the remaining checks still run.

use core::fmt;
use std::any::Any;
use std::boxed::Box;
use std::io;
use std::io::Write;
use std::panic;
use std::panic::AssertUnwindSafe;
use std::string::String;
use std::string::ToString;
use std::vec::Vec;

/// The zero-argument operation behind a registered check.

pub type Check = Box<dyn Fn() -> Result<(), Failure>>;

/// A registry of named checks.

#[derive(Default)]
pub struct Suite {
  checks: Vec<(String, Check)>,
}

/// Why a check failed.
///
/// Any [`Error`](core::error::Error) converts into a `Failure`, so checks
/// can use `?` on fallible calls such as [`List::get`](crate::List::get).

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure(String);

/// The outcome of [`Suite::run`].

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tally {
  /// Checks that completed without failing.
  pub passed: usize,
  /// Checks that were run.
  pub total: usize,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Suite                                                                      //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Suite {
  /// Creates an empty suite.

  pub fn new() -> Self {
    Self { checks: Vec::new() }
  }

  /// Registers `check` under `name`. Checks run in registration order.

  pub fn add<F>(&mut self, name: impl Into<String>, check: F)
  where
    F: Fn() -> Result<(), Failure> + 'static
  {
    let name = name.into();
    log::debug!("registered check {name:?}");
    self.checks.push((name, Box::new(check)));
  }

  /// The number of registered checks.

  pub fn len(&self) -> usize {
    self.checks.len()
  }

  /// Whether no checks are registered.

  pub fn is_empty(&self) -> bool {
    self.checks.is_empty()
  }

  /// Runs every check, reporting to standard output.
  ///
  /// # Errors
  ///
  /// An error is returned if standard output cannot be written.

  pub fn run(&self) -> io::Result<Tally> {
    self.run_to(&mut io::stdout().lock())
  }

  /// Runs every check, reporting to `out`.
  ///
  /// Each check produces a `[PASS] name` or `[FAIL] name: message` line; a
  /// final line gives the tally.
  ///
  /// # Errors
  ///
  /// An error is returned if `out` cannot be written. Checks that have not
  /// run yet are skipped.

  pub fn run_to<W>(&self, out: &mut W) -> io::Result<Tally>
  where
    W: Write + ?Sized
  {
    let mut passed = 0;

    for (name, check) in self.checks.iter() {
      match run_one(check) {
        Ok(()) => {
          passed = passed + 1;
          writeln!(out, "[PASS] {name}")?;
        }
        Err(e) => {
          log::warn!("check {name:?} failed: {e}");
          writeln!(out, "[FAIL] {name}: {e}")?;
        }
      }
    }

    let tally = Tally { passed, total: self.checks.len() };

    writeln!(out)?;
    writeln!(out, "{tally}")?;

    log::debug!("suite finished: {tally}");

    Ok(tally)
  }
}

fn run_one(check: &Check) -> Result<(), Failure> {
  match panic::catch_unwind(AssertUnwindSafe(|| check())) {
    Ok(result) => result,
    Err(payload) => Err(Failure::from_panic(payload)),
  }
}

impl fmt::Debug for Suite {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.checks.iter().map(|(name, _)| name)).finish()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Failure                                                                    //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Failure {
  /// A failure carrying `message`.

  pub fn new(message: impl Into<String>) -> Self {
    Self(message.into())
  }

  /// The failure message.

  pub fn message(&self) -> &str {
    &self.0
  }

  fn from_panic(payload: Box<dyn Any + Send>) -> Self {
    if let Some(s) = payload.downcast_ref::<&str>() {
      return Self::new(*s);
    }

    match payload.downcast::<String>() {
      Ok(s) => Self(*s),
      Err(_) => Self::new("check panicked"),
    }
  }
}

impl fmt::Display for Failure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// NB: `Failure` must not implement `Error`, or this overlaps with
// `impl<T> From<T> for T`.

impl<E> From<E> for Failure
where
  E: core::error::Error
{
  fn from(e: E) -> Self {
    Self(e.to_string())
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Tally                                                                      //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Tally {
  /// Whether every check passed.

  pub fn all_passed(&self) -> bool {
    self.passed == self.total
  }
}

impl fmt::Display for Tally {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} out of {} tests passed", self.passed, self.total)
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// ASSERTIONS                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// Fails with `message` unless `a == b`.
///
/// An empty message becomes `"assert_eq failed"`.

pub fn assert_eq<T>(a: T, b: T, message: &str) -> Result<(), Failure>
where
  T: PartialEq
{
  if a == b { return Ok(()); }

  if message.is_empty() {
    Err(Failure::new("assert_eq failed"))
  } else {
    Err(Failure::new(message))
  }
}

/// Fails with `message` unless `cond` holds.
///
/// An empty message becomes `"assert_true failed"`.

pub fn assert_true(cond: bool, message: &str) -> Result<(), Failure> {
  if cond { return Ok(()); }

  if message.is_empty() {
    Err(Failure::new("assert_true failed"))
  } else {
    Err(Failure::new(message))
  }
}
