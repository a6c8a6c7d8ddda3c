//! A minimal named-operation timer.
//!
//! Each registered operation gets one untimed warm-up call and is then timed
//! over a fixed number of back-to-back calls with [`Instant`]. Results are
//! reported at microsecond resolution.

use core::fmt;
use std::boxed::Box;
use std::hint;
use std::io;
use std::io::Write;
use std::string::String;
use std::time::Instant;
use std::vec::Vec;

/// The iteration count used by [`Bench::add_default`].

pub const DEFAULT_ITERATIONS: usize = 1000;

/// A registry of named operations to time.

#[derive(Default)]
pub struct Bench {
  cases: Vec<Case>,
}

/// The measurements for one operation.

#[derive(Clone, Debug, PartialEq)]
pub struct Timing {
  /// The name the operation was registered under.
  pub name: String,
  /// The number of timed calls.
  pub iterations: usize,
  /// Wall time across all timed calls, in microseconds.
  pub total_micros: u128,
  /// `total_micros / iterations`.
  pub average_micros: f64,
}

struct Case {
  name: String,
  op: Box<dyn FnMut()>,
  iterations: usize,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Bench                                                                      //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Bench {
  /// Creates an empty benchmark registry.

  pub fn new() -> Self {
    Self { cases: Vec::new() }
  }

  /// Registers `op` under `name`, to be timed over `iterations` calls.
  ///
  /// # Panics
  ///
  /// Panics if `iterations` is zero.

  pub fn add<F>(&mut self, name: impl Into<String>, op: F, iterations: usize)
  where
    F: FnMut() + 'static
  {
    assert!(iterations > 0, "sllist: a benchmark needs at least one iteration");

    let name = name.into();
    log::debug!("registered benchmark {name:?} x {iterations}");
    self.cases.push(Case { name, op: Box::new(op), iterations });
  }

  /// Registers `op` under `name`, to be timed over [`DEFAULT_ITERATIONS`]
  /// calls.

  pub fn add_default<F>(&mut self, name: impl Into<String>, op: F)
  where
    F: FnMut() + 'static
  {
    self.add(name, op, DEFAULT_ITERATIONS)
  }

  /// The number of registered operations.

  pub fn len(&self) -> usize {
    self.cases.len()
  }

  /// Whether no operations are registered.

  pub fn is_empty(&self) -> bool {
    self.cases.is_empty()
  }

  /// Times every operation in registration order, reporting to standard
  /// output.
  ///
  /// # Errors
  ///
  /// An error is returned if standard output cannot be written.

  pub fn run(&mut self) -> io::Result<Vec<Timing>> {
    self.run_to(&mut io::stdout().lock())
  }

  /// Times every operation in registration order, reporting to `out`.
  ///
  /// # Errors
  ///
  /// An error is returned if `out` cannot be written. Operations that have
  /// not been timed yet are skipped.

  pub fn run_to<W>(&mut self, out: &mut W) -> io::Result<Vec<Timing>>
  where
    W: Write + ?Sized
  {
    let mut timings = Vec::with_capacity(self.cases.len());

    writeln!(out)?;
    writeln!(out, "Running Benchmarks...")?;
    writeln!(out)?;

    for case in self.cases.iter_mut() {
      (case.op)();

      let timing = time(case);

      writeln!(out, "{timing}")?;

      timings.push(timing);
    }

    writeln!(out)?;
    writeln!(out, "Benchmarking Complete!")?;

    log::debug!("timed {} benchmarks", timings.len());

    Ok(timings)
  }
}

fn time(case: &mut Case) -> Timing {
  let iterations = hint::black_box(case.iterations);

  let start = Instant::now();

  for _ in 0 .. iterations {
    (case.op)();
  }

  let stop = Instant::now();

  let total_micros = stop.saturating_duration_since(start).as_micros();
  let average_micros = total_micros as f64 / iterations as f64;

  Timing {
    name: case.name.clone(),
    iterations,
    total_micros,
    average_micros,
  }
}

impl fmt::Debug for Bench {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.cases.iter().map(|c| (&c.name, c.iterations))).finish()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Timing                                                                     //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl fmt::Display for Timing {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "[BENCH] {:30}Average: {:.3} \u{3bc}s (Total: {} \u{3bc}s for {} iterations)",
      self.name,
      self.average_micros,
      self.total_micros,
      self.iterations,
    )
  }
}
