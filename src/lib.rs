#![doc = include_str!("../README.md")]
#![no_std]
#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

pub use allocator_api2::alloc::AllocError;
pub use node::Node;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SUBMODULES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[cfg(feature = "std")]
pub mod bench;

#[cfg(feature = "std")]
pub mod suite;

mod node;

mod ptr;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// A singly-linked list with a cached tail.
///
/// Appending is O(1). Reading index `i` walks `i` links from the head.
/// Removing the last element walks the whole chain, because there is no way
/// back from the tail to the node before it; draining a list of `n` elements
/// with [`rem`](Self::rem) therefore costs O(n²).
///
/// Every node is allocated from `A`.
///
/// A plain Rust move transfers the chain. [`take`](Self::take) and
/// [`move_from`](Self::move_from) transfer it out of a list that stays in
/// place and becomes empty. [`Clone`] builds an independent chain.

pub struct List<T, A: Allocator = Global> {
  head: Option<NonNull<Node<T>>>,
  tail: Option<NonNull<Node<T>>>,
  size: usize,
  allocator: A,
  _owns: PhantomData<Node<T>>,
}

// SAFETY:
//
// The chain is reachable only through the list that owns it, so the usual
// shared xor mutable discipline carries over from `&List` and `&mut List`.

unsafe impl<T, A: Allocator> Send for List<T, A> where T: Send, A: Send { }

unsafe impl<T, A: Allocator> Sync for List<T, A> where T: Sync, A: Sync { }

/// Returned by [`List::get`] when `index >= size`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexOutOfRange {
  /// The index that was asked for.
  pub index: usize,
  /// The size of the list at the time.
  pub size: usize,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIVATE TYPE AND TRAIT DEFINITIONS                                         //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

enum Panicked { }

trait Fail: Sized {
  fn fail<T>(_: Layout) -> Result<T, Self>;
}

struct Values<'a, T> {
  next: Option<NonNull<Node<T>>>,
  _marker: PhantomData<&'a Node<T>>,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// UTILITY FUNCTIONS                                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(always)]
fn unwrap<T>(x: Result<T, Panicked>) -> T {
  match x { Ok(x) => x, Err(e) => match e { } }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Fail                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Fail for Panicked {
  #[inline(never)]
  #[cold]
  fn fail<T>(layout: Layout) -> Result<T, Self> {
    alloc::alloc::handle_alloc_error(layout)
  }
}

impl Fail for AllocError {
  #[inline(always)]
  fn fail<T>(_: Layout) -> Result<T, Self> {
    Err(AllocError)
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(always)]
fn add<T, A, E>(list: &mut List<T, A>, value: T) -> Result<(), E>
where
  A: Allocator,
  E: Fail,
{
  let p =
    match ptr::boxed(&list.allocator, Node::new(value)) {
      Ok(p) => p,
      Err((_, layout)) => return E::fail(layout),
    };

  match list.tail {
    None => list.head = Some(p),
    Some(t) => unsafe { ptr::as_mut_ref(t) }.link(Some(p)),
  }

  list.tail = Some(p);
  list.size = list.size + 1;

  Ok(())
}

impl<T> List<T, Global> {
  /// Creates an empty list backed by the global allocator.

  #[inline(always)]
  pub const fn new() -> Self {
    Self::new_in(Global)
  }
}

impl<T, A: Allocator> List<T, A> {
  /// Creates an empty list whose nodes will come from `allocator`.

  #[inline(always)]
  pub const fn new_in(allocator: A) -> Self {
    Self {
      head: None,
      tail: None,
      size: 0,
      allocator,
      _owns: PhantomData,
    }
  }

  /// Appends `value` at the tail.
  ///
  /// # Panics
  ///
  /// Aborts through [`handle_alloc_error`](alloc::alloc::handle_alloc_error)
  /// on failure to allocate memory.

  #[inline(always)]
  pub fn add(&mut self, value: T) {
    unwrap(add(self, value))
  }

  /// Appends `value` at the tail.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. The list is left
  /// unchanged and `value` is dropped.

  #[inline(always)]
  pub fn try_add(&mut self, value: T) -> Result<(), AllocError> {
    add(self, value)
  }

  /// A copy of the value at `index`, counting from the head.
  ///
  /// # Errors
  ///
  /// [`IndexOutOfRange`] when `index >= self.size()`, which includes every
  /// index of an empty list.

  pub fn get(&self, index: usize) -> Result<T, IndexOutOfRange>
  where
    T: Clone
  {
    match self.values().nth(index) {
      Some(x) => Ok(x.clone()),
      None => Err(IndexOutOfRange { index, size: self.size }),
    }
  }

  /// Removes the last element, if there is one.
  ///
  /// This walks the chain from the head to find the new tail.

  pub fn rem(&mut self) {
    let Some(tail) = self.tail else { return };

    match self.before_tail() {
      None => {
        self.head = None;
        self.tail = None;
      }
      Some(p) => {
        unsafe { ptr::as_mut_ref(p) }.link(None);
        self.tail = Some(p);
      }
    }

    self.size = self.size - 1;

    // SAFETY:
    //
    // `tail` came from `ptr::boxed` with our allocator and is no longer
    // reachable from `head`.

    let _: Node<T> = unsafe { ptr::unboxed(&self.allocator, tail) };
  }

  /// The number of elements.

  #[inline(always)]
  pub fn size(&self) -> usize {
    self.size
  }

  /// Whether the list has no elements.

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.size == 0
  }

  /// A reference to the allocator backing the nodes.

  #[inline(always)]
  pub fn allocator(&self) -> &A {
    &self.allocator
  }

  /// Moves the whole chain into a new list, leaving this one empty and
  /// ready for reuse. Runs in O(1).

  pub fn take(&mut self) -> Self
  where
    A: Clone
  {
    Self {
      head: self.head.take(),
      tail: self.tail.take(),
      size: mem::replace(&mut self.size, 0),
      allocator: self.allocator.clone(),
      _owns: PhantomData,
    }
  }

  /// Releases this list's chain and moves `other`'s chain in its place.
  /// `other` is left empty and ready for reuse. Runs in O(1) plus the cost
  /// of releasing the old chain.

  pub fn move_from(&mut self, other: &mut Self)
  where
    A: Clone
  {
    // Moving a list onto itself leaves it unchanged.
    //
    // NB: Safe code cannot alias `self` and `other`, so this only guards
    // unsafe callers.

    if core::ptr::eq(&*self, &*other) {
      return;
    }

    *self = other.take();
  }

  #[inline(always)]
  fn values(&self) -> Values<'_, T> {
    Values { next: self.head, _marker: PhantomData }
  }

  fn before_tail(&self) -> Option<NonNull<Node<T>>> {
    let tail = self.tail?;
    let mut p = self.head?;

    loop {
      let q = unsafe { ptr::as_ref(p) }.next()?;
      if q == tail { return Some(p); }
      p = q;
    }
  }

  fn release(&mut self) {
    let mut p = self.head.take();

    self.tail = None;
    self.size = 0;

    while let Some(q) = p {
      // SAFETY:
      //
      // Every node reachable from `head` came from `ptr::boxed` with our
      // allocator, and each one is visited exactly once.

      let node = unsafe { ptr::unboxed(&self.allocator, q) };
      p = node.next();
      drop::<T>(node.into_value());
    }
  }
}

impl<T, A: Allocator> Drop for List<T, A> {
  fn drop(&mut self) {
    self.release()
  }
}

impl<T, A: Allocator + Default> Default for List<T, A> {
  fn default() -> Self {
    Self::new_in(A::default())
  }
}

impl<T, A> Clone for List<T, A>
where
  T: Clone,
  A: Allocator + Clone,
{
  fn clone(&self) -> Self {
    let mut list = Self::new_in(self.allocator.clone());
    for x in self.values() {
      list.add(x.clone());
    }
    list
  }

  fn clone_from(&mut self, source: &Self) {
    // Copying a list onto itself leaves it unchanged.
    //
    // NB: Safe code cannot alias `self` and `source`, so this only guards
    // unsafe callers.

    if core::ptr::eq(&*self, source) {
      return;
    }

    // The copy is complete before the old chain is released, so a panicking
    // `T::clone` leaves `self` as it was.

    *self = source.clone();
  }
}

impl<T, A: Allocator> fmt::Debug for List<T, A>
where
  T: fmt::Debug
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.values()).finish()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Values                                                                     //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, T> Iterator for Values<'a, T> {
  type Item = &'a T;

  #[inline(always)]
  fn next(&mut self) -> Option<&'a T> {
    let p = self.next?;
    let node: &'a Node<T> = unsafe { ptr::as_ref(p) };
    self.next = node.next();
    Some(node.value_ref())
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// IndexOutOfRange                                                            //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl fmt::Display for IndexOutOfRange {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "index {} out of range for list of size {}", self.index, self.size)
  }
}

impl core::error::Error for IndexOutOfRange { }
