//! The storage cell of a [`List`](crate::List).
//!
//! A node holds one value and an optional forward link. It makes no claims
//! about who owns the node on the other end of the link; that bookkeeping
//! belongs to whoever builds the chain.

use core::fmt;
use core::ptr::NonNull;

/// One value and a link to the next node.

pub struct Node<T> {
  value: T,
  next: Option<NonNull<Node<T>>>,
}

// SAFETY:
//
// A `Node` only stores its link; every dereference of it is already `unsafe`
// for the caller.

unsafe impl<T> Send for Node<T> where T: Send { }

unsafe impl<T> Sync for Node<T> where T: Sync { }

impl<T> Node<T> {
  /// Creates an unlinked node holding `value`.

  #[inline(always)]
  pub const fn new(value: T) -> Self {
    Self { value, next: None }
  }

  /// Sets the outgoing link, replacing whatever was there.

  #[inline(always)]
  pub fn link(&mut self, next: Option<NonNull<Node<T>>>) {
    self.next = next;
  }

  /// A copy of the stored value.

  #[inline(always)]
  pub fn value(&self) -> T
  where
    T: Clone
  {
    self.value.clone()
  }

  /// The outgoing link.
  ///
  /// Dereferencing it is only sound while the node it points at is alive.

  #[inline(always)]
  pub fn next(&self) -> Option<NonNull<Node<T>>> {
    self.next
  }

  #[inline(always)]
  pub(crate) fn value_ref(&self) -> &T {
    &self.value
  }

  #[inline(always)]
  pub(crate) fn into_value(self) -> T {
    self.value
  }
}

impl<T> fmt::Debug for Node<T>
where
  T: fmt::Debug
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Node")
      .field("value", &self.value)
      .field("next", &self.next)
      .finish()
  }
}
