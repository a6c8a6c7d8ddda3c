use core::alloc::Layout;
use core::ptr::NonNull;
use allocator_api2::alloc::Allocator;

#[inline(always)]
pub(crate) const fn cast<T, U>(x: NonNull<T>) -> NonNull<U>
where
  T: ?Sized
{
  x.cast()
}

#[inline(always)]
pub(crate) unsafe fn read<T>(x: NonNull<T>) -> T {
  x.as_ptr().read()
}

#[inline(always)]
pub(crate) unsafe fn write<T>(x: NonNull<T>, y: T) {
  x.as_ptr().write(y)
}

#[inline(always)]
pub(crate) unsafe fn as_ref<'a, T>(x: NonNull<T>) -> &'a T
where
  T: ?Sized
{
  &*x.as_ptr()
}

#[inline(always)]
pub(crate) unsafe fn as_mut_ref<'a, T>(x: NonNull<T>) -> &'a mut T
where
  T: ?Sized
{
  &mut *x.as_ptr()
}

/// Moves `value` into fresh memory from `allocator`.
///
/// On failure the value is handed back so that the caller decides whether it
/// is dropped or reported.

#[inline(always)]
pub(crate) fn boxed<T, A>(allocator: &A, value: T) -> Result<NonNull<T>, (T, Layout)>
where
  A: Allocator
{
  // NB: Every `T` we place here carries a link, so `layout.size() != 0`.

  let layout = Layout::new::<T>();

  match allocator.allocate(layout) {
    Ok(p) => {
      let p = cast(p);
      unsafe { write(p, value) };
      Ok(p)
    }
    Err(_) =>
      Err((value, layout)),
  }
}

/// Moves the value out of `x` and returns its memory to `allocator`.
///
/// # Safety
///
/// `x` must have come from [`boxed`] with the same allocator and must not be
/// used again.

#[inline(always)]
pub(crate) unsafe fn unboxed<T, A>(allocator: &A, x: NonNull<T>) -> T
where
  A: Allocator
{
  let value = read(x);
  allocator.deallocate(cast(x), Layout::new::<T>());
  value
}
