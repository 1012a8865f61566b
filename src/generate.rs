//! Single-pass sequences written as straight-line producer code.
//!
//! A generator is an `async` block in disguise: the producer suspends at
//! every [`emit`](Yielder::emit) and the consumer resumes it by asking for
//! the next element. Producer and consumer strictly alternate on one
//! thread; there is no executor, no wakeups, no concurrency.
//!
//! Dropping a [`Generator`] before exhaustion drops the suspended producer
//! and everything it holds.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;
use core::future::Future;
use core::iter::FusedIterator;
use core::pin::Pin;
use core::task::{Context, Poll, Waker};

/// Builds a [`Generator`] from a producer.
///
/// The producer receives the [`Yielder`] and returns the future to drive;
/// in practice, an `async move` block.
///
/// ```
/// use millefeuille::generate;
///
/// let countdown = generate(|mut co| async move {
///     for n in (1..=3).rev() {
///         co.emit(n).await;
///     }
/// });
/// assert_eq!(countdown.collect::<Vec<_>>(), [3, 2, 1]);
/// ```
pub fn generate<'a, Y, P, Fut>(producer: P) -> Generator<'a, Y>
where
    P: FnOnce(Yielder<Y>) -> Fut,
    Fut: Future<Output = ()> + 'a,
{
    let slot = Rc::new(Cell::new(None));
    let co = Yielder {
        slot: Rc::clone(&slot),
    };
    Generator {
        slot,
        producer: Some(Box::pin(producer(co))),
    }
}

/// Suspends the producer, handing one value to the consumer.
///
/// "Co" by convention: the controller of the coroutine.
pub struct Yielder<Y> {
    slot: Rc<Cell<Option<Y>>>,
}

impl<Y> Yielder<Y> {
    /// Emits `value` and suspends until the consumer asks for the next
    /// element.
    ///
    /// The returned [`Emit`] future is the only suspension point a
    /// generator resolves; awaiting any foreign future inside the producer
    /// stalls the generator (there is no executor to complete it).
    pub fn emit(&mut self, value: Y) -> Emit<Y> {
        Emit {
            value: Some(value),
            slot: Rc::clone(&self.slot),
        }
    }
}

/// Future returned by [`Yielder::emit`]: parks the emitted value, then
/// resolves once the generator is resumed.
#[must_use = "futures do nothing unless awaited"]
pub struct Emit<Y> {
    value: Option<Y>,
    slot: Rc<Cell<Option<Y>>>,
}

impl<Y: Unpin> Future for Emit<Y> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<()> {
        let this = self.get_mut();
        match this.value.take() {
            Some(value) => {
                this.slot.set(Some(value));
                Poll::Pending
            }
            None => Poll::Ready(()),
        }
    }
}

/// A producer-driven, single-pass sequence.
///
/// Each [`next`](Iterator::next) resumes the producer until its next
/// [`emit`](Yielder::emit) or until it returns; completion latches.
///
/// Deliberately not `Clone`: a generator cannot be restarted, which also
/// keeps it out of [`Product`](crate::Product) dimensions. Materialize it
/// first (`.to::<Vec<_>>()`) to iterate more than once.
#[must_use = "generators do nothing unless iterated"]
pub struct Generator<'a, Y> {
    slot: Rc<Cell<Option<Y>>>,
    producer: Option<Pin<Box<dyn Future<Output = ()> + 'a>>>,
}

impl<Y: Unpin> Iterator for Generator<'_, Y> {
    type Item = Y;

    fn next(&mut self) -> Option<Y> {
        let producer = self.producer.as_mut()?;
        let mut cx = Context::from_waker(Waker::noop());
        match producer.as_mut().poll(&mut cx) {
            Poll::Pending => Some(
                self.slot
                    .take()
                    .expect("emitted value parked by the awaited Emit"),
            ),
            Poll::Ready(()) => {
                self.producer = None;
                None
            }
        }
    }
}

impl<Y: Unpin> FusedIterator for Generator<'_, Y> {}

impl<Y> fmt::Debug for Generator<'_, Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("finished", &self.producer.is_none())
            .finish_non_exhaustive()
    }
}
