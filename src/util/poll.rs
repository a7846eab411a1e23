use std::{
    task::{Context, Poll},
    thread,
    time::Duration,
};

use futures::task::noop_waker_ref;

/// Drives a future to completion on the calling thread. SDK request futures
/// are polled with a noop waker, so a pending poll is retried after a short
/// sleep instead of parking on a runtime.
pub fn block_on<Fut>(future: Fut) -> Fut::Output
where
    Fut: std::future::Future,
{
    let mut future = Box::pin(future);
    let mut context = Context::from_waker(noop_waker_ref());

    loop {
        match future.as_mut().poll(&mut context) {
            Poll::Ready(output) => return output,
            Poll::Pending => thread::sleep(Duration::from_millis(10)),
        }
    }
}
