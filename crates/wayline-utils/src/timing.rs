//! Cooperative timing utilities: sleep, debounce and throttle.
//!
//! Each debouncer owns at most one pending callback; a new call cancels
//! and reschedules it. A throttle drops calls that arrive inside the
//! cooldown window set by the most recent accepted call, with no
//! queueing.

use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Suspends the current task for the given duration.
pub async fn sleep(duration: Duration) {
	tokio::time::sleep(duration).await;
}

/// Delays a callback until calls have stopped arriving for `delay`.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use wayline_utils::timing::Debouncer;
///
/// # async fn example() {
/// let debouncer = Debouncer::new(Duration::from_millis(300));
/// debouncer.call(|| println!("search"));
/// debouncer.call(|| println!("search")); // cancels the first
/// # }
/// ```
pub struct Debouncer {
	delay: Duration,
	pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
	/// Creates a debouncer with the given quiet period.
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			pending: Mutex::new(None),
		}
	}

	/// Schedules `callback` to run after the quiet period, cancelling
	/// any previously pending callback.
	///
	/// Must be called from within a tokio runtime.
	pub fn call<F>(&self, callback: F)
	where
		F: FnOnce() + Send + 'static,
	{
		let delay = self.delay;
		let mut pending = self.pending.lock();
		if let Some(handle) = pending.take() {
			handle.abort();
		}
		*pending = Some(tokio::spawn(async move {
			tokio::time::sleep(delay).await;
			callback();
		}));
	}

	/// Cancels the pending callback, if any.
	pub fn cancel(&self) {
		if let Some(handle) = self.pending.lock().take() {
			handle.abort();
		}
	}
}

impl Drop for Debouncer {
	fn drop(&mut self) {
		self.cancel();
	}
}

/// Leading-edge rate limiter.
///
/// The first call runs immediately and opens a cooldown window; calls
/// arriving inside the window are dropped.
pub struct Throttle {
	window: Duration,
	cooldown_until: Mutex<Option<Instant>>,
}

impl Throttle {
	/// Creates a throttle with the given cooldown window.
	pub fn new(window: Duration) -> Self {
		Self {
			window,
			cooldown_until: Mutex::new(None),
		}
	}

	/// Runs `callback` unless a cooldown window is active. Returns
	/// whether the callback ran.
	pub fn call<F>(&self, callback: F) -> bool
	where
		F: FnOnce(),
	{
		{
			let mut until = self.cooldown_until.lock();
			let now = Instant::now();
			if let Some(deadline) = *until {
				if now < deadline {
					return false;
				}
			}
			*until = Some(now + self.window);
		}
		callback();
		true
	}
}
