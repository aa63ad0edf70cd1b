//! Tick pacing and pause-aware waiting.
//!
//! Time-consuming bricks advance in fixed [`TICK`] slices and poll the
//! sprite's run flags between short sleeps, so a pause is observed well
//! within one tick. Time spent paused extends the wait deadline and is
//! reported back to the caller, which keeps paused spans out of its own
//! elapsed-time accounting.

use std::thread;
use std::time::{Duration, Instant};

use stage_object::RunFlags;

/// Fixed animation tick.
pub const TICK: Duration = Duration::from_millis(33);

/// Poll interval while waiting. Bounds pause-observation latency.
const POLL: Duration = Duration::from_millis(1);

/// Sleep until `deadline`, honouring the sprite's run flags.
///
/// While paused the deadline is frozen: on resume, only the unserved part
/// of the wait continues. Returns the total span spent paused so callers
/// can shift their reference instants by it, or `None` if the script was
/// terminated while paused (the wait is abandoned immediately).
#[must_use]
pub fn wait_until(flags: &RunFlags, mut deadline: Instant) -> Option<Duration> {
    let mut paused_total = Duration::ZERO;
    loop {
        if flags.is_paused() {
            let pause_began = Instant::now();
            let wait_left = deadline.saturating_duration_since(pause_began);
            loop {
                if flags.is_finished() {
                    return None;
                }
                if !flags.is_paused() {
                    break;
                }
                thread::sleep(POLL);
            }
            paused_total += pause_began.elapsed();
            deadline = Instant::now() + wait_left;
        }

        let now = Instant::now();
        if now >= deadline {
            return Some(paused_total);
        }
        thread::sleep(POLL.min(deadline - now));
    }
}
