use std::time::Duration;

use crate::error::Result;

/// Requested delay per iteration: 0 s + 1000 ns.
///
/// Far below the timer resolution of most hosts, so the delivered wakeup
/// rate is bounded by the host (timer slack, tick granularity), not by this
/// value.
pub const WAKEUP_INTERVAL: Duration = Duration::from_nanos(1_000);

/// Blocks the calling thread for roughly `interval`.
///
/// A wait cut short by a signal counts as a full wakeup: the remainder is
/// dropped rather than resumed.
#[cfg(unix)]
pub fn sleep_once(interval: Duration) -> Result<()> {
    use std::io;

    use crate::error::Error;

    let request = libc::timespec {
        tv_sec: interval.as_secs() as libc::time_t,
        tv_nsec: interval.subsec_nanos() as _,
    };

    // SAFETY: `request` is a valid timespec for the duration of the call and
    // a null remainder pointer is permitted.
    if unsafe { libc::nanosleep(&request, std::ptr::null_mut()) } == 0 {
        return Ok(());
    }

    let err = io::Error::last_os_error();
    if err.kind() == io::ErrorKind::Interrupted {
        log::trace!("timed wait interrupted, continuing");
        return Ok(());
    }
    Err(Error::Sleep(err))
}

#[cfg(not(unix))]
pub fn sleep_once(interval: Duration) -> Result<()> {
    std::thread::sleep(interval);
    Ok(())
}

/// One loop iteration. A failed wait is logged and treated like any other
/// wakeup.
fn wake(interval: Duration) {
    if let Err(err) = sleep_once(interval) {
        log::error!("{err}");
    }
}

/// Sleeps for `interval` over and over. The process is only ever ended from
/// outside.
pub fn run(interval: Duration) -> ! {
    log::debug!("entering wakeup loop, requested interval {interval:?}");
    loop {
        wake(interval);
    }
}
