//! Ctrl+C handling.
//!
//! Two scoped guards share the SIGINT disposition:
//!
//! - [`ExitOnInterrupt`] is held for the life of the launcher. Ctrl+C while
//!   it is the active handler prints a farewell line and exits with status 0.
//! - [`InterruptGuard`] is held while a child process owns the terminal. The
//!   terminal delivers SIGINT to the whole foreground process group, so both
//!   the child and this process receive it; the guard only records the
//!   signal, and the menu loop carries on after the child stops.
//!
//! Each guard restores the previous handler on drop. Handlers (unlike
//! `SIG_IGN`) are reset to the default across `exec`, so children are
//! interrupted as usual.

#[cfg(unix)]
mod imp {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::OnceLock;

    static INTERRUPTED: AtomicBool = AtomicBool::new(false);
    static FAREWELL: OnceLock<String> = OnceLock::new();

    extern "C" fn record_interrupt(_: libc::c_int) {
        INTERRUPTED.store(true, Ordering::SeqCst);
    }

    pub(super) extern "C" fn exit_with_farewell(_: libc::c_int) {
        if let Some(text) = FAREWELL.get() {
            let line = text.as_bytes();
            unsafe {
                libc::write(libc::STDOUT_FILENO, b"\n".as_ptr().cast(), 1);
                libc::write(libc::STDOUT_FILENO, line.as_ptr().cast(), line.len());
                libc::write(libc::STDOUT_FILENO, b"\n".as_ptr().cast(), 1);
            }
        }
        unsafe { libc::_exit(0) }
    }

    fn swap_handler(handler: extern "C" fn(libc::c_int)) -> libc::sighandler_t {
        unsafe { libc::signal(libc::SIGINT, handler as libc::sighandler_t) }
    }

    fn restore_handler(previous: libc::sighandler_t) {
        if previous != libc::SIG_ERR {
            unsafe {
                libc::signal(libc::SIGINT, previous);
            }
        }
    }

    /// Exits with status 0 on SIGINT while alive, printing a farewell line.
    pub struct ExitOnInterrupt {
        previous: libc::sighandler_t,
    }

    impl ExitOnInterrupt {
        /// Only the first farewell text set in the process is used.
        pub fn install(farewell: &str) -> Self {
            let _ = FAREWELL.set(farewell.to_string());
            Self {
                previous: swap_handler(exit_with_farewell),
            }
        }
    }

    impl Drop for ExitOnInterrupt {
        fn drop(&mut self) {
            restore_handler(self.previous);
        }
    }

    /// Records SIGINT instead of terminating while alive.
    pub struct InterruptGuard {
        previous: libc::sighandler_t,
    }

    impl InterruptGuard {
        pub fn install() -> Self {
            INTERRUPTED.store(false, Ordering::SeqCst);
            Self {
                previous: swap_handler(record_interrupt),
            }
        }

        /// Whether SIGINT arrived since the guard was installed.
        pub fn interrupted(&self) -> bool {
            INTERRUPTED.load(Ordering::SeqCst)
        }
    }

    impl Drop for InterruptGuard {
        fn drop(&mut self) {
            restore_handler(self.previous);
        }
    }
}

#[cfg(not(unix))]
mod imp {
    /// No-op on platforms without POSIX signals.
    pub struct ExitOnInterrupt;

    impl ExitOnInterrupt {
        pub fn install(_farewell: &str) -> Self {
            Self
        }
    }

    /// No-op on platforms without POSIX signals.
    pub struct InterruptGuard;

    impl InterruptGuard {
        pub fn install() -> Self {
            Self
        }

        pub fn interrupted(&self) -> bool {
            false
        }
    }
}

pub use imp::{ExitOnInterrupt, InterruptGuard};

/// Serializes tests that touch the process-wide SIGINT disposition.
#[cfg(test)]
pub(crate) static SIGNAL_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
