use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn enabled() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

// No #[macro_export]; `#[macro_use] mod verbose;` in main.rs makes this
// visible to the rest of the binary. Diagnostics go to stderr so stdout
// stays a clean table.
macro_rules! vprintln {
    ($($arg:tt)*) => {{
        if crate::verbose::enabled() {
            eprintln!($($arg)*);
        }
    }}
}
