//! Terminal restoration on panic.
//!
//! A panic while the dashboard owns the terminal would otherwise leave the
//! shell in raw mode on the alternate screen. The hook restores the terminal
//! first, then hands the panic to the previously installed hook.

use ratatui::crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};
use std::io;
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

static TUI_ACTIVE: AtomicBool = AtomicBool::new(false);
static PANIC_HOOK_ONCE: Once = Once::new();

/// Install the restoring panic hook (only the first call has an effect)
pub fn install_panic_hook() {
    PANIC_HOOK_ONCE.call_once(|| {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            if TUI_ACTIVE.swap(false, Ordering::SeqCst) {
                // Restoration failures are ignored while unwinding
                let _ = restore_after_panic();
            }
            original_hook(panic_info);
        }));
    });
}

/// Record that the terminal is in raw mode on the alternate screen
pub fn mark_tui_active() {
    TUI_ACTIVE.store(true, Ordering::SeqCst);
}

/// Record that the terminal has been restored
pub fn mark_tui_inactive() {
    TUI_ACTIVE.store(false, Ordering::SeqCst);
}

pub fn is_tui_active() -> bool {
    TUI_ACTIVE.load(Ordering::SeqCst)
}

fn restore_after_panic() -> io::Result<()> {
    let mut stdout = io::stdout();
    let leave = execute!(stdout, LeaveAlternateScreen, Show);
    disable_raw_mode()?;
    leave
}
