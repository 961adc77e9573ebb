use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};

pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Restores the terminal on drop, including the panic/early-return paths.
pub struct TerminalGuard;

pub fn init() -> Result<(TerminalGuard, Tui), Box<dyn std::error::Error>> {
    tracing::info!("Initializing terminal");

    if let Err(e) = enable_raw_mode() {
        tracing::error!("Failed to enable raw mode: {}", e);
        return Err(e.into());
    }

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        tracing::error!("Failed to enter alternate screen: {}", e);
        return Err(e.into());
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    terminal.hide_cursor()?;

    tracing::info!("Terminal initialized successfully");
    Ok((TerminalGuard, terminal))
}

/// Hands the terminal back to the shell while an external editor runs.
pub fn suspend() -> Result<(), Box<dyn std::error::Error>> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    io::stdout().flush()?;
    Ok(())
}

/// Reclaims the terminal after [`suspend`].
pub fn resume(terminal: &mut Tui) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    terminal.clear()?;
    terminal.hide_cursor()?;
    Ok(())
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        tracing::info!("Cleaning up terminal");

        if let Err(e) = disable_raw_mode() {
            tracing::error!("Failed to disable raw mode during cleanup: {}", e);
        }

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, LeaveAlternateScreen) {
            tracing::error!("Failed to leave alternate screen during cleanup: {}", e);
        }

        if let Err(e) = stdout.flush() {
            tracing::error!("Failed to flush stdout during cleanup: {}", e);
        }
    }
}
