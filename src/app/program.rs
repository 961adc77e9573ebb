//! The runtime that drives the message loop:
//!
//! 1. Poll completed async tasks and terminal input, feeding each message
//!    through `update` and spawning whatever commands come back.
//! 2. On a quiet tick, reap finished tasks, expire status banners, and
//!    redraw if anything changed.
//!
//! Filesystem commands run off-loop on the blocking pool; each produces
//! exactly one message. A mutating command relists inside the same task, so
//! the refreshed listing can never interleave with the mutation.

use crate::app::{
    error::Result,
    event_async_task_manager::AsyncTaskManager,
    event_msg::{Cmd, CmdOrBatch, FileOperation, Msg, Sub},
    event_sync_subscriptions,
    tea_model::{FiletreeConfig, Model},
    tea_update::update,
    tea_view::view,
    terminal::{self, TerminalGuard, Tui},
};
use crate::app::clipboard;
use crate::fs::{build_listing, dirfs::CURRENT_DIRECTORY};
use crossterm::event;
use eyre::eyre;
use std::time::Duration;
use tokio::time::interval;

pub struct Program {
    model: Model,
    _guard: TerminalGuard,
    terminal: Option<Tui>,
    task_manager: AsyncTaskManager,
    /// Messages produced synchronously by command execution (editor exits,
    /// selection writes), applied on the next loop pass.
    pending: Vec<Msg>,
    needs_render: bool,
}

impl Program {
    pub fn new(config: FiletreeConfig) -> Result<Self> {
        let model = Model::new(config);
        let (guard, terminal) = terminal::init().map_err(|e| eyre!("{e}"))?;
        let task_manager = AsyncTaskManager::new();

        Ok(Program {
            model,
            _guard: guard,
            terminal: Some(terminal),
            task_manager,
            pending: Vec::new(),
            needs_render: true,
        })
    }

    pub fn run(self) -> Result<()> {
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(self.run_async())
    }

    async fn run_async(mut self) -> Result<()> {
        let mut tick_interval = interval(Duration::from_millis(16));

        let initial = self.model.initial_cmd();
        self.spawn_commands(initial).await?;

        loop {
            if self.model.quitting {
                break;
            }

            let mut had_events = false;

            // Messages produced synchronously by the previous command pass.
            let pending = std::mem::take(&mut self.pending);
            for msg in pending {
                had_events = true;
                let cmd = update(&mut self.model, msg);
                self.needs_render = true;
                self.spawn_commands(cmd).await?;
            }

            let async_messages = self.task_manager.poll_messages();
            if !async_messages.is_empty() {
                had_events = true;
                for msg in async_messages {
                    let cmd = update(&mut self.model, msg);
                    self.needs_render = true;
                    self.spawn_commands(cmd).await?;
                }
            }

            if let Some(msg) = self.poll_input_events()? {
                had_events = true;
                let cmd = update(&mut self.model, msg);
                self.needs_render = true;
                self.spawn_commands(cmd).await?;
            }

            if had_events {
                continue;
            }

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.task_manager.cleanup_completed_tasks();

                    if self.model.entry_list.status_expired() {
                        let cmd = update(&mut self.model, Msg::Tick);
                        self.needs_render = true;
                        self.spawn_commands(cmd).await?;
                    }

                    if self.needs_render {
                        if let Some(terminal) = self.terminal.as_mut() {
                            terminal.draw(|f| view(&self.model, f))?;
                        }
                        self.needs_render = false;
                    }
                },
            }
        }
        Ok(())
    }

    fn poll_input_events(&self) -> Result<Option<Msg>> {
        let subs = event_sync_subscriptions::subscriptions(&self.model);
        if !subs.contains(&Sub::KeyboardInput) {
            return Ok(None);
        }

        if event::poll(Duration::from_millis(0))? {
            let event = event::read()?;
            return Ok(event_sync_subscriptions::crossterm_to_msg(
                event,
                &self.model,
            ));
        }

        Ok(None)
    }

    async fn spawn_commands(&mut self, cmds: CmdOrBatch) -> Result<()> {
        match cmds {
            CmdOrBatch::Single(cmd) => self.spawn_command(cmd)?,
            CmdOrBatch::Batch(commands) => {
                for cmd in commands {
                    self.spawn_command(cmd)?;
                }
            }
        }
        Ok(())
    }

    fn spawn_command(&mut self, cmd: Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::LoadListing(target) => {
                let show_hidden = self.model.show_hidden;
                let show_icons = self.model.show_icons;
                self.task_manager.spawn_task(async move {
                    run_load_listing(target, show_hidden, show_icons).await
                });
            }

            Cmd::Run(op) => {
                let show_hidden = self.model.show_hidden;
                let show_icons = self.model.show_icons;
                self.task_manager.spawn_task(async move {
                    run_file_operation(op, show_hidden, show_icons).await
                });
            }

            Cmd::CopyToClipboard(text) => {
                self.task_manager.spawn_task(async move {
                    match clipboard::write_all(&text) {
                        Ok(()) => Msg::ClipboardWritten(text),
                        Err(e) => Msg::OperationFailed(e.to_string()),
                    }
                });
            }

            Cmd::OpenEditor(path) => {
                let msg = self.run_editor(&path);
                self.pending.push(msg);
            }

            Cmd::WriteSelectionAndQuit { output, selection } => {
                let contents = format!("{}\n", selection.display());
                if let Err(e) = std::fs::write(&output, contents) {
                    tracing::error!("Failed to write selection file: {}", e);
                    self.pending
                        .push(Msg::OperationFailed(format!("Could not report selection: {e}")));
                } else {
                    self.model.quitting = true;
                }
            }
        }
        Ok(())
    }

    /// Runs the editor in the foreground. The whole loop blocks while it is
    /// open, which is exactly what handing over the terminal requires.
    fn run_editor(&mut self, path: &std::path::Path) -> Msg {
        let editor = self
            .model
            .config
            .editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .unwrap_or_else(|| "vim".to_string());

        tracing::info!(editor = %editor, path = %path.display(), "suspending for editor");

        if let Err(e) = terminal::suspend() {
            return Msg::EditorClosed(Some(format!("Could not suspend the terminal: {e}")));
        }

        let status = std::process::Command::new(&editor).arg(path).status();

        let resume_result = match self.terminal.as_mut() {
            Some(terminal) => terminal::resume(terminal),
            None => Ok(()),
        };
        self.needs_render = true;

        if let Err(e) = resume_result {
            return Msg::EditorClosed(Some(format!("Could not reclaim the terminal: {e}")));
        }

        match status {
            Ok(status) if status.success() => Msg::EditorClosed(None),
            Ok(status) => Msg::EditorClosed(Some(format!("{editor} exited with {status}"))),
            Err(e) => Msg::EditorClosed(Some(format!("Could not launch {editor}: {e}"))),
        }
    }
}

/// Builds a listing off the event loop and reports it as a single message.
pub async fn run_load_listing(target: String, show_hidden: bool, show_icons: bool) -> Msg {
    let result =
        tokio::task::spawn_blocking(move || build_listing(&target, show_hidden, show_icons)).await;
    match result {
        Ok(Ok(entries)) => Msg::ListingLoaded(entries),
        // Descending into something that stopped being a directory is a
        // no-op, not an error worth a banner.
        Ok(Err(crate::fs::FsError::NotADirectory(_))) => Msg::Noop,
        Ok(Err(e)) => Msg::OperationFailed(e.to_string()),
        Err(e) => Msg::OperationFailed(format!("listing task failed: {e}")),
    }
}

/// Applies a mutating operation and relists the working directory within
/// the same task, so the listing that arrives always reflects the mutation.
pub async fn run_file_operation(op: FileOperation, show_hidden: bool, show_icons: bool) -> Msg {
    let status = op.success_message().to_string();
    let result = tokio::task::spawn_blocking(move || {
        op.apply()?;
        build_listing(CURRENT_DIRECTORY, show_hidden, show_icons)
    })
    .await;
    match result {
        Ok(Ok(entries)) => Msg::OperationComplete { entries, status },
        Ok(Err(e)) => Msg::OperationFailed(e.to_string()),
        Err(e) => Msg::OperationFailed(format!("file operation task failed: {e}")),
    }
}
