//! Terminal session: one controller, commands in, rendered page out.

use std::io::{BufRead, Write};

use todolist_core::{Controller, Event, Page, TodoApi, Transport};

use crate::command::{Command, HELP};

pub struct Session<T> {
    controller: Controller<T, Page>,
}

impl<T: Transport> Session<T> {
    /// Bootstrap the controller. A failed first load is not fatal: the page
    /// carries the failure message and `refresh` can retry.
    pub fn start(api: TodoApi<T>) -> Self {
        let mut controller = Controller::new(api, Page::default());
        if let Err(err) = controller.bootstrap() {
            tracing::warn!(error = %err, "initial load failed");
        }
        Self { controller }
    }

    pub fn page(&self) -> Page {
        self.controller.document().borrow().clone()
    }

    /// Apply one command. Returns `false` once the session should end.
    pub fn apply(&mut self, command: Command) -> bool {
        let event = match command {
            Command::Quit => return false,
            Command::Help => return true,
            Command::Add(text) => {
                self.controller.document().borrow_mut().set_input(text);
                Event::Submit
            }
            Command::Toggle(id) => Event::Toggle(id),
            Command::Remove(id) => Event::Delete(id),
            Command::Refresh => Event::Refresh,
        };
        // Failures are already on the page.
        let _ = self.controller.dispatch(event);
        true
    }

    /// Read commands until `quit` or end of input, printing the page after
    /// each one.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> anyhow::Result<()> {
        write!(out, "{}", self.page())?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(err) => {
                    writeln!(out, "error: {err}")?;
                    continue;
                }
            };
            if command == Command::Help {
                writeln!(out, "{HELP}")?;
                continue;
            }
            if !self.apply(command) {
                break;
            }
            write!(out, "{}", self.page())?;
        }
        out.flush()?;
        Ok(())
    }
}
