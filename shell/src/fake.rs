//! In-memory launcher that records every call, for tests.

use crate::command::CommandLine;
use crate::error::LaunchError;
use crate::launcher::{LaunchOutcome, ProcessLauncher};
use std::collections::HashMap;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Create(String),
    Wait(usize),
    ReleaseProcess(usize),
    ReleaseThread(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WaitBehavior {
    Complete,
    Fail,
    Panic,
}

/// A pretend process/thread handle pair.
#[derive(Debug)]
pub(crate) struct FakeHandle {
    pub(crate) id: usize,
}

#[derive(Debug)]
pub(crate) struct FakeLauncher {
    pub(crate) events: Vec<Event>,
    pub(crate) wait_behavior: WaitBehavior,
    failures: HashMap<String, LaunchError>,
    next_id: usize,
    live: usize,
}

impl FakeLauncher {
    pub(crate) fn new() -> Self {
        Self {
            events: Vec::new(),
            wait_behavior: WaitBehavior::Complete,
            failures: HashMap::new(),
            next_id: 0,
            live: 0,
        }
    }

    /// Make `create` reject `line` with `code`.
    pub(crate) fn fail_on(mut self, line: &str, code: u32, message: Option<&str>) -> Self {
        self.failures.insert(
            line.to_owned(),
            LaunchError::new(code, message.map(str::to_owned)),
        );
        self
    }

    /// Handles created and not yet released.
    pub(crate) fn live_handles(&self) -> usize {
        self.live
    }

    pub(crate) fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl ProcessLauncher for FakeLauncher {
    type Handle = FakeHandle;

    fn create(&mut self, command_line: &CommandLine) -> LaunchOutcome<FakeHandle> {
        self.events.push(Event::Create(command_line.as_str().to_owned()));
        if let Some(err) = self.failures.get(command_line.as_str()) {
            return LaunchOutcome::Failed(err.clone());
        }
        self.next_id += 1;
        self.live += 1;
        LaunchOutcome::Started(FakeHandle { id: self.next_id })
    }

    fn wait(&mut self, handle: &mut FakeHandle) -> io::Result<()> {
        self.events.push(Event::Wait(handle.id));
        match self.wait_behavior {
            WaitBehavior::Complete => Ok(()),
            WaitBehavior::Fail => Err(io::Error::other("wait failed")),
            WaitBehavior::Panic => panic!("wait blew up"),
        }
    }

    fn release(&mut self, handle: FakeHandle) {
        self.events.push(Event::ReleaseProcess(handle.id));
        self.events.push(Event::ReleaseThread(handle.id));
        self.live -= 1;
    }
}
