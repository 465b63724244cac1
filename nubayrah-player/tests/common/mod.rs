//! Shared harness for controller flow tests
//!
//! Builds a [`State`] over the in-memory catalogue stub and runs update tasks
//! to completion, feeding every produced message back into `update`.

#![allow(dead_code)]

use std::sync::Arc;

use iced::Task;
use nubayrah_player::app::bootstrap::initial_tasks;
use nubayrah_player::common::messages::DomainMessage;
use nubayrah_player::infra::testing::{
    RecordingOpener, StubCatalogueService, drive,
};
use nubayrah_player::state::State;
use nubayrah_player::update::update;

pub struct Harness {
    pub state: State,
    pub catalogue: StubCatalogueService,
    pub opener: RecordingOpener,
    /// Names of every message processed so far, in order.
    pub processed: Vec<&'static str>,
}

impl Harness {
    pub fn new(catalogue: StubCatalogueService) -> Self {
        let opener = RecordingOpener::new();
        let state = State::with_services(
            "http://localhost:5050",
            Arc::new(catalogue.clone()),
            Arc::new(opener.clone()),
        );
        Self {
            state,
            catalogue,
            opener,
            processed: Vec::new(),
        }
    }

    /// Harness after the boot fetch has settled.
    pub async fn booted(catalogue: StubCatalogueService) -> Self {
        let mut harness = Self::new(catalogue);
        harness.run(initial_tasks()).await;
        harness
    }

    /// Process one message and everything it leads to.
    pub async fn send(&mut self, message: impl Into<DomainMessage>) {
        let message = message.into();
        self.processed.push(message.name());
        let task = update(&mut self.state, message);
        self.run(task).await;
    }

    /// Process one message but leave its task unrun.
    pub fn send_detached(
        &mut self,
        message: impl Into<DomainMessage>,
    ) -> Task<DomainMessage> {
        let message = message.into();
        self.processed.push(message.name());
        update(&mut self.state, message)
    }

    pub async fn run(&mut self, task: Task<DomainMessage>) {
        let names = drive(&mut self.state, task).await;
        self.processed.extend(names);
    }

    pub fn snapshot_titles(&self) -> Vec<String> {
        self.state
            .domains
            .library
            .state
            .snapshot
            .iter()
            .map(|book| book.title.clone())
            .collect()
    }

    pub fn count(&self, name: &str) -> usize {
        self.processed.iter().filter(|n| **n == name).count()
    }
}
