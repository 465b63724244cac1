//! Runs update tasks to completion in unit and integration tests.

use std::collections::VecDeque;

use futures::StreamExt;
use iced::Task;

use crate::common::messages::DomainMessage;
use crate::state::State;
use crate::update::update;

const MAX_MESSAGES: usize = 1_000;

/// Await every message a task produces.
pub async fn collect_outputs(
    task: Task<DomainMessage>,
) -> Vec<DomainMessage> {
    let Some(mut stream) = iced_runtime::task::into_stream(task) else {
        return Vec::new();
    };

    let mut outputs = Vec::new();
    while let Some(action) = stream.next().await {
        if let iced_runtime::Action::Output(message) = action {
            outputs.push(message);
        }
    }
    outputs
}

/// Feed a task's messages back through [`update`] until nothing is left.
/// Returns the names of the messages processed, in order.
pub async fn drive(
    state: &mut State,
    task: Task<DomainMessage>,
) -> Vec<&'static str> {
    let mut queue: VecDeque<DomainMessage> = collect_outputs(task).await.into();
    let mut processed = Vec::new();

    while let Some(message) = queue.pop_front() {
        assert!(processed.len() < MAX_MESSAGES, "update loop did not settle");
        processed.push(message.name());
        let next = update(state, message);
        queue.extend(collect_outputs(next).await);
    }
    processed
}
