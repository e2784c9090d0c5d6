use std::{collections::VecDeque, mem};

use tokio::sync::mpsc;

use crate::core::{
    cmd::Cmd, cmd_executor::CmdExecutor, msg::Msg, raw_msg::RawMsg, state::AppState,
    translator::translate_raw_to_domain, update::update,
};

/// Upper bound on message/command round trips within one update cycle
const MAX_ROUNDS: usize = 16;

/// Owns the application state and the message and command queues
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    cmd_executor: CmdExecutor,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        Self::new_with_executor(initial_state, CmdExecutor::new())
    }

    pub fn new_with_executor(initial_state: AppState, cmd_executor: CmdExecutor) -> Self {
        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            cmd_executor,
        }
    }

    /// Forward `Cmd::Resize` to the given channel
    pub fn add_resize_sender(&mut self, sender: mpsc::UnboundedSender<(u16, u16)>) {
        self.cmd_executor.set_resize_sender(sender);
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let state = mem::take(&mut self.state);
        let (new_state, commands) = update(msg, state);
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        // First process raw messages and convert to domain messages
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            if !raw_msg.is_frequent() {
                log::debug!("raw: {raw_msg:?}");
            }
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        let mut all_commands = Vec::new();
        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }
        all_commands
    }

    /// Execute all pending commands and queue the messages they produce
    pub fn execute_pending_commands(&mut self) -> usize {
        let commands = self.pending_commands();
        if commands.is_empty() {
            return 0;
        }
        let messages = self.cmd_executor.execute_commands(&commands);
        self.msg_queue.extend(messages);
        commands.len()
    }

    /// Process all messages and execute commands until both queues are empty.
    /// Returns the number of commands executed.
    pub fn run_update_cycle(&mut self) -> usize {
        let mut executed = 0;
        for _ in 0..MAX_ROUNDS {
            self.process_all_messages();
            let n = self.execute_pending_commands();
            executed += n;
            if n == 0 && self.msg_queue.is_empty() {
                return executed;
            }
        }
        log::warn!("Update cycle did not settle after {MAX_ROUNDS} rounds");
        executed
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_raw_messages: self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            row_count: self
                .state
                .review
                .session
                .as_ref()
                .map_or(0, |s| s.table().len()),
            cursor: self.state.review.session.as_ref().map(|s| s.cursor()),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_raw_messages: usize,
    pub queued_commands: usize,
    pub row_count: usize,
    pub cursor: Option<usize>,
}
