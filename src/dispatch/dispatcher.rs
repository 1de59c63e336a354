//! Mailbox dispatcher

use std::collections::HashMap;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender};

use crate::engine::Engine;
use crate::error::{AgoraError, Result};
use crate::protocol::{Command, Reply, Target};

/// Something that can execute commands synchronously
pub trait Execute: Send + Sync + 'static {
    fn execute(&self, command: Command) -> Result<Reply>;
}

impl Execute for Engine {
    fn execute(&self, command: Command) -> Result<Reply> {
        Engine::execute(self, command)
    }
}

/// A command plus where to send its reply
struct Envelope {
    command: Command,
    reply_to: Sender<Result<Reply>>,
}

/// Routes commands to per-target mailboxes and waits for replies
pub struct Dispatcher {
    mailboxes: HashMap<Target, Sender<Envelope>>,
    workers: Vec<JoinHandle<()>>,
    timeout: Duration,
}

impl Dispatcher {
    /// Start one worker per target over `executor`
    pub fn start(executor: Arc<dyn Execute>, timeout: Duration) -> Result<Self> {
        let mut mailboxes = HashMap::new();
        let mut workers = Vec::with_capacity(Target::ALL.len());

        for target in Target::ALL {
            let (tx, rx) = channel::unbounded();
            let executor = Arc::clone(&executor);
            let handle = thread::Builder::new()
                .name(format!("agora-{}", target))
                .spawn(move || run_mailbox(target, rx, executor))?;

            mailboxes.insert(target, tx);
            workers.push(handle);
        }

        tracing::debug!(mailboxes = mailboxes.len(), ?timeout, "dispatcher started");
        Ok(Self {
            mailboxes,
            workers,
            timeout,
        })
    }

    /// Start over an engine, using its configured request timeout
    pub fn for_engine(engine: Arc<Engine>) -> Result<Self> {
        let timeout = engine.config().request_timeout();
        if timeout.is_zero() {
            return Err(AgoraError::Config(
                "request_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Self::start(engine, timeout)
    }

    /// Send a command and wait up to the default timeout for its reply
    pub fn request(&self, command: Command) -> Result<Reply> {
        self.request_with_timeout(command, self.timeout)
    }

    /// Send a command and wait up to `timeout` for its reply
    pub fn request_with_timeout(&self, command: Command, timeout: Duration) -> Result<Reply> {
        let target = command.target();
        let mailbox = self
            .mailboxes
            .get(&target)
            .ok_or_else(|| AgoraError::Disconnected(target.to_string()))?;

        let (reply_to, reply) = channel::bounded(1);
        mailbox
            .send(Envelope { command, reply_to })
            .map_err(|_| AgoraError::Disconnected(target.to_string()))?;

        match reply.recv_timeout(timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => {
                tracing::warn!(%target, ?timeout, "request timed out");
                Err(AgoraError::Timeout(timeout))
            }
            Err(RecvTimeoutError::Disconnected) => {
                Err(AgoraError::Disconnected(target.to_string()))
            }
        }
    }

    /// Default request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Close every mailbox and wait for the workers to drain
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        // Dropping the senders ends each worker's receive loop
        self.mailboxes.clear();
        for worker in self.workers.drain(..) {
            if worker.join().is_err() {
                tracing::warn!("mailbox worker panicked");
            }
        }
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Worker loop: execute envelopes in arrival order until the mailbox closes
fn run_mailbox(target: Target, inbox: Receiver<Envelope>, executor: Arc<dyn Execute>) {
    tracing::debug!(%target, "mailbox open");

    for envelope in inbox.iter() {
        let result = executor.execute(envelope.command);
        if envelope.reply_to.send(result).is_err() {
            tracing::debug!(%target, "caller gone, reply dropped");
        }
    }

    tracing::debug!(%target, "mailbox closed");
}
