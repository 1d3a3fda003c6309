//! Test doubles for the poller seams.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::mpsc;

use nodehealth_core::error::{NodeHealthError, Result};
use nodehealth_exporter::poller::{ReadinessSource, Ticker};

pub const READY: &str = r#"{"data":{"ready":true,"time":"2020-05-01T12:13:44.202131883Z"}}"#;
pub const NOT_READY: &str = r#"{"data":{"ready":false,"time":"2020-05-01T12:13:44.202131883Z"}}"#;

/// One scripted fetch result.
#[derive(Clone)]
pub enum Reply {
    Body(&'static str),
    Refused,
}

/// Replays a fixed script, then repeats the last entry.
pub struct ScriptedSource {
    replies: Mutex<VecDeque<Reply>>,
    last: Mutex<Option<Reply>>,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedSource {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            last: Mutex::new(None),
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn always(reply: Reply) -> Self {
        Self::new([reply])
    }

    /// Every fetch takes `delay` (tokio time, so it respects a paused clock).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Handle that keeps counting fetches after the source moves into a poller.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    fn next_reply(&self) -> Reply {
        let mut last = self.last.lock().unwrap();
        if let Some(r) = self.replies.lock().unwrap().pop_front() {
            *last = Some(r);
        }
        last.clone().expect("script must not be empty")
    }
}

#[async_trait]
impl ReadinessSource for ScriptedSource {
    fn target(&self) -> &str {
        "scripted://node"
    }

    async fn fetch(&self) -> Result<Bytes> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.next_reply();
        if let Some(d) = self.delay {
            tokio::time::sleep(d).await;
        }
        match reply {
            Reply::Body(s) => Ok(Bytes::from_static(s.as_bytes())),
            Reply::Refused => Err(NodeHealthError::Transport("connection refused".into())),
        }
    }
}

/// Ticks whenever the test sends `()`; ends when the sender is dropped.
pub struct ChannelTicker {
    rx: mpsc::UnboundedReceiver<()>,
}

impl ChannelTicker {
    pub fn pair() -> (mpsc::UnboundedSender<()>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }
}

#[async_trait]
impl Ticker for ChannelTicker {
    async fn tick(&mut self) -> Option<()> {
        self.rx.recv().await
    }
}
