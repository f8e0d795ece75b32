//! Incoming link sources.
//!
//! # Responsibilities
//! - Model the host platform's link entry points: the launch URL and a
//!   stream of URLs delivered while the process runs
//! - Feed both into a [`Dispatcher`] in arrival order
//!
//! # Design Decisions
//! - Each subscriber gets its own bounded `tokio::sync::mpsc` channel
//! - `publish` waits for room in every subscriber's channel, so a slow
//!   listener slows the publisher down instead of losing links
//! - Unsubscribing (or dropping the handle) stops the listener task; links
//!   published afterwards are not dispatched

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::deeplink::{Dispatcher, Navigator};

/// Default per-subscriber channel capacity.
pub const DEFAULT_CAPACITY: usize = 64;

/// Platform entry points for incoming links.
pub trait LinkSource: Send + Sync {
    /// The URL the process was launched with, if any.
    fn initial_url(&self) -> Option<String>;

    /// Subscribe to URLs delivered after launch. Dropping the receiver
    /// unsubscribes.
    fn subscribe(&self) -> mpsc::Receiver<String>;
}

/// In-process link source fanning out to bounded per-subscriber channels.
///
/// Clones share the same subscribers.
#[derive(Debug, Clone)]
pub struct ChannelLinkSource {
    initial: Option<String>,
    capacity: usize,
    next_id: Arc<AtomicU64>,
    subscribers: Arc<DashMap<u64, mpsc::Sender<String>>>,
}

impl ChannelLinkSource {
    /// Create a source with an optional launch URL.
    pub fn new(initial: Option<String>) -> Self {
        Self::with_capacity(initial, DEFAULT_CAPACITY)
    }

    /// Create a source with an explicit per-subscriber capacity.
    pub fn with_capacity(initial: Option<String>, capacity: usize) -> Self {
        Self {
            initial,
            capacity: capacity.max(1),
            next_id: Arc::new(AtomicU64::new(0)),
            subscribers: Arc::new(DashMap::new()),
        }
    }

    /// Deliver a URL to every subscriber, waiting while any of them is
    /// full. Returns the number of subscribers that received it.
    pub async fn publish(&self, url: impl Into<String>) -> usize {
        let url = url.into();
        // Senders are cloned out so no map guard is held across an await.
        let targets: Vec<(u64, mpsc::Sender<String>)> = self
            .subscribers
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();

        let mut delivered = 0;
        for (id, tx) in targets {
            if tx.send(url.clone()).await.is_ok() {
                delivered += 1;
            } else {
                self.subscribers.remove(&id);
            }
        }
        delivered
    }

    /// Number of subscribers still listening.
    pub fn receiver_count(&self) -> usize {
        self.subscribers
            .iter()
            .filter(|entry| !entry.value().is_closed())
            .count()
    }

    /// Disconnect every subscriber. Listeners finish once they have drained
    /// what was already delivered.
    pub fn close(&self) {
        self.subscribers.clear();
    }
}

impl Default for ChannelLinkSource {
    fn default() -> Self {
        Self::new(None)
    }
}

impl LinkSource for ChannelLinkSource {
    fn initial_url(&self) -> Option<String> {
        self.initial.clone()
    }

    fn subscribe(&self) -> mpsc::Receiver<String> {
        let (tx, rx) = mpsc::channel(self.capacity);
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.subscribers.insert(id, tx);
        rx
    }
}

/// Counters reported when a listener stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerStats {
    /// Links received, including the launch URL.
    pub received: u64,
    /// Links that reached the navigator successfully.
    pub navigated: u64,
}

impl ListenerStats {
    fn record(&mut self, navigated: bool) {
        self.received += 1;
        if navigated {
            self.navigated += 1;
        }
    }
}

/// Dispatches links from a [`LinkSource`] on a background task.
pub struct LinkListener;

impl LinkListener {
    /// Start listening. The launch URL (if any) is dispatched first.
    pub fn spawn<S, N>(source: &S, dispatcher: Arc<Dispatcher<N>>) -> ListenerHandle
    where
        S: LinkSource + ?Sized,
        N: Navigator + 'static,
    {
        let initial = source.initial_url();
        let mut rx = source.subscribe();
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let mut stats = ListenerStats::default();

            if let Some(url) = initial {
                tracing::debug!(url = %url, "Dispatching launch URL");
                stats.record(dispatcher.navigate_to_deep_link(&url));
            }

            loop {
                tokio::select! {
                    biased;
                    _ = &mut stop_rx => break,
                    msg = rx.recv() => match msg {
                        Some(url) => stats.record(dispatcher.navigate_to_deep_link(&url)),
                        None => break,
                    },
                }
            }

            tracing::debug!(
                received = stats.received,
                navigated = stats.navigated,
                "Link listener stopped"
            );
            stats
        });

        ListenerHandle {
            stop: Some(stop_tx),
            task,
        }
    }
}

/// Handle to a running [`LinkListener`].
///
/// Dropping the handle stops the listener.
pub struct ListenerHandle {
    stop: Option<oneshot::Sender<()>>,
    task: JoinHandle<ListenerStats>,
}

impl ListenerHandle {
    /// Stop receiving links and wait for the listener to finish.
    pub async fn unsubscribe(mut self) -> ListenerStats {
        self.signal_stop();
        self.join().await
    }

    /// Wait for the listener to end on its own (source closed).
    pub async fn finished(mut self) -> ListenerStats {
        self.join().await
    }

    fn signal_stop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }

    async fn join(&mut self) -> ListenerStats {
        match (&mut self.task).await {
            Ok(stats) => stats,
            Err(e) => {
                tracing::error!(error = %e, "Link listener task failed");
                ListenerStats::default()
            }
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        self.signal_stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deeplink::NavigationError;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<String>>);

    impl Navigator for Recorder {
        fn navigate(&self, path: &str) -> Result<(), NavigationError> {
            self.0.lock().unwrap().push(path.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_publish_without_subscribers() {
        let source = ChannelLinkSource::default();
        assert_eq!(source.publish("/news").await, 0);
        assert_eq!(source.initial_url(), None);
    }

    #[tokio::test]
    async fn test_initial_url_then_stream() {
        let source = ChannelLinkSource::new(Some("futbolapp://match/1".into()));
        let recorder = Arc::new(Recorder::default());
        let dispatcher = Arc::new(Dispatcher::new(recorder.clone()));

        let handle = LinkListener::spawn(&source, dispatcher);
        assert_eq!(source.publish("/team/2").await, 1);
        assert_eq!(source.publish("/nowhere").await, 1);
        drop(source);

        let stats = handle.finished().await;
        assert_eq!(
            stats,
            ListenerStats {
                received: 3,
                navigated: 2,
            }
        );
        assert_eq!(*recorder.0.lock().unwrap(), vec!["/match/1", "/team/2"]);
    }

    #[tokio::test]
    async fn test_publish_waits_instead_of_dropping() {
        let source = ChannelLinkSource::with_capacity(None, 4);
        let recorder = Arc::new(Recorder::default());
        let dispatcher = Arc::new(Dispatcher::new(recorder.clone()));

        let handle = LinkListener::spawn(&source, dispatcher);
        for id in 0..5_000 {
            assert_eq!(source.publish(format!("/match/{id}")).await, 1);
        }
        source.close();

        let stats = handle.finished().await;
        assert_eq!(stats.received, 5_000);
        assert_eq!(stats.navigated, 5_000);

        let calls = recorder.0.lock().unwrap();
        let expected: Vec<String> = (0..5_000).map(|id| format!("/match/{id}")).collect();
        assert_eq!(*calls, expected);
    }

    #[tokio::test]
    async fn test_unsubscribe_stops_delivery() {
        let source = ChannelLinkSource::default();
        let recorder = Arc::new(Recorder::default());
        let dispatcher = Arc::new(Dispatcher::new(recorder.clone()));

        let handle = LinkListener::spawn(&source, dispatcher);
        assert_eq!(source.receiver_count(), 1);
        let stats = handle.unsubscribe().await;
        assert_eq!(stats.received, 0);

        assert_eq!(source.receiver_count(), 0);
        assert_eq!(source.publish("/news").await, 0);
        assert!(recorder.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dropping_handle_stops_listener() {
        let source = ChannelLinkSource::default();
        let recorder = Arc::new(Recorder::default());
        let dispatcher = Arc::new(Dispatcher::new(recorder.clone()));

        let handle = LinkListener::spawn(&source, dispatcher);
        assert_eq!(source.receiver_count(), 1);
        drop(handle);

        tokio::time::timeout(Duration::from_secs(5), async {
            while source.receiver_count() > 0 {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("listener still subscribed after its handle was dropped");

        assert_eq!(source.publish("/news").await, 0);
        assert!(recorder.0.lock().unwrap().is_empty());
    }
}
