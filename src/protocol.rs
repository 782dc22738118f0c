//! Multi-channel routing of fragment trains

use crate::core::{Channel, SentenceFragment};
use crate::field::{Field, Value};
use crate::observer::AisObserver;
use crate::parser::{Outcome, ParserBuilder, Transaction};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Partition key: trains are independent per channel and sequential id
pub type TrainKey = (Channel, Option<u8>);

/// Activity seen on one channel
#[derive(Debug, Clone, Default)]
struct Activity {
    commits: u64,
    rollbacks: u64,
    last_activity: Option<Instant>,
}

impl Activity {
    fn record(&mut self, commits: u64, rollbacks: u64) {
        self.commits += commits;
        self.rollbacks += rollbacks;
        self.last_activity = Some(Instant::now());
    }
}

/// Statistics for one channel
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelStats {
    /// The channel
    pub channel: Channel,
    /// Messages decoded
    pub commits: u64,
    /// Trains or messages abandoned
    pub rollbacks: u64,
    /// Share of outcomes that were rollbacks (0.0 to 1.0)
    pub error_rate: f32,
    /// Time since the channel last produced a fragment
    pub idle: Option<Duration>,
}

#[derive(Debug)]
struct Slot {
    transaction: Transaction,
    touched: Instant,
}

// Counts lifecycle calls on their way to the real observer
struct Tally<'a, O: ?Sized> {
    observer: &'a mut O,
    commits: u64,
    rollbacks: u64,
}

impl<'a, O: AisObserver + ?Sized> Tally<'a, O> {
    fn new(observer: &'a mut O) -> Self {
        Tally {
            observer,
            commits: 0,
            rollbacks: 0,
        }
    }
}

impl<O: AisObserver + ?Sized> AisObserver for Tally<'_, O> {
    fn begin(&mut self) {
        self.observer.begin()
    }

    fn field(&mut self, field: Field, value: Value<'_>) {
        self.observer.field(field, value)
    }

    fn commit(&mut self, reason: &str) {
        self.commits += 1;
        self.observer.commit(reason)
    }

    fn rollback(&mut self, reason: &str) {
        self.rollbacks += 1;
        self.observer.rollback(reason)
    }
}

/// Routes fragments from several channels and interleaved trains
///
/// Each (channel, sequential id) pair gets its own [`Transaction`]; they
/// share nothing but the observer.
pub struct Router<O: AisObserver> {
    observer: O,
    slots: HashMap<TrainKey, Slot>,
    activity: HashMap<Channel, Activity>,
    current: Option<TrainKey>,
    settings: ParserBuilder,
    stale_after: Duration,
}

impl<O: AisObserver> Router<O> {
    /// Create a router with default settings
    pub fn new(observer: O) -> Self {
        RouterBuilder::new().build(observer)
    }

    /// Start a fragment
    pub fn begin_fragment(&mut self, total: u8, index: u8, sequence_id: Option<u8>, channel: Channel) {
        let key = (channel, sequence_id);
        let settings = self.settings;
        let slot = self.slots.entry(key).or_insert_with(|| Slot {
            transaction: settings.transaction(),
            touched: Instant::now(),
        });
        slot.touched = Instant::now();

        let mut tally = Tally::new(&mut self.observer);
        slot.transaction
            .begin_fragment(total, index, sequence_id, channel, &mut tally);
        let (commits, rollbacks) = (tally.commits, tally.rollbacks);
        self.activity
            .entry(channel)
            .or_default()
            .record(commits, rollbacks);
        self.current = Some(key);
    }

    /// Append the current fragment's armored payload
    pub fn payload(&mut self, armored: &str, pad_bits: u8) {
        let Some(key) = self.current else {
            log::debug!("payload without a fragment");
            return;
        };
        let Some(slot) = self.slots.get_mut(&key) else {
            return;
        };
        let mut tally = Tally::new(&mut self.observer);
        slot.transaction.payload(armored, pad_bits, &mut tally);
        let (commits, rollbacks) = (tally.commits, tally.rollbacks);
        self.activity
            .entry(key.0)
            .or_default()
            .record(commits, rollbacks);
    }

    /// Finish the current fragment
    pub fn end_fragment(&mut self, committed: bool, reason: &str) -> Outcome {
        let Some(key) = self.current.take() else {
            log::debug!("end of fragment without a beginning");
            return Outcome::Ignored;
        };
        let Some(slot) = self.slots.get_mut(&key) else {
            return Outcome::Ignored;
        };
        let mut tally = Tally::new(&mut self.observer);
        let outcome = slot.transaction.end_fragment(committed, reason, &mut tally);
        let (commits, rollbacks) = (tally.commits, tally.rollbacks);
        if slot.transaction.is_idle() {
            self.slots.remove(&key);
        }
        self.activity
            .entry(key.0)
            .or_default()
            .record(commits, rollbacks);
        outcome
    }

    /// Feed one whole fragment
    pub fn fragment(&mut self, fragment: &SentenceFragment, committed: bool, reason: &str) -> Outcome {
        let header = fragment.header;
        self.begin_fragment(
            header.total(),
            header.index(),
            header.sequence_id(),
            header.channel(),
        );
        self.payload(&fragment.payload, fragment.pad_bits);
        self.end_fragment(committed, reason)
    }

    /// Roll back trains idle for longer than the configured limit
    ///
    /// Returns the number of trains rolled back.
    pub fn evict_stale(&mut self) -> usize {
        let stale: Vec<TrainKey> = self
            .slots
            .iter()
            .filter(|(_, slot)| slot.touched.elapsed() >= self.stale_after)
            .map(|(key, _)| *key)
            .collect();

        let mut evicted = 0;
        for key in stale {
            let Some(mut slot) = self.slots.remove(&key) else {
                continue;
            };
            let reason = format!(
                "train {:?} on {} idle for {:?}",
                key.1,
                key.0,
                slot.touched.elapsed()
            );
            let mut tally = Tally::new(&mut self.observer);
            if slot.transaction.abort(&reason, &mut tally) == Outcome::RolledBack {
                evicted += 1;
            }
            let rollbacks = tally.rollbacks;
            if let Some(activity) = self.activity.get_mut(&key.0) {
                activity.rollbacks += rollbacks;
            }
        }
        if evicted > 0 {
            log::debug!("evicted {} stale trains", evicted);
        }
        evicted
    }

    /// Trains currently open
    pub fn open_trains(&self) -> usize {
        self.slots
            .values()
            .filter(|slot| slot.transaction.is_collecting())
            .count()
    }

    /// Statistics for one channel
    pub fn stats(&self, channel: Channel) -> ChannelStats {
        let activity = self.activity.get(&channel).cloned().unwrap_or_default();
        let total = activity.commits + activity.rollbacks;
        ChannelStats {
            channel,
            commits: activity.commits,
            rollbacks: activity.rollbacks,
            error_rate: if total > 0 {
                activity.rollbacks as f32 / total as f32
            } else {
                0.0
            },
            idle: activity.last_activity.map(|instant| instant.elapsed()),
        }
    }

    /// Statistics for every channel seen so far
    pub fn all_stats(&self) -> Vec<ChannelStats> {
        let mut channels: Vec<Channel> = self.activity.keys().copied().collect();
        channels.sort();
        channels.into_iter().map(|c| self.stats(c)).collect()
    }

    /// The observer
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// The observer, mutably
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consume the router, returning the observer
    pub fn into_observer(self) -> O {
        self.observer
    }
}

/// Builder for multi-channel routers
#[derive(Debug, Clone, Copy)]
pub struct RouterBuilder {
    settings: ParserBuilder,
    stale_after: Duration,
}

impl RouterBuilder {
    /// Trains idle this long are evicted by default
    pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(60);

    /// Create a new router builder
    pub fn new() -> Self {
        RouterBuilder {
            settings: ParserBuilder::new(),
            stale_after: Self::DEFAULT_STALE_AFTER,
        }
    }

    /// Longest train accepted
    pub fn max_fragments(mut self, max: u8) -> Self {
        self.settings = self.settings.max_fragments(max);
        self
    }

    /// Suppress out-of-range coordinates and courses
    pub fn range_checks(mut self, enabled: bool) -> Self {
        self.settings = self.settings.range_checks(enabled);
        self
    }

    /// Idle time after which [`Router::evict_stale`] rolls a train back
    pub fn stale_after(mut self, after: Duration) -> Self {
        self.stale_after = after;
        self
    }

    /// Build the router
    pub fn build<O: AisObserver>(self, observer: O) -> Router<O> {
        Router {
            observer,
            slots: HashMap::new(),
            activity: HashMap::new(),
            current: None,
            settings: self.settings,
            stale_after: self.stale_after,
        }
    }
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
