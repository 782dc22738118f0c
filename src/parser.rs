//! Fragment reassembly and message commit/rollback

use crate::bits::BitString;
use crate::core::{Channel, FragmentHeader, SentenceFragment};
use crate::encoding::ArmorDecoder;
use crate::engine::DecodeOptions;
use crate::error::ParseError;
use crate::itu;
use crate::message::{self, MessageType};
use crate::observer::AisObserver;

/// What became of a fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Accepted; the train needs more fragments
    Pending,
    /// The train completed and decoded
    Committed(MessageType),
    /// The train was abandoned
    RolledBack,
    /// Nothing happened: a foreign channel, or the tail of an abandoned train
    Ignored,
}

#[derive(Debug)]
struct Train {
    sequence_id: Option<u8>,
    channel: Channel,
    expected: u8,
    seen: u8,
    bits: BitString,
}

impl Train {
    fn new(header: &FragmentHeader) -> Self {
        Train {
            sequence_id: header.sequence_id(),
            channel: header.channel(),
            expected: header.total(),
            seen: 0,
            bits: BitString::with_capacity(header.total() as usize * 60 * itu::BITS_PER_CHARACTER),
        }
    }

    fn continues(&self, header: &FragmentHeader) -> bool {
        self.sequence_id == header.sequence_id()
            && self.channel == header.channel()
            && self.expected == header.total()
            && header.index() == self.seen + 1
    }
}

#[derive(Debug)]
enum State {
    Idle,
    Collecting(Train),
    // Remaining fragments of a rolled-back train are swallowed without
    // further observer calls
    Discarding {
        sequence_id: Option<u8>,
        channel: Channel,
        expected: u8,
        seen: u8,
    },
}

#[derive(Debug)]
enum Current {
    None,
    Accepted { header: FragmentHeader, payload: bool },
    Settled(Outcome),
}

/// Reassembly state machine for one (channel, sequential id) partition
///
/// Holds no observer; every call takes the observer to report to. A
/// [`Parser`] pairs one transaction with an owned observer.
#[derive(Debug)]
pub struct Transaction {
    state: State,
    current: Current,
    max_fragments: u8,
    options: DecodeOptions,
}

impl Transaction {
    /// Create an idle transaction
    pub fn new(max_fragments: u8, options: DecodeOptions) -> Self {
        Transaction {
            state: State::Idle,
            current: Current::None,
            max_fragments,
            options,
        }
    }

    /// No train is open
    pub fn is_idle(&self) -> bool {
        matches!(self.state, State::Idle)
    }

    /// A train is collecting fragments
    pub fn is_collecting(&self) -> bool {
        matches!(self.state, State::Collecting(_))
    }

    /// Bits gathered so far for the open train
    pub fn pending_bits(&self) -> usize {
        match &self.state {
            State::Collecting(train) => train.bits.len(),
            _ => 0,
        }
    }

    /// Start a fragment
    pub fn begin_fragment<O: AisObserver + ?Sized>(
        &mut self,
        total: u8,
        index: u8,
        sequence_id: Option<u8>,
        channel: Channel,
        observer: &mut O,
    ) {
        log::trace!(
            "fragment {}/{} seq {:?} on {}",
            index,
            total,
            sequence_id,
            channel
        );
        let header = match FragmentHeader::new(total, index, sequence_id, channel) {
            Ok(header) => header,
            Err(e) => return self.fail(e, observer),
        };
        if total > self.max_fragments {
            return self.fail(
                ParseError::sequence(format!(
                    "train of {} fragments exceeds the limit of {}",
                    total, self.max_fragments
                )),
                observer,
            );
        }

        if header.is_first() {
            if let State::Collecting(train) = &self.state {
                let reason = ParseError::sequence(format!(
                    "train {:?} preempted after {} of {} fragments",
                    train.sequence_id, train.seen, train.expected
                ));
                log::debug!("{}", reason);
                observer.rollback(&reason.to_string());
            }
            observer.begin();
            self.state = State::Collecting(Train::new(&header));
            self.current = Current::Accepted {
                header,
                payload: false,
            };
            return;
        }

        match &mut self.state {
            State::Collecting(train) if train.continues(&header) => {
                self.current = Current::Accepted {
                    header,
                    payload: false,
                };
            }
            State::Discarding {
                sequence_id,
                channel,
                expected,
                seen,
            } if *sequence_id == header.sequence_id()
                && *channel == header.channel()
                && *expected == header.total()
                && header.index() == *seen + 1 =>
            {
                log::trace!("discarding fragment {} of abandoned train", index);
                *seen = header.index();
                if header.is_final() {
                    self.state = State::Idle;
                }
                self.current = Current::Settled(Outcome::Ignored);
            }
            State::Collecting(train) => {
                let reason = ParseError::sequence(format!(
                    "expected fragment {}/{} of train {:?}, got {}/{} of train {:?}",
                    train.seen + 1,
                    train.expected,
                    train.sequence_id,
                    index,
                    total,
                    sequence_id
                ));
                self.fail(reason, observer);
            }
            _ => {
                let reason = ParseError::sequence(format!(
                    "fragment {}/{} of train {:?} has no first fragment",
                    index, total, sequence_id
                ));
                self.fail(reason, observer);
            }
        }
    }

    /// Append a fragment's armored payload
    pub fn payload<O: AisObserver + ?Sized>(&mut self, armored: &str, pad_bits: u8, observer: &mut O) {
        let header = match &mut self.current {
            Current::Accepted { header, payload } => {
                if *payload {
                    log::warn!("second payload for fragment {} ignored", header.index());
                    return;
                }
                *payload = true;
                *header
            }
            _ => return,
        };
        let State::Collecting(train) = &mut self.state else {
            return;
        };

        let result = if pad_bits > SentenceFragment::MAX_PAD_BITS {
            Err(ParseError::invalid_fragment(format!(
                "{} pad bits, at most {} allowed",
                pad_bits,
                SentenceFragment::MAX_PAD_BITS
            )))
        } else {
            ArmorDecoder::decode_into(armored, &mut train.bits)
        };
        if let Err(e) = result {
            return self.abandon(e, &header, observer);
        }

        if header.is_final() {
            let len = train.bits.len().saturating_sub(pad_bits as usize);
            train.bits.truncate(len);
        } else if pad_bits != 0 {
            log::warn!(
                "{} pad bits on non-final fragment {}/{} ignored",
                pad_bits,
                header.index(),
                header.total()
            );
        }
    }

    /// Finish a fragment
    ///
    /// `committed` is the sentence layer's verdict on the sentence; an
    /// uncommitted fragment rolls back its whole train.
    pub fn end_fragment<O: AisObserver + ?Sized>(
        &mut self,
        committed: bool,
        reason: &str,
        observer: &mut O,
    ) -> Outcome {
        let header = match std::mem::replace(&mut self.current, Current::None) {
            Current::Accepted { header, .. } => header,
            Current::Settled(outcome) => return outcome,
            Current::None => {
                log::debug!("end of fragment without a beginning");
                return Outcome::Ignored;
            }
        };

        if !committed {
            self.abandon(ParseError::checksum(reason), &header, observer);
            return Outcome::RolledBack;
        }

        match std::mem::replace(&mut self.state, State::Idle) {
            State::Collecting(train) if header.is_final() => self.decode(&train.bits, reason, observer),
            State::Collecting(mut train) => {
                train.seen = header.index();
                self.state = State::Collecting(train);
                Outcome::Pending
            }
            other => {
                self.state = other;
                Outcome::Ignored
            }
        }
    }

    /// Drive all three fragment calls at once
    pub fn fragment<O: AisObserver + ?Sized>(
        &mut self,
        fragment: &SentenceFragment,
        committed: bool,
        reason: &str,
        observer: &mut O,
    ) -> Outcome {
        let header = fragment.header;
        self.begin_fragment(
            header.total(),
            header.index(),
            header.sequence_id(),
            header.channel(),
            observer,
        );
        self.payload(&fragment.payload, fragment.pad_bits, observer);
        self.end_fragment(committed, reason, observer)
    }

    /// Roll back any open train
    pub fn abort<O: AisObserver + ?Sized>(&mut self, reason: &str, observer: &mut O) -> Outcome {
        self.current = Current::None;
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Collecting(_) => {
                log::debug!("train aborted: {}", reason);
                observer.rollback(reason);
                Outcome::RolledBack
            }
            _ => Outcome::Ignored,
        }
    }

    /// Mark the current fragment as not for this transaction
    pub(crate) fn skip(&mut self) {
        self.current = Current::Settled(Outcome::Ignored);
    }

    fn decode<O: AisObserver + ?Sized>(&mut self, bits: &BitString, reason: &str, observer: &mut O) -> Outcome {
        match message::decode(bits, observer, self.options) {
            Ok(message_type) => {
                log::debug!("committed {} from {} bits", message_type, bits.len());
                observer.commit(reason);
                Outcome::Committed(message_type)
            }
            Err(e) => {
                log::debug!("rolled back {}-bit message: {}", bits.len(), e);
                observer.rollback(&e.to_string());
                Outcome::RolledBack
            }
        }
    }

    // Rejection before or outside an open train still pairs begin with rollback
    fn fail<O: AisObserver + ?Sized>(&mut self, error: ParseError, observer: &mut O) {
        if !self.is_collecting() {
            observer.begin();
        }
        self.state = State::Idle;
        log::debug!("rolled back: {}", error);
        observer.rollback(&error.to_string());
        self.current = Current::Settled(Outcome::RolledBack);
    }

    fn abandon<O: AisObserver + ?Sized>(&mut self, error: ParseError, header: &FragmentHeader, observer: &mut O) {
        let State::Collecting(train) = std::mem::replace(&mut self.state, State::Idle) else {
            return;
        };
        log::debug!("rolled back: {}", error);
        observer.rollback(&error.to_string());
        if !header.is_final() {
            self.state = State::Discarding {
                sequence_id: train.sequence_id,
                channel: train.channel,
                expected: train.expected,
                seen: header.index(),
            };
        }
        self.current = Current::Settled(Outcome::RolledBack);
    }
}

/// AIS payload parser for one channel partition
///
/// Feeds fragments through a [`Transaction`] and reports decoded messages to
/// an owned observer.
pub struct Parser<O: AisObserver> {
    transaction: Transaction,
    observer: O,
    channel: Option<Channel>,
}

impl<O: AisObserver> Parser<O> {
    /// Create a parser with default settings
    pub fn new(observer: O) -> Self {
        ParserBuilder::new().build(observer)
    }

    /// Start a fragment
    ///
    /// Fragments on a channel other than the configured one are ignored.
    pub fn begin_fragment(&mut self, total: u8, index: u8, sequence_id: Option<u8>, channel: Channel) {
        if self.channel.is_some_and(|own| own != channel) {
            log::trace!("fragment on {} ignored", channel);
            self.transaction.skip();
            return;
        }
        self.transaction
            .begin_fragment(total, index, sequence_id, channel, &mut self.observer);
    }

    /// Append the current fragment's armored payload
    pub fn payload(&mut self, armored: &str, pad_bits: u8) {
        self.transaction.payload(armored, pad_bits, &mut self.observer);
    }

    /// Finish the current fragment
    pub fn end_fragment(&mut self, committed: bool, reason: &str) -> Outcome {
        self.transaction.end_fragment(committed, reason, &mut self.observer)
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

    /// Channel this parser accepts, if restricted
    pub fn channel(&self) -> Option<Channel> {
        self.channel
    }

    /// The observer
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// The observer, mutably
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consume the parser, returning the observer
    pub fn into_observer(self) -> O {
        self.observer
    }
}

/// Builder for AIS payload parsers
#[derive(Debug, Clone, Copy)]
pub struct ParserBuilder {
    channel: Option<Channel>,
    max_fragments: u8,
    range_checks: bool,
}

impl ParserBuilder {
    /// Create a new parser builder
    pub fn new() -> Self {
        ParserBuilder {
            channel: None,
            max_fragments: itu::DEFAULT_MAX_FRAGMENTS,
            range_checks: false,
        }
    }

    /// Accept fragments from one channel only
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Longest train accepted
    pub fn max_fragments(mut self, max: u8) -> Self {
        self.max_fragments = max;
        self
    }

    /// Suppress out-of-range coordinates and courses
    pub fn range_checks(mut self, enabled: bool) -> Self {
        self.range_checks = enabled;
        self
    }

    /// Build a bare transaction with these settings
    pub fn transaction(&self) -> Transaction {
        Transaction::new(
            self.max_fragments,
            DecodeOptions {
                range_checks: self.range_checks,
            },
        )
    }

    /// Build the parser
    pub fn build<O: AisObserver>(self, observer: O) -> Parser<O> {
        Parser {
            transaction: self.transaction(),
            observer,
            channel: self.channel,
        }
    }
}

impl Default for ParserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::ArmorEncoder;
    use crate::field::Field;
    use crate::observer::recorder::{position_report, Event, Payload, Recorded, Recorder};
    use proptest::prelude::*;

    fn parser() -> Parser<Recorder> {
        Parser::new(Recorder::default())
    }

    fn single(parser: &mut Parser<Recorder>, payload: &Payload, committed: bool) -> Outcome {
        let (armored, pad) = payload.armor();
        parser.begin_fragment(1, 1, None, Channel::A);
        parser.payload(&armored, pad);
        parser.end_fragment(committed, if committed { "ok" } else { "bad checksum" })
    }

    fn static_and_voyage() -> Payload {
        Payload::header(5, 351_759_000)
            .uint(0, 2)
            .uint(9_134_270, 30)
            .text("3FOF8", 7)
            .text("EVER DIADEM", 20)
            .uint(70, 8)
            .uint(225, 9)
            .uint(70, 9)
            .uint(1, 6)
            .uint(31, 6)
            .uint(1, 4)
            .uint(5, 4)
            .uint(15, 5)
            .uint(14, 5)
            .uint(0, 6)
            .uint(122, 8)
            .text("NEW YORK", 20)
            .uint(0, 1)
            .uint(0, 1)
    }

    #[test]
    fn test_single_fragment_commit() {
        let mut parser = parser();
        let outcome = single(&mut parser, &position_report(), true);
        assert_eq!(outcome, Outcome::Committed(MessageType::PositionReportScheduled));

        let rec = parser.observer();
        assert_eq!(rec.events.first(), Some(&Event::Begin));
        assert_eq!(rec.events.last(), Some(&Event::Commit("ok".into())));
        assert_eq!(rec.fields().len(), 15);
        assert_eq!((rec.begins(), rec.commits(), rec.rollbacks()), (1, 1, 0));
        assert!(parser.transaction.is_idle());
    }

    #[test]
    fn test_uncommitted_fragment_rolls_back() {
        let mut parser = parser();
        assert_eq!(single(&mut parser, &position_report(), false), Outcome::RolledBack);

        let rec = parser.observer();
        assert!(rec.fields().is_empty());
        assert_eq!((rec.begins(), rec.commits(), rec.rollbacks()), (1, 0, 1));
        assert!(rec.last_rollback().unwrap().contains("bad checksum"));
    }

    #[test]
    fn test_two_fragment_static_data() {
        let payload = static_and_voyage();
        assert_eq!(payload.len(), 424);
        let (armored, pad) = payload.armor();
        assert_eq!((armored.len(), pad), (71, 2));
        let (first, second) = armored.split_at(60);

        let mut parser = parser();
        parser.begin_fragment(2, 1, Some(3), Channel::B);
        parser.payload(first, 0);
        assert_eq!(parser.end_fragment(true, "ok"), Outcome::Pending);
        assert!(parser.observer().fields().is_empty());

        parser.begin_fragment(2, 2, Some(3), Channel::B);
        parser.payload(second, pad);
        assert_eq!(parser.transaction.pending_bits(), armored.len() * 6 - 2);
        assert_eq!(
            parser.end_fragment(true, "ok"),
            Outcome::Committed(MessageType::StaticAndVoyageData)
        );

        let rec = parser.observer();
        assert_eq!(rec.get(Field::ShipName), Some(Recorded::Text("EVER DIADEM".into())));
        assert_eq!(rec.get(Field::Destination), Some(Recorded::Text("NEW YORK".into())));
        assert_eq!(rec.get(Field::Draught), Some(Recorded::Float(12.2)));
        assert_eq!(rec.get(Field::Dte), Some(Recorded::Flag(true)));
        assert_eq!((rec.begins(), rec.commits(), rec.rollbacks()), (1, 1, 0));
    }

    #[test]
    fn test_skipped_fragment_rolls_back() {
        let (armored, _) = static_and_voyage().armor();
        let mut parser = parser();
        parser.begin_fragment(3, 1, Some(1), Channel::A);
        parser.payload(&armored[..30], 0);
        assert_eq!(parser.end_fragment(true, "ok"), Outcome::Pending);

        parser.begin_fragment(3, 3, Some(1), Channel::A);
        parser.payload(&armored[30..], 0);
        assert_eq!(parser.end_fragment(true, "ok"), Outcome::RolledBack);

        let rec = parser.observer();
        assert!(rec.fields().is_empty());
        assert_eq!((rec.begins(), rec.commits(), rec.rollbacks()), (1, 0, 1));
        assert!(rec.last_rollback().unwrap().contains("Fragment sequence error"));
    }

    #[test]
    fn test_uncommitted_middle_fragment_discards_train() {
        let (armored, pad) = static_and_voyage().armor();
        let mut parser = parser();
        let fragments = [(1, &armored[..24]), (2, &armored[24..48]), (3, &armored[48..])];
        let outcomes: Vec<_> = fragments
            .iter()
            .map(|&(index, text)| {
                parser.begin_fragment(3, index, Some(4), Channel::A);
                parser.payload(text, if index == 3 { pad } else { 0 });
                parser.end_fragment(index != 2, "checksum mismatch")
            })
            .collect();
        assert_eq!(
            outcomes,
            vec![Outcome::Pending, Outcome::RolledBack, Outcome::Ignored]
        );

        let rec = parser.observer();
        assert_eq!((rec.begins(), rec.commits(), rec.rollbacks()), (1, 0, 1));
        assert!(parser.transaction.is_idle());
    }

    #[test]
    fn test_armor_error_rolls_back() {
        let mut parser = parser();
        parser.begin_fragment(1, 1, None, Channel::A);
        parser.payload("15M67F!", 0);
        assert_eq!(parser.end_fragment(true, "ok"), Outcome::RolledBack);
        assert!(parser
            .observer()
            .last_rollback()
            .unwrap()
            .contains("Armor syntax error"));
    }

    #[test]
    fn test_new_train_preempts_open_one() {
        let (armored, _) = static_and_voyage().armor();
        let mut parser = parser();
        parser.begin_fragment(2, 1, Some(1), Channel::A);
        parser.payload(&armored[..60], 0);
        parser.end_fragment(true, "ok");

        assert_eq!(
            single(&mut parser, &position_report(), true),
            Outcome::Committed(MessageType::PositionReportScheduled)
        );
        let rec = parser.observer();
        assert_eq!(rec.events[0], Event::Begin);
        assert!(matches!(rec.events[1], Event::Rollback(_)));
        assert_eq!(rec.events[2], Event::Begin);
        assert_eq!((rec.begins(), rec.commits(), rec.rollbacks()), (2, 1, 1));
    }

    #[test]
    fn test_orphan_continuation() {
        let mut parser = parser();
        parser.begin_fragment(2, 2, Some(7), Channel::A);
        parser.payload("0000", 2);
        assert_eq!(parser.end_fragment(true, "ok"), Outcome::RolledBack);
        let rec = parser.observer();
        assert_eq!(rec.events.len(), 2);
        assert_eq!((rec.begins(), rec.rollbacks()), (1, 1));
    }

    #[test]
    fn test_unsupported_type_rolls_back() {
        let mut parser = parser();
        let payload = Payload::header(25, 1).uint(0, 64).uint(0, 64).uint(0, 2);
        assert_eq!(single(&mut parser, &payload, true), Outcome::RolledBack);
        let rec = parser.observer();
        assert!(rec.fields().is_empty());
        assert!(rec.last_rollback().unwrap().contains("Unknown message type"));
    }

    #[test]
    fn test_unknown_application_commits() {
        let mut parser = parser();
        let payload = Payload::header(8, 2_655_619)
            .uint(0, 2)
            .uint(366, 10)
            .uint(56, 6)
            .uint(0xDEAD_BEEF, 32);
        assert_eq!(
            single(&mut parser, &payload, true),
            Outcome::Committed(MessageType::BinaryBroadcast)
        );
        let rec = parser.observer();
        assert_eq!((rec.begins(), rec.commits(), rec.rollbacks()), (1, 1, 0));
        assert_eq!(rec.get(Field::Fid), Some(Recorded::Int(56)));
    }

    #[test]
    fn test_truncated_message_keeps_delivered_fields() {
        let mut parser = parser();
        let payload = Payload::header(1, 1).uint(0, 4).int(0, 8).uint(0, 10);
        assert_eq!(single(&mut parser, &payload, true), Outcome::RolledBack);
        let rec = parser.observer();
        assert_eq!(rec.fields().len(), 6);
        assert!(rec.last_rollback().unwrap().contains("Truncated"));
    }

    #[test]
    fn test_channel_filter() {
        let mut parser = ParserBuilder::new()
            .with_channel(Channel::A)
            .build(Recorder::default());
        let (armored, pad) = position_report().armor();
        parser.begin_fragment(1, 1, None, Channel::B);
        parser.payload(&armored, pad);
        assert_eq!(parser.end_fragment(true, "ok"), Outcome::Ignored);
        assert!(parser.observer().events.is_empty());
        assert_eq!(parser.channel(), Some(Channel::A));
    }

    #[test]
    fn test_fragment_limit() {
        let mut parser = ParserBuilder::new().max_fragments(2).build(Recorder::default());
        parser.begin_fragment(3, 1, Some(0), Channel::A);
        assert_eq!(parser.end_fragment(true, "ok"), Outcome::RolledBack);
        assert_eq!(parser.observer().begins(), 1);
        assert_eq!(parser.observer().rollbacks(), 1);
    }

    #[test]
    fn test_whole_fragment_call() -> crate::error::Result<()> {
        let (armored, pad) = position_report().armor();
        let fragment = SentenceFragment::new(FragmentHeader::single(Channel::A), armored, pad)?;
        let mut parser = parser();
        assert_eq!(
            parser.fragment(&fragment, true, "ok"),
            Outcome::Committed(MessageType::PositionReportScheduled)
        );
        Ok(())
    }

    #[test]
    fn test_range_checks_option() {
        let payload = Payload::header(27, 1)
            .uint(0, 1)
            .uint(0, 1)
            .uint(0, 4)
            .int(120_000, 18)
            .int(0, 17)
            .uint(10, 6)
            .uint(400, 9)
            .uint(0, 1)
            .uint(0, 1);

        let mut lenient = parser();
        single(&mut lenient, &payload, true);
        assert_eq!(lenient.observer().get(Field::CourseOverGround), Some(Recorded::Int(400)));
        assert_eq!(lenient.observer().get(Field::Longitude), Some(Recorded::Float(200.0)));

        let mut strict = ParserBuilder::new().range_checks(true).build(Recorder::default());
        single(&mut strict, &payload, true);
        assert!(strict.observer().get(Field::CourseOverGround).is_none());
        assert!(strict.observer().get(Field::Longitude).is_none());
        assert_eq!(strict.observer().commits(), 1);
    }

    proptest! {
        #[test]
        fn prop_single_fragment_commits_iff_committed(committed in any::<bool>(), mmsi in 0u32..(1 << 30)) {
            let mut parser = parser();
            let payload = Payload::header(1, mmsi).uint(0, 64).uint(0, 64).uint(0, 2);
            let (armored, pad) = ArmorEncoder::encode(&payload.bits);
            parser.begin_fragment(1, 1, None, Channel::A);
            parser.payload(&armored, pad);
            parser.end_fragment(committed, "");
            let rec = parser.observer();
            prop_assert_eq!(rec.commits(), committed as usize);
            prop_assert_eq!(rec.rollbacks(), !committed as usize);
            prop_assert!(parser.transaction.is_idle());
        }
    }
}
