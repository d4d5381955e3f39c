//! Engine-level coverage over a small self-contained message type:
//!
//! ```not_rust
//! Record ::= SEQUENCE {
//!         id      INTEGER,
//!         enabled BOOLEAN,
//!         labels  SET OF GeneralString
//! }
//! ```

use pretty_assertions::assert_eq;
use quill_ber::actions::{self, Ruleset};
use quill_ber::{
    decode_full, Container, DecodeError, DecodeOutcome, Grammar, GrammarState, Node, Tag, Tlv,
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Record {
    id: i64,
    enabled: bool,
    labels: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum RecordState {
    Start,
    Id,
    Enabled,
    Labels,
    Label,
    Done,
    End,
}

impl GrammarState for RecordState {
    const START: Self = RecordState::Start;

    fn is_end(self) -> bool {
        self == RecordState::End
    }
}

fn store_id(record: &mut Record, tlv: &Tlv<'_>) -> Result<(), DecodeError> {
    record.id = actions::integer(tlv, Ruleset::Der)?;
    Ok(())
}

fn store_enabled(record: &mut Record, tlv: &Tlv<'_>) -> Result<(), DecodeError> {
    record.enabled = actions::boolean(tlv, Ruleset::Der)?;
    Ok(())
}

fn push_label(record: &mut Record, tlv: &Tlv<'_>) -> Result<(), DecodeError> {
    record.labels.push(actions::general_string(tlv)?);
    Ok(())
}

fn record_grammar() -> Grammar<RecordState, Record> {
    Grammar::builder("Record")
        .enter(RecordState::Start, Tag::SEQUENCE, RecordState::Id, RecordState::End)
        .primitive(RecordState::Id, Tag::INTEGER, RecordState::Enabled, store_id)
        .primitive(RecordState::Enabled, Tag::BOOLEAN, RecordState::Labels, store_enabled)
        .enter(RecordState::Labels, Tag::SET, RecordState::Label, RecordState::Done)
        .primitive(RecordState::Label, Tag::GENERAL_STRING, RecordState::Label, push_label)
        .build()
}

fn encode_record(record: &Record) -> Vec<u8> {
    let labels = record
        .labels
        .iter()
        .map(|label| Node::general_string(label).unwrap())
        .collect();
    quill_ber::encode::to_vec(Node::sequence(vec![
        Node::integer(record.id),
        Node::boolean(record.enabled),
        Node::set(labels),
    ]))
}

fn sample() -> Record {
    Record {
        id: 77,
        enabled: true,
        labels: vec!["alpha".to_string(), "beta".to_string()],
    }
}

#[test]
fn round_trip() {
    let grammar = record_grammar();
    let record = sample();

    let bytes = encode_record(&record);
    let decoded = decode_full(&grammar, &bytes).unwrap();
    assert_eq!(decoded, record);
    assert_eq!(encode_record(&decoded), bytes);
}

#[test]
fn empty_repeated_field_round_trips() {
    let grammar = record_grammar();
    let record = Record {
        id: -5,
        enabled: false,
        labels: Vec::new(),
    };

    let bytes = encode_record(&record);
    assert_eq!(decode_full(&grammar, &bytes).unwrap(), record);
}

#[test]
fn chunking_is_invariant_at_every_split_point() {
    let grammar = record_grammar();
    let record = sample();
    let bytes = encode_record(&record);

    for split in 0..=bytes.len() {
        let mut container = Container::new(&grammar);
        let first = container.decode(&bytes[..split]).unwrap();
        let decoded = match first {
            DecodeOutcome::Complete(decoded) => decoded,
            DecodeOutcome::NeedMore => match container.decode(&bytes[split..]).unwrap() {
                DecodeOutcome::Complete(decoded) => decoded,
                DecodeOutcome::NeedMore => panic!("decode stalled at split {split}"),
            },
        };
        assert_eq!(decoded, record, "split at {split}");
    }
}

#[test]
fn byte_at_a_time_feeding() {
    let grammar = record_grammar();
    let record = sample();
    let bytes = encode_record(&record);

    let mut container = Container::new(&grammar);
    for (index, byte) in bytes.iter().enumerate() {
        match container.decode(&[*byte]).unwrap() {
            DecodeOutcome::Complete(decoded) => {
                assert_eq!(index, bytes.len() - 1);
                assert_eq!(decoded, record);
                return;
            }
            DecodeOutcome::NeedMore => {
                assert!(!container.grammar_end_allowed());
            }
        }
    }
    panic!("decode never completed");
}

#[test]
fn pipelined_messages_on_one_stream() {
    let grammar = record_grammar();
    let first = sample();
    let second = Record {
        id: 1,
        enabled: false,
        labels: vec!["gamma".to_string()],
    };

    let mut stream = encode_record(&first);
    stream.extend_from_slice(&encode_record(&second));

    let mut container = Container::new(&grammar);
    match container.decode(&stream).unwrap() {
        DecodeOutcome::Complete(decoded) => assert_eq!(decoded, first),
        DecodeOutcome::NeedMore => panic!("first message did not complete"),
    }
    match container.decode(&[]).unwrap() {
        DecodeOutcome::Complete(decoded) => assert_eq!(decoded, second),
        DecodeOutcome::NeedMore => panic!("second message did not complete"),
    }
    assert_eq!(container.remaining(), 0);
}

#[test]
fn unexpected_tag_is_deterministic() {
    let grammar = record_grammar();
    let mut bytes = encode_record(&sample());
    // swap the BOOLEAN identifier for an OCTET STRING one
    let boolean_at = bytes
        .windows(3)
        .position(|tlv| tlv == [0x01, 0x01, 0xFF])
        .unwrap();
    bytes[boolean_at] = 0x04;

    for _ in 0..3 {
        let err = decode_full(&grammar, &bytes).unwrap_err();
        match err {
            DecodeError::UnexpectedTag { grammar, state, tag } => {
                assert_eq!(grammar, "Record");
                assert_eq!(state, "Enabled");
                assert_eq!(tag, Tag::OCTET_STRING);
            }
            other => panic!("expected UnexpectedTag, got {other:?}"),
        }
    }
}

#[test]
fn truncated_input_suspends_then_completes() {
    let grammar = record_grammar();
    let record = sample();
    let bytes = encode_record(&record);

    let mut container = Container::new(&grammar);
    assert_eq!(container.decode(&bytes[..3]).unwrap(), DecodeOutcome::NeedMore);
    match container.decode(&bytes[3..]).unwrap() {
        DecodeOutcome::Complete(decoded) => assert_eq!(decoded, record),
        DecodeOutcome::NeedMore => panic!("decode stalled"),
    }
}

#[test]
fn one_shot_decode_rejects_truncation_and_trailing_bytes() {
    let grammar = record_grammar();
    let bytes = encode_record(&sample());

    assert_eq!(
        decode_full(&grammar, &bytes[..bytes.len() - 1]),
        Err(DecodeError::Truncated)
    );

    let mut padded = bytes;
    padded.push(0x00);
    assert_eq!(
        decode_full(&grammar, &padded),
        Err(DecodeError::Malformed("trailing bytes after complete message"))
    );
}

#[test]
fn nested_tlv_must_fit_its_parent() {
    let grammar = record_grammar();
    // outer SEQUENCE claims 3 value octets, inner INTEGER claims 3 of its own
    let bytes = [0x30, 0x03, 0x02, 0x03, 0x01];
    assert_eq!(
        decode_full(&grammar, &bytes),
        Err(DecodeError::Malformed("nested TLV overruns its enclosing value"))
    );
}

#[test]
fn indefinite_length_is_rejected_by_the_driver() {
    let grammar = record_grammar();
    let bytes = [0x30, 0x80, 0x02, 0x01, 0x00, 0x00, 0x00];
    assert_eq!(
        decode_full(&grammar, &bytes),
        Err(DecodeError::Malformed("indefinite length is not supported"))
    );
}

#[test]
fn failure_leaves_other_containers_untouched() {
    let grammar = record_grammar();
    let good = encode_record(&sample());

    let mut poisoned = Container::new(&grammar);
    assert!(poisoned.decode(&[0x31, 0x00]).is_err());

    // the shared grammar still serves fresh sessions
    let decoded = decode_full(&grammar, &good).unwrap();
    assert_eq!(decoded, sample());
}
