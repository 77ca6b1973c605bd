//! Producer/consumer tests for the synchronized buffer.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use giztoy_limitbuf::{BufferError, LimitedBuffer, SyncCycleBuffer};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Frame layout: producer id, then a big-endian u16 sequence number.
const FRAME_LEN: usize = 3;

fn write_frame(buf: &SyncCycleBuffer, id: u8, seq: u16) -> bool {
    let [hi, lo] = seq.to_be_bytes();
    buf.with_locked(|inner| {
        if inner.free_write_space() < FRAME_LEN {
            return false;
        }
        inner.write(&[id, hi, lo]) == Ok(FRAME_LEN)
    })
}

fn read_frame(buf: &SyncCycleBuffer) -> Option<(u8, u16)> {
    buf.with_locked(|inner| {
        if inner.unread_size() < FRAME_LEN {
            return None;
        }
        let mut frame = [0u8; FRAME_LEN];
        match inner.read(&mut frame) {
            Ok(FRAME_LEN) => Some((frame[0], u16::from_be_bytes([frame[1], frame[2]]))),
            other => panic!("short frame read: {other:?}"),
        }
    })
}

#[test]
fn test_spsc_stream_preserves_order() {
    init_tracing();

    let buf = SyncCycleBuffer::with_capacity(61);
    let input: Vec<u8> = (0..200_000u32).map(|i| (i * 31 % 251) as u8).collect();

    let producer_buf = buf.clone();
    let producer_input = input.clone();
    let producer = thread::spawn(move || {
        let mut pending = &producer_input[..];
        let mut chunk = 1;
        while !pending.is_empty() {
            let n = pending.len().min(chunk);
            match producer_buf.write(&pending[..n]) {
                Ok(written) => pending = &pending[written..],
                Err(BufferError::NoAvailableSpace) => thread::yield_now(),
                Err(e) => panic!("unexpected write error: {e}"),
            }
            chunk = chunk % 97 + 1;
        }
    });

    let mut output = Vec::with_capacity(input.len());
    let mut scratch = [0u8; 45];
    while output.len() < input.len() {
        match buf.read(&mut scratch) {
            Ok(n) => output.extend_from_slice(&scratch[..n]),
            Err(BufferError::NoAvailableData) => thread::yield_now(),
            Err(e) => panic!("unexpected read error: {e}"),
        }
    }

    producer.join().unwrap();
    assert_eq!(output, input);
    assert!(buf.is_empty());

    let status = buf.status();
    assert_eq!(status.total_read(), input.len() as u64);
    assert_eq!(status.total_write(), input.len() as u64);
}

#[test]
fn test_many_producers_many_consumers() {
    init_tracing();

    const PRODUCERS: u8 = 4;
    const CONSUMERS: usize = 3;
    const FRAMES: u16 = 5_000;

    let buf = SyncCycleBuffer::with_capacity(64);
    let done = Arc::new(AtomicBool::new(false));

    let producers: Vec<_> = (0..PRODUCERS)
        .map(|id| {
            let buf = buf.clone();
            thread::spawn(move || {
                for seq in 0..FRAMES {
                    while !write_frame(&buf, id, seq) {
                        thread::yield_now();
                    }
                }
            })
        })
        .collect();

    let consumers: Vec<_> = (0..CONSUMERS)
        .map(|_| {
            let buf = buf.clone();
            let done = Arc::clone(&done);
            thread::spawn(move || {
                let mut seen: Vec<(u8, u16)> = Vec::new();
                loop {
                    match read_frame(&buf) {
                        Some(frame) => seen.push(frame),
                        None if done.load(Ordering::Acquire) && buf.is_empty() => break,
                        None => thread::yield_now(),
                    }
                }
                seen
            })
        })
        .collect();

    for producer in producers {
        producer.join().unwrap();
    }
    done.store(true, Ordering::Release);

    let mut per_producer: HashMap<u8, Vec<u16>> = HashMap::new();
    for consumer in consumers {
        let seen = consumer.join().unwrap();

        // FIFO order: each consumer sees a producer's frames in increasing order.
        let mut last: HashMap<u8, u16> = HashMap::new();
        for (id, seq) in seen {
            assert!(id < PRODUCERS, "corrupted producer id {id}");
            if let Some(prev) = last.insert(id, seq) {
                assert!(seq > prev, "producer {id}: {seq} after {prev}");
            }
            per_producer.entry(id).or_default().push(seq);
        }
    }

    // Every frame arrives exactly once.
    assert_eq!(per_producer.len(), PRODUCERS as usize);
    for (id, mut seqs) in per_producer {
        seqs.sort_unstable();
        let expected: Vec<u16> = (0..FRAMES).collect();
        assert_eq!(seqs, expected, "producer {id}");
    }
    assert!(buf.is_empty());
}

#[test]
fn test_concurrent_reset_keeps_buffer_consistent() {
    init_tracing();

    let buf = SyncCycleBuffer::with_capacity(32);
    let stop = Arc::new(AtomicBool::new(false));

    let workers: Vec<_> = (0..3)
        .map(|role| {
            let mut buf = buf.clone();
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                let mut scratch = [0u8; 11];
                while !stop.load(Ordering::Relaxed) {
                    match role {
                        0 => {
                            let _ = buf.write(b"abcdefghijklm");
                        }
                        1 => {
                            let _ = buf.read(&mut scratch);
                        }
                        _ => LimitedBuffer::reset(&mut buf),
                    }
                    let status = buf.status();
                    assert!(status.unread_size() <= 32);
                    assert!(status.unread_size() + status.free_write_space() <= 32);
                }
            })
        })
        .collect();

    thread::sleep(std::time::Duration::from_millis(50));
    stop.store(true, Ordering::Relaxed);
    for worker in workers {
        worker.join().unwrap();
    }

    assert!(!(buf.is_full() && buf.is_empty()));
}
