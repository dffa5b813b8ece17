use std::io::{ErrorKind, Read};

use bytes::{Bytes, BytesMut};
use tracing::trace;

use crate::config::ReaderConfig;
use crate::error::{MessageError, Result};

const INITIAL_BUFFER_CAPACITY: usize = 8 * 1024;
const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Reads a complete reply body from a transport stream.
///
/// The stream is taken by value and dropped before `read` returns, on the
/// success path and on every error path alike.
#[derive(Debug, Clone, Default)]
pub struct ReplyReader {
    config: ReaderConfig,
}

impl ReplyReader {
    /// Create a reply reader with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reply reader with explicit configuration.
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read `stream` to end-of-stream and return the collected bytes.
    ///
    /// An empty stream gives an empty buffer. Any error from the stream,
    /// including `UnexpectedEof`, ends the read with
    /// [`MessageError::Read`]; only `Interrupted` is reissued.
    pub fn read<R: Read>(&self, stream: R) -> Result<Bytes> {
        let mut stream = stream;
        let mut buf = BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY);
        let mut chunk = [0u8; READ_CHUNK_SIZE];

        loop {
            let read = match stream.read(&mut chunk) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => {
                    trace!(received = buf.len(), error = %err, "reply stream failed");
                    return Err(MessageError::Read(err));
                }
            };

            if read == 0 {
                break;
            }

            if buf.len() + read > self.config.max_reply_size {
                return Err(MessageError::ReplyTooLarge {
                    max: self.config.max_reply_size,
                });
            }
            buf.extend_from_slice(&chunk[..read]);
        }

        trace!(bytes = buf.len(), "read reply");
        Ok(buf.freeze())
    }

    /// Current reader configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }
}

/// Read a reply with the default configuration.
pub fn read_reply<R: Read>(stream: R) -> Result<Bytes> {
    ReplyReader::new().read(stream)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    /// Wraps a reader and counts how many times it is dropped.
    struct Tracked<R> {
        inner: R,
        drops: Arc<AtomicUsize>,
    }

    impl<R> Tracked<R> {
        fn new(inner: R) -> (Self, Arc<AtomicUsize>) {
            let drops = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    inner,
                    drops: Arc::clone(&drops),
                },
                drops,
            )
        }
    }

    impl<R: Read> Read for Tracked<R> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.inner.read(buf)
        }
    }

    impl<R> Drop for Tracked<R> {
        fn drop(&mut self) {
            self.drops.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct FailingStream;

    impl Read for FailingStream {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(ErrorKind::UnexpectedEof))
        }
    }

    /// Yields its bytes, then fails instead of reporting end-of-stream.
    struct TruncatedStream {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for TruncatedStream {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.pos >= self.bytes.len() {
                return Err(std::io::Error::from(ErrorKind::UnexpectedEof));
            }
            let n = (self.bytes.len() - self.pos).min(buf.len());
            buf[..n].copy_from_slice(&self.bytes[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    #[derive(Debug)]
    struct ByteByByteReader {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for ByteByByteReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.pos >= self.bytes.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.bytes[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    struct InterruptedThenData {
        interrupted: bool,
        inner: Cursor<Vec<u8>>,
    }

    impl Read for InterruptedThenData {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            self.inner.read(buf)
        }
    }

    const REPLY: &[u8] = br#"{"result":{"blocks":1},"error":null,"id":"noderpc-1"}"#;

    #[test]
    fn returns_bytes_unchanged_and_releases_stream() {
        let (stream, drops) = Tracked::new(Cursor::new(REPLY.to_vec()));
        let bytes = read_reply(stream).unwrap();
        assert_eq!(bytes.as_ref(), REPLY);
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn empty_stream_is_an_empty_buffer() {
        let bytes = read_reply(Cursor::new(Vec::<u8>::new())).unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn unexpected_eof_is_a_read_error_and_releases_stream() {
        let (stream, drops) = Tracked::new(FailingStream);
        let err = read_reply(stream).unwrap_err();
        assert!(matches!(err, MessageError::Read(e) if e.kind() == ErrorKind::UnexpectedEof));
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn truncation_after_partial_read_is_a_read_error() {
        let (stream, drops) = Tracked::new(TruncatedStream {
            bytes: REPLY[..10].to_vec(),
            pos: 0,
        });
        let err = read_reply(stream).unwrap_err();
        assert!(matches!(err, MessageError::Read(_)));
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn partial_reads_are_reassembled() {
        let reader = ByteByByteReader {
            bytes: REPLY.to_vec(),
            pos: 0,
        };
        assert_eq!(read_reply(reader).unwrap().as_ref(), REPLY);
    }

    #[test]
    fn interrupted_read_is_reissued() {
        let reader = InterruptedThenData {
            interrupted: false,
            inner: Cursor::new(REPLY.to_vec()),
        };
        assert_eq!(read_reply(reader).unwrap().as_ref(), REPLY);
    }

    #[test]
    fn large_reply_spanning_many_chunks() {
        let payload = vec![b'x'; 5 * READ_CHUNK_SIZE + 17];
        let bytes = read_reply(Cursor::new(payload.clone())).unwrap();
        assert_eq!(bytes.len(), payload.len());
    }

    #[test]
    fn oversized_reply_is_rejected_and_releases_stream() {
        let reader = ReplyReader::with_config(ReaderConfig { max_reply_size: 16 });
        let (stream, drops) = Tracked::new(Cursor::new(REPLY.to_vec()));
        let err = reader.read(stream).unwrap_err();
        assert!(matches!(err, MessageError::ReplyTooLarge { max: 16 }));
        assert_eq!(drops.load(Ordering::SeqCst), 1);
        assert_eq!(reader.config().max_reply_size, 16);
    }

    #[test]
    fn reply_exactly_at_limit_is_accepted() {
        let reader = ReplyReader::with_config(ReaderConfig {
            max_reply_size: REPLY.len(),
        });
        assert_eq!(reader.read(Cursor::new(REPLY.to_vec())).unwrap().len(), REPLY.len());
    }
}
