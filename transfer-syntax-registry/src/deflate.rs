//! Implementation of Deflated Explicit VR Little Endian.
use dcmkit_encoding::transfer_syntax::DataRWAdapter;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use std::io::{self, Read, Write};

/// Immaterial type representing an adapter for deflated data.
///
/// The data set following the file meta group is compressed
/// as a raw DEFLATE stream (no zlib header).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct FlateAdapter;

impl DataRWAdapter for FlateAdapter {
    fn adapt_reader<'r>(&self, reader: Box<dyn Read + 'r>) -> Box<dyn Read + 'r> {
        Box::new(DeflateDecoder::new(reader))
    }

    fn adapt_writer<'w>(&self, writer: Box<dyn Write + 'w>) -> Box<dyn Write + 'w> {
        Box::new(DeflateWriter {
            encoder: DeflateEncoder::new(writer, Compression::fast()),
            finished: false,
        })
    }
}

/// DEFLATE encoder which ends its stream on `flush`,
/// so that errors writing the final block reach the caller.
///
/// The data set writer flushes exactly once, after the last element.
/// Writing after that is an error.
struct DeflateWriter<W: Write> {
    encoder: DeflateEncoder<W>,
    finished: bool,
}

impl<W: Write> Write for DeflateWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.finished {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "write after the end of the deflate stream",
            ));
        }
        self.encoder.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.finished {
            self.encoder.try_finish()?;
            self.finished = true;
        }
        self.encoder.get_mut().flush()
    }
}

#[cfg(test)]
mod tests {
    use super::FlateAdapter;
    use dcmkit_encoding::transfer_syntax::DataRWAdapter;
    use flate2::{Decompress, FlushDecompress, Status};
    use std::cell::RefCell;
    use std::io::{self, Read, Write};
    use std::rc::Rc;

    #[test]
    fn deflate_round_trip() {
        let data: Vec<u8> = (0..2048_u32).map(|x| (x % 7) as u8).collect();

        let mut compressed = Vec::new();
        {
            let mut writer = FlateAdapter.adapt_writer(Box::new(&mut compressed));
            writer.write_all(&data).unwrap();
            writer.flush().unwrap();
        }
        assert!(!compressed.is_empty());
        assert!(compressed.len() < data.len());

        let mut reader = FlateAdapter.adapt_reader(Box::new(&compressed[..]));
        let mut out = Vec::new();
        reader.read_to_end(&mut out).unwrap();
        assert_eq!(out, data);
    }

    /// Accepts a fixed number of bytes, then fails.
    struct ShortSink {
        room: usize,
    }

    impl Write for ShortSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.room == 0 {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "sink is full"));
            }
            let n = buf.len().min(self.room);
            self.room -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn finish_error_is_reported_on_flush() {
        let data: Vec<u8> = (0..4096_u32).map(|x| (x * 31 % 251) as u8).collect();

        let mut writer = FlateAdapter.adapt_writer(Box::new(ShortSink { room: 16 }));
        // the encoder buffers its output, so the write itself may succeed
        let _ = writer.write_all(&data);
        assert!(writer.flush().is_err());
    }

    /// Output shared with the test while the writer is still alive.
    #[derive(Clone, Default)]
    struct SharedSink(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn flush_ends_the_stream() {
        let sink = SharedSink::default();
        let mut writer = FlateAdapter.adapt_writer(Box::new(sink.clone()));
        writer.write_all(b"DICM").unwrap();
        writer.flush().unwrap();

        // the final block is out before the writer is dropped
        let compressed = sink.0.borrow().clone();
        let mut out = Vec::with_capacity(64);
        let status = Decompress::new(false)
            .decompress_vec(&compressed, &mut out, FlushDecompress::Finish)
            .unwrap();
        assert_eq!(status, Status::StreamEnd);
        assert_eq!(out, b"DICM");

        // flushing again is harmless
        writer.flush().unwrap();
        assert!(writer.write_all(b"more").is_err());
    }
}
