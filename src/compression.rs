use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};

use crate::error::{Error, Result};

pub fn compress(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut e = ZlibEncoder::new(Vec::with_capacity(bytes.len() / 2 + 16), Compression::default());
    e.write_all(bytes)?;
    Ok(e.finish()?)
}

/// Inflate a complete zlib stream.
///
/// A stream that runs out of input before its end marker is `CorruptObject`. The streaming
/// readers in flate2 hand back whatever was inflated so far in that case, so this drives
/// [`Decompress`] directly and insists on [`Status::StreamEnd`].
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut d = Decompress::new(true);
    let mut out = Vec::with_capacity(bytes.len() * 2 + 64);

    loop {
        let (in_before, out_before) = (d.total_in(), d.total_out());
        let consumed = in_before as usize;

        let status = d
            .decompress_vec(&bytes[consumed..], &mut out, FlushDecompress::None)
            .map_err(|e| Error::CorruptObject(format!("invalid zlib stream: {e}")))?;

        if status == Status::StreamEnd {
            return Ok(out);
        }

        if out.len() == out.capacity() {
            out.reserve(out.capacity());
            continue;
        }

        let stalled = d.total_in() == in_before && d.total_out() == out_before;
        if d.total_in() as usize == bytes.len() || stalled {
            return Err(Error::CorruptObject(
                "zlib stream ended before its end marker".into(),
            ));
        }
    }
}
