//! PNG container inspection
//!
//! Structural checks on encoded icons: signature, IHDR, chunk CRCs and the
//! terminating IEND. Pixel data is not decoded.

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

pub const IHDR_CHUNK_TYPE: &[u8; 4] = b"IHDR";

pub const IDAT_CHUNK_TYPE: &[u8; 4] = b"IDAT";

pub const IEND_CHUNK_TYPE: &[u8; 4] = b"IEND";

pub const IEND_CRC: u32 = 0xAE426082;

const IHDR_LEN: u32 = 13;

/// Signature plus a complete IHDR chunk
const MIN_HEADER_LEN: usize = 8 + 4 + 4 + IHDR_LEN as usize + 4;

/// Color type 2 in IHDR: RGB triples
pub const COLOR_TYPE_TRUECOLOR: u8 = 2;

/// Structure of a PNG buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngInfo {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
    pub interlaced: bool,
    pub chunk_count: usize,
    pub idat_count: usize,
    pub idat_total_bytes: u64,
    /// Every chunk's stored CRC matched its contents
    pub crc_valid: bool,
    /// The buffer ends with an IEND chunk and nothing after it
    pub has_iend: bool,
}

impl PngInfo {
    /// A buffer a decoder can read: valid CRCs, image data and a clean end
    pub fn is_well_formed(&self) -> bool {
        self.crc_valid && self.has_iend && self.idat_count > 0
    }
}

/// Inspects the chunk structure of a PNG buffer
///
/// Returns `None` when the buffer does not start with a PNG signature
/// followed by a 13-byte IHDR chunk with a valid CRC. Later defects are
/// reported through the returned [`PngInfo`].
pub fn inspect_png(data: &[u8]) -> Option<PngInfo> {
    if data.len() < MIN_HEADER_LEN || data[..8] != PNG_SIGNATURE {
        return None;
    }

    if &data[12..16] != IHDR_CHUNK_TYPE {
        return None;
    }

    let ihdr_len = u32::from_be_bytes([data[8], data[9], data[10], data[11]]);
    if ihdr_len != IHDR_LEN {
        return None;
    }

    let stored = u32::from_be_bytes([data[29], data[30], data[31], data[32]]);
    if crc32fast::hash(&data[12..29]) != stored {
        return None;
    }

    let mut info = PngInfo {
        width: u32::from_be_bytes([data[16], data[17], data[18], data[19]]),
        height: u32::from_be_bytes([data[20], data[21], data[22], data[23]]),
        bit_depth: data[24],
        color_type: data[25],
        interlaced: data[28] != 0,
        chunk_count: 0,
        idat_count: 0,
        idat_total_bytes: 0,
        crc_valid: true,
        has_iend: false,
    };

    let mut chunks = PngChunkIterator::new(data)?;
    let mut last_type = [0u8; 4];

    for chunk in chunks.by_ref() {
        info.chunk_count += 1;
        info.crc_valid &= chunk.crc_matches();
        if &chunk.chunk_type == IDAT_CHUNK_TYPE {
            info.idat_count += 1;
            info.idat_total_bytes += chunk.payload.len() as u64;
        }
        last_type = chunk.chunk_type;
    }

    info.has_iend = &last_type == IEND_CHUNK_TYPE && chunks.remaining() == 0;

    Some(info)
}

/// Returns true when `data` starts with the PNG signature
#[inline]
pub fn has_png_signature(data: &[u8]) -> bool {
    data.len() >= PNG_SIGNATURE.len() && data[..8] == PNG_SIGNATURE
}

/// One chunk as laid out in the buffer
#[derive(Debug, Clone, Copy)]
pub struct PngChunk<'a> {
    pub chunk_type: [u8; 4],
    pub payload: &'a [u8],
    pub stored_crc: u32,
}

impl PngChunk<'_> {
    /// CRC-32 over type and payload, as the PNG format defines it
    pub fn calculated_crc(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&self.chunk_type);
        hasher.update(self.payload);
        hasher.finalize()
    }

    pub fn crc_matches(&self) -> bool {
        self.calculated_crc() == self.stored_crc
    }
}

/// Walks the chunks after the signature, stopping at the first chunk that
/// does not fit in the buffer
pub struct PngChunkIterator<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> PngChunkIterator<'a> {
    pub fn new(data: &'a [u8]) -> Option<Self> {
        if !has_png_signature(data) {
            return None;
        }

        Some(Self { data, pos: 8 })
    }

    /// Bytes not consumed by a complete chunk
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

impl<'a> Iterator for PngChunkIterator<'a> {
    type Item = PngChunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos + 12 > self.data.len() {
            return None;
        }

        let length = u32::from_be_bytes([
            self.data[self.pos],
            self.data[self.pos + 1],
            self.data[self.pos + 2],
            self.data[self.pos + 3],
        ]) as usize;

        let chunk_type: [u8; 4] = [
            self.data[self.pos + 4],
            self.data[self.pos + 5],
            self.data[self.pos + 6],
            self.data[self.pos + 7],
        ];

        let total_size = 4 + 4 + length + 4;
        if total_size > self.data.len() - self.pos {
            return None;
        }

        let payload = &self.data[self.pos + 8..self.pos + 8 + length];
        let crc_start = self.pos + 8 + length;
        let stored_crc = u32::from_be_bytes([
            self.data[crc_start],
            self.data[crc_start + 1],
            self.data[crc_start + 2],
            self.data[crc_start + 3],
        ]);

        self.pos += total_size;

        Some(PngChunk {
            chunk_type,
            payload,
            stored_crc,
        })
    }
}
