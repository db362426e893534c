//! Best-effort pixel dimension sniffing for uploaded raster images.
//!
//! Each parser is a pure function over the raw bytes that returns `None` for
//! anything malformed or truncated. Dimensions are advisory metadata, never a
//! reason to fail an upload, so no parser here returns an error.

/// Dispatches to the format-specific parser based on the declared MIME type.
///
/// SVG is text-based and intentionally not parsed; video and PDF types have
/// no raster dimensions to extract.
pub fn sniff_dimensions(mime_type: &str, bytes: &[u8]) -> Option<(u32, u32)> {
    match mime_type {
        "image/png" => png_dimensions(bytes),
        "image/jpeg" | "image/jpg" => jpeg_dimensions(bytes),
        "image/gif" => gif_dimensions(bytes),
        "image/webp" => webp_dimensions(bytes),
        _ => None,
    }
}

/// PNG: width and height are big-endian u32s at offsets 16 and 20 in the
/// IHDR chunk, valid only if the buffer runs past byte 24.
pub fn png_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    if bytes.len() <= 24 {
        return None;
    }
    let width = u32::from_be_bytes(bytes[16..20].try_into().ok()?);
    let height = u32::from_be_bytes(bytes[20..24].try_into().ok()?);
    Some((width, height))
}

/// JPEG: walk marker segments from offset 2 until the first Start-Of-Frame
/// marker (baseline 0xC0 or progressive 0xC2), which carries height then
/// width as big-endian u16s at fixed offsets from the marker.
pub fn jpeg_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    if bytes.len() < 4 || bytes[0] != 0xFF || bytes[1] != 0xD8 {
        return None;
    }

    let mut offset = 2usize;
    while offset + 9 < bytes.len() {
        if bytes[offset] != 0xFF {
            return None;
        }
        let marker = bytes[offset + 1];
        if marker == 0xC0 || marker == 0xC2 {
            let height = u16::from_be_bytes([bytes[offset + 5], bytes[offset + 6]]);
            let width = u16::from_be_bytes([bytes[offset + 7], bytes[offset + 8]]);
            return Some((width as u32, height as u32));
        }
        let segment_len = u16::from_be_bytes([bytes[offset + 2], bytes[offset + 3]]) as usize;
        offset = offset.checked_add(2 + segment_len)?;
    }
    None
}

/// GIF: width and height are little-endian u16s at offsets 6 and 8, valid
/// only if the buffer runs past byte 10.
pub fn gif_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    if bytes.len() <= 10 {
        return None;
    }
    let width = u16::from_le_bytes([bytes[6], bytes[7]]) as u32;
    let height = u16::from_le_bytes([bytes[8], bytes[9]]) as u32;
    Some((width, height))
}

/// WebP: lossy frames carry a "VP8 " chunk with 14-bit width/height packed
/// into little-endian u16s; lossless frames carry a "VP8L" chunk with both
/// 14-bit fields packed into one little-endian u32, each stored minus one.
pub fn webp_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    if let Some(pos) = find_chunk_tag(bytes, b"VP8 ") {
        if bytes.len() > pos + 17 {
            let width = (u16::from_le_bytes([bytes[pos + 14], bytes[pos + 15]]) & 0x3FFF) as u32;
            let height = (u16::from_le_bytes([bytes[pos + 16], bytes[pos + 17]]) & 0x3FFF) as u32;
            return Some((width, height));
        }
        return None;
    }

    if let Some(pos) = find_chunk_tag(bytes, b"VP8L") {
        if bytes.len() > pos + 12 {
            let packed = u32::from_le_bytes([
                bytes[pos + 9],
                bytes[pos + 10],
                bytes[pos + 11],
                bytes[pos + 12],
            ]);
            let width = (packed & 0x3FFF) + 1;
            let height = ((packed >> 14) & 0x3FFF) + 1;
            return Some((width, height));
        }
    }
    None
}

fn find_chunk_tag(haystack: &[u8], tag: &[u8; 4]) -> Option<usize> {
    haystack.windows(4).position(|window| window == tag)
}
