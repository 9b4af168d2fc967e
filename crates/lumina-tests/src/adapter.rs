//! Integration tests for the pixel buffer adapter.
//!
//! Exercises decode/encode between lumina-core buffers and
//! lumina-media resources.

use lumina_core::{LuminaError, RasterBuffer};
use lumina_media::{
    decode, encode_png, sniff_format, validate_mime, ImageFormat, ImageResource, MediaKind,
};
use proptest::prelude::*;

// ── Helpers ────────────────────────────────────────────────────

fn arb_buffer() -> impl Strategy<Value = RasterBuffer> {
    (1u32..12, 1u32..12).prop_flat_map(|(w, h)| {
        proptest::collection::vec(any::<u8>(), (w * h * 4) as usize)
            .prop_map(move |data| RasterBuffer::from_rgba(w, h, data).unwrap())
    })
}

// ── Round trips ────────────────────────────────────────────────

proptest! {
    #[test]
    fn decode_encode_round_trip_is_exact(buf in arb_buffer()) {
        let png = encode_png(&buf).unwrap();
        prop_assert_eq!(decode(&png).unwrap(), buf);
    }
}

#[test]
fn transparent_pixels_keep_their_color() {
    let buf = RasterBuffer::filled(3, 3, [12, 34, 56, 0]).unwrap();
    let resource = ImageResource::encode(&buf).unwrap();
    assert_eq!(resource.decode().unwrap().pixel(1, 1), [12, 34, 56, 0]);
}

#[test]
fn encoded_resource_is_independent_of_buffer() {
    let mut buf = RasterBuffer::filled(2, 2, [1, 2, 3, 4]).unwrap();
    let resource = ImageResource::encode(&buf).unwrap();
    buf.set_pixel(0, 0, [9, 9, 9, 9]);
    assert_eq!(resource.decode().unwrap().pixel(0, 0), [1, 2, 3, 4]);
}

#[test]
fn encoded_resource_is_png() {
    let resource = ImageResource::encode(&RasterBuffer::new(1, 1).unwrap()).unwrap();
    assert_eq!(resource.mime(), "image/png");
    assert_eq!(sniff_format(resource.bytes()).unwrap(), ImageFormat::Png);
    assert!(validate_mime(resource.mime(), MediaKind::Image).is_ok());
}

// ── Failures ───────────────────────────────────────────────────

#[test]
fn truncated_png_is_decode_error() {
    let png = encode_png(&RasterBuffer::test_pattern(16, 16).unwrap()).unwrap();
    let err = decode(&png[..png.len() / 2]).unwrap_err();
    assert!(matches!(err, LuminaError::Decode(_)));
}
