/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use tint_ppm::{DecodeStage, PPMDecodeErrors, PPMDecoder};

fn decode_text(text: &str) -> Result<tint_ppm::Image, PPMDecodeErrors> {
    tint_ppm::decode(text.lines())
}

#[test]
fn test_decode_single_pixel() {
    let image = decode_text("P3\n1 1\n255\n10 20 30").unwrap();

    assert_eq!(image.dimensions(), (1, 1));
    assert_eq!(image.max_range(), 255);
    assert_eq!(image.pixel(0, 0), Some([10, 20, 30]));
}

#[test]
fn test_lighten_clamps_to_white() {
    let mut image = decode_text("P3\n1 1\n255\n10 20 30").unwrap();
    image.lighten(250);

    assert_eq!(image.pixel(0, 0), Some([255, 255, 255]));
}

#[test]
fn test_darken_clamps_to_black() {
    let mut image = decode_text("P3\n1 1\n255\n10 20 30").unwrap();
    image.darken(50);

    assert_eq!(image.pixel(0, 0), Some([0, 0, 0]));
}

#[test]
fn test_wrong_magic() {
    let err = decode_text("P4\n1 1\n255\n10 20 30").unwrap_err();
    assert!(matches!(err, PPMDecodeErrors::InvalidMagic(_, ref found) if found == "P4"));

    // binary variant is not accepted either
    let err = PPMDecoder::new(b"P6\n1 1\n255\n\x00\x01\x02").decode().unwrap_err();
    assert!(matches!(err, PPMDecodeErrors::InvalidMagic(..)));
}

#[test]
fn test_too_few_pixel_values() {
    let err = decode_text("P3\n2 2\n255\n1 2 3").unwrap_err();

    assert!(matches!(
        err,
        PPMDecodeErrors::TruncatedOrOversizedPixelData(12, 3)
    ));
    assert!(err.is_truncated());
}

#[test]
fn test_leading_comment_is_ignored() {
    let plain = decode_text("P3\n1 1\n255\n10 20 30").unwrap();
    let commented = decode_text("# this is ignored\nP3\n1 1\n255\n10 20 30").unwrap();

    assert_eq!(plain, commented);
}

#[test]
fn test_empty_input() {
    let err = decode_text("").unwrap_err();
    assert!(matches!(
        err,
        PPMDecodeErrors::UnexpectedEndOfInput(DecodeStage::ExpectMagic)
    ));
}

#[test]
fn test_lighten_then_darken_is_not_an_inverse() {
    let mut image = decode_text("P3\n2 1\n255\n0 100 200 250 255 30").unwrap();

    image.lighten(60);
    image.darken(60);

    // min(v + 60, 255) - 60, floored at zero
    assert_eq!(image.pixels(), &[0, 100, 195, 195, 195, 30]);
}

#[test]
fn test_zero_amounts_are_no_ops() {
    let original = decode_text("P3\n2 1\n7\n0 1 2 5 6 7").unwrap();
    let mut image = original.clone();

    image.lighten(0);
    image.darken(0);

    assert_eq!(image, original);
}

#[test]
fn test_error_reports_position() {
    let err = decode_text("P3\n# size\n1 1\n255\n1 2\n3 x").unwrap_err();

    let position = err.position().unwrap();
    assert_eq!((position.line, position.token), (6, 2));
}
