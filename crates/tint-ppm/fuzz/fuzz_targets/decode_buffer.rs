#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut decoder = tint_ppm::PPMDecoder::new(data);

    if let Ok(mut image) = decoder.decode() {
        // anything that decodes must survive a round trip
        image.lighten(1);
        let encoded = image.encode();
        let again = tint_ppm::PPMDecoder::new(&encoded).decode().unwrap();
        assert_eq!(image, again);
    }
});
