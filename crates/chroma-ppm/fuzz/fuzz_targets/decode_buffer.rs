#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use chroma_ppm::chroma_core::options::DecoderOptions;

    let _ = chroma_ppm::PPMDecoder::new(data).decode();

    let options = DecoderOptions::new_strict();
    let _ = chroma_ppm::PPMDecoder::new_with_options(options, data).decode();
});
