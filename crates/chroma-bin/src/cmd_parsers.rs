use chroma_core::options::DecoderOptions;

use crate::cmd_parsers::global_options::CmdOptions;

pub mod global_options;

pub fn get_decoder_options(options: &CmdOptions) -> DecoderOptions {
    DecoderOptions::default()
        .set_max_height(options.max_height)
        .set_max_width(options.max_width)
        .set_strict_mode(options.strict_mode)
}
