pub mod audio_decoder;
pub mod digest;
pub mod image_resolver;
