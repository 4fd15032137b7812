pub mod image_file_sink;
pub mod image_file_source;
