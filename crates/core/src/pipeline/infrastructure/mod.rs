pub mod threaded_frame_source;
