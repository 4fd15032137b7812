pub mod blur_background_use_case;
pub mod infrastructure;
