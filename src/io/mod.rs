//! I/O layer: candidate discovery in the input folder and the WebP writer.
pub mod scan;
pub use scan::{iterate_candidates, output_file_name};

pub mod writers;
