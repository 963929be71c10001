pub mod audio;
pub mod google;
pub mod recognizer;
