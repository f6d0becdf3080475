mod local_upload_store;

pub use local_upload_store::{LocalUploadStore, candidate_filename};
