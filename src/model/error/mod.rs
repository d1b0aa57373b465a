pub mod startup_errors;
pub mod upload_errors;
