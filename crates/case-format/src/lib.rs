pub mod case;
pub mod errors;
pub mod load;
pub mod metadata;
pub mod save;

pub use case::{Case, CaseFile, PartRecord, CASE_FORMAT};
pub use errors::{LoadError, SaveError};
pub use load::{load_case, load_case_file};
pub use metadata::ResultMetadata;
pub use save::{save_case, save_result, write_result_file, FORMAT_VERSION, RESULT_FORMAT};
