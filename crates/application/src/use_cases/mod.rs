pub mod handle_query;

pub use handle_query::{HandleQueryUseCase, QueryDisposition};
