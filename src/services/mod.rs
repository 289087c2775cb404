pub mod entry_fetcher;
pub mod extractor;
pub mod llm_service;
pub mod race_predictor;
pub mod result_formatter;

pub use entry_fetcher::EntryFetcher;
pub use extractor::{EntryExtractor, RaceListExtractor};
pub use llm_service::LlmService;
pub use race_predictor::RacePredictor;
pub use result_formatter::ResultFormatter;
