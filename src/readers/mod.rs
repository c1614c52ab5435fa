pub mod dataset_reader;
pub mod pollutant_reader;

pub use dataset_reader::DatasetReader;
pub use pollutant_reader::PollutantReader;
