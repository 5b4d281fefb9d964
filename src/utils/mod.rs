//! Pure helper functions used across the pipeline.
//!
//! - [`timeline`] - Season label → years-since-draft normalization
//! - [`league`] - League code prefix extraction
//! - [`iso3166`] - Built-in ISO 3166-1 country code list
//! - [`year_list`] - Draft year list parsing for the CLI

pub mod iso3166;
pub mod league;
pub mod timeline;
pub mod year_list;
