//! catalogzero - Service catalog spreadsheet to service-definition JSON converter
//!
//! This crate reads a service-catalog spreadsheet (one row per package, grouped by
//! category) and produces one service-definition JSON document per category.
//! Continuation rows attach extra configuration groups to the package above them,
//! and the free-text configuration cell is parsed into option items with price deltas.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::fs::File;
//! use catalogzero::ConverterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a converter with default settings
//!     let converter = ConverterBuilder::new().build()?;
//!
//!     // Convert the first sheet of the workbook
//!     let catalog = converter.convert(File::open("catalog.xlsx")?)?;
//!
//!     for document in catalog.documents() {
//!         println!("{}: {} packages", document.id, document.packages.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Writing One File per Category
//!
//! ```rust,no_run
//! use std::fs::File;
//! use catalogzero::{BatchWriter, ConverterBuilder, DocumentFormat, SheetSelector};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let converter = ConverterBuilder::new()
//!         .with_sheet_selector(SheetSelector::Name("Mint".to_string()))
//!         .with_document_format(DocumentFormat::Simplified)  // bare Thai strings
//!         .with_header_row(1)  // banner row above the header
//!         .build()?;
//!
//!     let catalog = converter.convert(File::open("catalog.xlsx")?)?;
//!
//!     // Writes <slug>.json per category plus index.json
//!     BatchWriter::new("output").write(&catalog)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Converting an In-Memory Table
//!
//! ```rust
//! use catalogzero::{CellValue, ConverterBuilder, Table};
//!
//! # fn main() -> Result<(), catalogzero::CatalogError> {
//! let table = Table::new(
//!     vec![
//!         "Category slug".to_string(),
//!         "Category".to_string(),
//!         "Package Name".to_string(),
//!         "Package Id".to_string(),
//!         "Starting price".to_string(),
//!     ],
//!     vec![vec![
//!         "cleaning".into(),
//!         "Cleaning".into(),
//!         "Basic Clean".into(),
//!         "cleaning-001".into(),
//!         CellValue::Number(500.0),
//!     ]],
//! );
//!
//! let catalog = ConverterBuilder::new().build()?.convert_table(&table)?;
//! assert_eq!(catalog.get("cleaning").unwrap().packages[0].base_price, 500);
//! # Ok(())
//! # }
//! ```

mod api;
mod assembler;
mod builder;
mod catalog;
mod config_text;
mod error;
mod formatter;
mod model;
mod output;
mod package;
mod parser;
mod partition;
mod security;
mod text;
mod types;

// 公開API
pub use api::{DocumentFormat, SheetSelector};
pub use assembler::{assemble_document, placeholder_key};
pub use builder::{Converter, ConverterBuilder};
pub use catalog::{Catalog, CatalogEntry, CatalogSummary};
pub use config_text::parse_configuration_text;
pub use error::CatalogError;
pub use model::{
    Banner, BannerButton, CashbackSection, Components, ConfigurationData, ConfigurationGroup,
    ConfigurationItem, ConfigurationType, ConfigurationValidation, DateTimeBox, InfoBadge,
    LocationBox, LocationText, LocationTexts, OutputDocument, Package, PackageImage, PackageNote,
    Quantity, QuantityValidation, SummaryLocationBox,
};
pub use output::{
    document_to_string, render_catalog, render_document, render_summary, BatchReport,
    BatchWriter, INDEX_FILE_NAME,
};
pub use package::PackageDraft;
pub use partition::{partition_table, CategoryGroup};
pub use text::{InlineKind, InlineText, LocalizedValues, ReferenceKind, Text, TextReference};
pub use types::{columns, CellValue, Row, Table};
