/// Data layer: record types, row parsing, and selection resolution.
///
/// Architecture:
/// ```text
///  "<country>, <rate>" raw rows (embedded constant)
///        │
///        ▼
///   ┌──────────┐
///   │  parser   │  split fields, assign dense indices
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ BirthRateDataset│  ordered Vec<CountryRecord>
///   └────────────────┘
///        │  x = index, y = rate          ▲
///        ▼                               │ record
///   ┌──────────┐   entry index    ┌───────────┐
///   │  chart    │ ───────────────► │ selection  │
///   └──────────┘                  └───────────┘
/// ```

pub mod error;
pub mod model;
pub mod parser;
pub mod selection;
