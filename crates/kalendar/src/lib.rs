//! # kalendar
//!
//! Dekad (ten-day) and pentad (five-day) periods layered over Gregorian dates.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, index)"] -->|"Dekad::new() / Pentad::new()"| B["Dekad / Pentad"]
//!     B -->|".to_date()"| C["NaiveDate (first day)"]
//!     C -->|"Dekad::from_date() / Pentad::from_date()"| B
//!     B -->|"+ i64 / - i64"| B
//!     B -->|"+ TimeDelta"| C
//!     D["ISO string, ISO week, ordinal, timestamp"] -->|"date"| C
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::{NaiveDate, TimeDelta};
//! use kalendar::{Dekad, Pentad};
//!
//! let d = Dekad::new(2022, 1).unwrap();
//! assert_eq!(d + 38, Dekad::new(2023, 3).unwrap());
//! assert_eq!(d - Dekad::new(2021, 34).unwrap(), 3);
//! assert_eq!(d + TimeDelta::days(1), NaiveDate::from_ymd_opt(2022, 1, 2).unwrap());
//!
//! let p = Pentad::from_iso_format("2012-12-27").unwrap();
//! assert_eq!(p.pentad(), 73);
//! assert_eq!(p.to_string(), "2012 P73");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `dekad` | Ten-day periods, 36 per year |
//! | `pentad` | Five-day periods, 73 per year |
//! | `operand` | Tagged-union arithmetic operands and outcomes |
//! | `date` | Gregorian date conversions over `chrono` |
//! | `error` | Error types |

pub mod date;
mod dekad;
mod error;
pub mod operand;
mod pentad;
mod period;
mod template;

pub use dekad::Dekad;
pub use error::KalendarError;
pub use operand::{Operand, Outcome};
pub use pentad::Pentad;
