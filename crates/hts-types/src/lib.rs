//! Wire types for the Haptic Timeline Service (HTS) settings characteristic.
//!
//! The HTS Settings characteristic carries the wearer's preferences as a
//! fixed 3-byte record. This crate defines that record, the typed values of
//! each field, and the codec between the two forms. It has no BLE stack
//! dependency: whatever moves bytes to and from the peripheral hands them to
//! [`SettingsRecord::from_bytes`] and writes [`SettingsRecord::to_bytes`].
//!
//! # Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` for every type
//!
//! # Example
//!
//! ```
//! use hts_types::{IntensityLevel, SettingsRecord};
//!
//! let record = SettingsRecord::from_bytes(&[1, 0, 2]).unwrap();
//! assert_eq!(record.intensity(), Ok(IntensityLevel::High));
//! assert_eq!(record.to_bytes(), [1, 0, 2]);
//! ```

pub mod error;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use types::{
    INTENSITY_LEVEL_FIELD, IntensityLevel, PAIR_BUTTON_ORIENTATION_FIELD, PairButtonOrientation,
    SETTINGS_RECORD_BYTES, SettingsRecord, WRIST_ORIENTATION_FIELD, WristOrientation,
};
