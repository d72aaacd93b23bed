//! Core types for the HTS settings characteristic.

use core::fmt;
use core::str::FromStr;

use bytes::{Buf, BufMut};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseResult};

/// Exact number of bytes in the wire form of a [`SettingsRecord`].
pub const SETTINGS_RECORD_BYTES: usize = 3;

/// Wire name of the wrist orientation field (byte 0).
pub const WRIST_ORIENTATION_FIELD: &str = "wrist_orientation";

/// Wire name of the pair button orientation field (byte 1).
pub const PAIR_BUTTON_ORIENTATION_FIELD: &str = "pair_button_orientation";

/// Wire name of the intensity level field (byte 2).
pub const INTENSITY_LEVEL_FIELD: &str = "intensity_level";

/// Which wrist the device is worn on.
///
/// # Examples
///
/// ```
/// use hts_types::WristOrientation;
///
/// assert_eq!(WristOrientation::try_from(1), Ok(WristOrientation::Right));
/// assert_eq!("Left".parse::<WristOrientation>(), Ok(WristOrientation::Left));
/// assert!(WristOrientation::try_from(2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum WristOrientation {
    /// Worn on the left wrist.
    #[default]
    Left = 0,
    /// Worn on the right wrist.
    Right = 1,
}

impl WristOrientation {
    /// All variants in wire order.
    pub const ALL: [WristOrientation; 2] = [WristOrientation::Left, WristOrientation::Right];

    /// Lowercase name used in text output and configuration.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            WristOrientation::Left => "left",
            WristOrientation::Right => "right",
        }
    }
}

impl TryFrom<u8> for WristOrientation {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(WristOrientation::Left),
            1 => Ok(WristOrientation::Right),
            _ => Err(ParseError::InvalidField {
                field: WRIST_ORIENTATION_FIELD,
                value,
            }),
        }
    }
}

impl From<WristOrientation> for u8 {
    fn from(value: WristOrientation) -> Self {
        value as u8
    }
}

impl FromStr for WristOrientation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, WRIST_ORIENTATION_FIELD, &Self::ALL, Self::as_str)
    }
}

impl fmt::Display for WristOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side of the physical pair button, as seen by the wearer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum PairButtonOrientation {
    /// Pair button on the left.
    #[default]
    Left = 0,
    /// Pair button on the right.
    Right = 1,
}

impl PairButtonOrientation {
    /// All variants in wire order.
    pub const ALL: [PairButtonOrientation; 2] =
        [PairButtonOrientation::Left, PairButtonOrientation::Right];

    /// Lowercase name used in text output and configuration.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PairButtonOrientation::Left => "left",
            PairButtonOrientation::Right => "right",
        }
    }
}

impl TryFrom<u8> for PairButtonOrientation {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PairButtonOrientation::Left),
            1 => Ok(PairButtonOrientation::Right),
            _ => Err(ParseError::InvalidField {
                field: PAIR_BUTTON_ORIENTATION_FIELD,
                value,
            }),
        }
    }
}

impl From<PairButtonOrientation> for u8 {
    fn from(value: PairButtonOrientation) -> Self {
        value as u8
    }
}

impl FromStr for PairButtonOrientation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, PAIR_BUTTON_ORIENTATION_FIELD, &Self::ALL, Self::as_str)
    }
}

impl fmt::Display for PairButtonOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intensity setting for haptic effects.
///
/// Levels are ordered, so `IntensityLevel::High > IntensityLevel::Low`.
///
/// ```
/// use hts_types::IntensityLevel;
///
/// assert!(IntensityLevel::High > IntensityLevel::Medium);
/// assert_eq!("2".parse::<IntensityLevel>(), Ok(IntensityLevel::High));
/// assert_eq!(format!("{}", IntensityLevel::Medium), "medium");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum IntensityLevel {
    /// Low intensity.
    #[default]
    Low = 0,
    /// Medium intensity.
    Medium = 1,
    /// High intensity.
    High = 2,
}

impl IntensityLevel {
    /// All variants in wire order.
    pub const ALL: [IntensityLevel; 3] = [
        IntensityLevel::Low,
        IntensityLevel::Medium,
        IntensityLevel::High,
    ];

    /// Lowercase name used in text output and configuration.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            IntensityLevel::Low => "low",
            IntensityLevel::Medium => "medium",
            IntensityLevel::High => "high",
        }
    }
}

impl TryFrom<u8> for IntensityLevel {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(IntensityLevel::Low),
            1 => Ok(IntensityLevel::Medium),
            2 => Ok(IntensityLevel::High),
            _ => Err(ParseError::InvalidField {
                field: INTENSITY_LEVEL_FIELD,
                value,
            }),
        }
    }
}

impl From<IntensityLevel> for u8 {
    fn from(value: IntensityLevel) -> Self {
        value as u8
    }
}

impl FromStr for IntensityLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, INTENSITY_LEVEL_FIELD, &Self::ALL, Self::as_str)
    }
}

impl fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Match `s` against the variant names (case-insensitive) or their wire values.
fn parse_variant<T>(
    s: &str,
    field: &'static str,
    variants: &[T],
    name: fn(&T) -> &'static str,
) -> ParseResult<T>
where
    T: Copy + Into<u8>,
{
    let input = s.trim();
    variants
        .iter()
        .copied()
        .find(|v| name(v).eq_ignore_ascii_case(input) || input.parse::<u8>() == Ok((*v).into()))
        .ok_or_else(|| ParseError::InvalidName {
            field,
            name: s.to_string(),
        })
}

/// User preferences stored in the HTS Settings characteristic.
///
/// Each field holds the raw wire byte. Decoding never rejects a byte value,
/// so a record read from a peripheral with an out-of-range field is kept
/// intact; use [`validate`](Self::validate) or the typed accessors to check
/// membership of the documented enumerations.
///
/// # Wire format
///
/// | Offset | Field | Values |
/// |--------|-------|--------|
/// | 0 | `wrist_orientation` | 0 = left, 1 = right |
/// | 1 | `pair_button_orientation` | 0 = left, 1 = right |
/// | 2 | `intensity_level` | 0 = low, 1 = medium, 2 = high |
///
/// # Examples
///
/// ```
/// use hts_types::{IntensityLevel, PairButtonOrientation, SettingsRecord, WristOrientation};
///
/// let record = SettingsRecord::new(
///     WristOrientation::Left,
///     PairButtonOrientation::Right,
///     IntensityLevel::High,
/// );
/// assert_eq!(record.to_bytes(), [0, 1, 2]);
/// assert_eq!(SettingsRecord::from_bytes(&[0, 1, 2]), Ok(record));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SettingsRecord {
    /// Orientation respective to the user's wrist.
    pub wrist_orientation: u8,
    /// Orientation respective to the pair button.
    pub pair_button_orientation: u8,
    /// Intensity setting for haptic effects.
    pub intensity_level: u8,
}

impl SettingsRecord {
    /// Build a record from typed preference selections.
    ///
    /// Records built this way always pass [`validate`](Self::validate).
    #[must_use]
    pub const fn new(
        wrist: WristOrientation,
        pair_button: PairButtonOrientation,
        intensity: IntensityLevel,
    ) -> Self {
        Self {
            wrist_orientation: wrist as u8,
            pair_button_orientation: pair_button as u8,
            intensity_level: intensity as u8,
        }
    }

    /// Decode a record from its wire form.
    ///
    /// Bytes are copied verbatim: byte 0 to `wrist_orientation`, byte 1 to
    /// `pair_button_orientation`, byte 2 to `intensity_level`. No enumeration
    /// check is made.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::LengthMismatch`] unless `data` is exactly
    /// [`SETTINGS_RECORD_BYTES`] (3) bytes long.
    #[must_use = "parsing returns a Result that should be handled"]
    pub fn from_bytes(data: &[u8]) -> ParseResult<Self> {
        if data.len() != SETTINGS_RECORD_BYTES {
            return Err(ParseError::LengthMismatch {
                expected: SETTINGS_RECORD_BYTES,
                actual: data.len(),
            });
        }

        let mut buf = data;
        Ok(SettingsRecord {
            wrist_orientation: buf.get_u8(),
            pair_button_orientation: buf.get_u8(),
            intensity_level: buf.get_u8(),
        })
    }

    /// Decode a record and reject fields outside their enumerations.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::LengthMismatch`] for a wrong-sized buffer, or
    /// [`ParseError::InvalidField`] for the first out-of-range field.
    #[must_use = "parsing returns a Result that should be handled"]
    pub fn from_bytes_strict(data: &[u8]) -> ParseResult<Self> {
        let record = Self::from_bytes(data)?;
        record.validate()?;
        Ok(record)
    }

    /// Encode the record into its 3-byte wire form.
    ///
    /// Field bytes are copied as stored, without validation.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; SETTINGS_RECORD_BYTES] {
        [
            self.wrist_orientation,
            self.pair_button_orientation,
            self.intensity_level,
        ]
    }

    /// Validate the record, then encode it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidField`] for the first out-of-range field.
    pub fn to_bytes_checked(&self) -> ParseResult<[u8; SETTINGS_RECORD_BYTES]> {
        self.validate()?;
        Ok(self.to_bytes())
    }

    /// Append the wire form to `buf`.
    pub fn encode_into<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(self.wrist_orientation);
        buf.put_u8(self.pair_button_orientation);
        buf.put_u8(self.intensity_level);
    }

    /// Check every field against its enumeration, in wire order.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidField`] naming the first bad field.
    pub fn validate(&self) -> ParseResult<()> {
        self.wrist()?;
        self.pair_button()?;
        self.intensity()?;
        Ok(())
    }

    /// Whether every field is inside its enumeration.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Typed wrist orientation.
    pub fn wrist(&self) -> ParseResult<WristOrientation> {
        WristOrientation::try_from(self.wrist_orientation)
    }

    /// Typed pair button orientation.
    pub fn pair_button(&self) -> ParseResult<PairButtonOrientation> {
        PairButtonOrientation::try_from(self.pair_button_orientation)
    }

    /// Typed intensity level.
    pub fn intensity(&self) -> ParseResult<IntensityLevel> {
        IntensityLevel::try_from(self.intensity_level)
    }
}

impl TryFrom<&[u8]> for SettingsRecord {
    type Error = ParseError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(data)
    }
}

impl From<[u8; SETTINGS_RECORD_BYTES]> for SettingsRecord {
    fn from(bytes: [u8; SETTINGS_RECORD_BYTES]) -> Self {
        let [wrist_orientation, pair_button_orientation, intensity_level] = bytes;
        Self {
            wrist_orientation,
            pair_button_orientation,
            intensity_level,
        }
    }
}

impl From<SettingsRecord> for [u8; SETTINGS_RECORD_BYTES] {
    fn from(record: SettingsRecord) -> Self {
        record.to_bytes()
    }
}

/// Renders as `wrist=left pair_button=right intensity=high`; out-of-range
/// bytes show as `unknown (N)`.
impl fmt::Display for SettingsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "wrist={} pair_button={} intensity={}",
            FieldLabel(self.wrist().map(|v| v.as_str()), self.wrist_orientation),
            FieldLabel(
                self.pair_button().map(|v| v.as_str()),
                self.pair_button_orientation
            ),
            FieldLabel(self.intensity().map(|v| v.as_str()), self.intensity_level),
        )
    }
}

struct FieldLabel(ParseResult<&'static str>, u8);

impl fmt::Display for FieldLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Ok(name) => f.write_str(name),
            Err(_) => write!(f, "unknown ({})", self.1),
        }
    }
}
