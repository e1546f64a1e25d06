//! Naming grammar for selector keys and values.
//!
//! A key is `[prefix/]name`. The optional prefix is a dot-separated,
//! DNS-subdomain-like sequence of segments; the name and every value follow
//! the same boundary rule: the first and last codepoints must be a letter or
//! digit, with a small set of symbols allowed in between. Letters are any
//! Unicode letter category and digits are decimal digits (`Nd`); other
//! numerics and combining marks are rejected. All lengths count codepoints.

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::errors::{NameError, SelectorError, invalid_selector, name_error};

/// Maximum length, in codepoints, of a key's name segment.
pub const MAX_KEY_NAME_LEN: usize = 63;

/// Maximum length, in codepoints, of a non-empty value.
pub const MAX_VALUE_LEN: usize = 63;

/// Maximum length, in codepoints, of a key's DNS-style prefix.
pub const MAX_DNS_PREFIX_LEN: usize = 253;

const KEY_NAME_SYMBOLS: &[char] = &['-', '_', '.', '\\'];
const VALUE_SYMBOLS: &[char] = &['-', '_', '.'];
const PREFIX_SEGMENT_SYMBOLS: &[char] = &['-', '_'];

#[derive(Debug, Clone, Copy)]
enum NameState {
    /// Only a letter or digit is accepted.
    Boundary,
    /// Letters, digits and the permitted symbols are accepted.
    Interior,
}

/// Check a key against the naming grammar.
///
/// # Errors
/// Returns [`SelectorError::InvalidSelector`] when the key holds more than
/// one `/`, positioned at the byte offset of the second `/` like every other
/// syntax error, and [`SelectorError::NameValidation`] when the prefix or
/// name is empty, too long, or contains a character out of place.
///
/// # Examples
/// ```
/// use label_selector::check_key;
///
/// assert!(check_key("bar.io/foo").is_ok());
/// assert!(check_key("bar/foo/baz").is_err());
/// assert!(check_key("_foo").is_err());
/// ```
pub fn check_key(key: &str) -> Result<(), SelectorError> {
    let mut parts = key.split('/');
    let (prefix, name) = match (parts.next(), parts.next(), parts.next()) {
        (Some(name), None, _) => (None, name),
        (Some(prefix), Some(name), None) => (Some(prefix), name),
        _ => {
            let position = key.match_indices('/').nth(1).map_or(0, |(index, _)| index);
            return Err(invalid_selector("key contains more than one '/'", position));
        }
    };

    let name_offset = prefix
        .map_or(Ok(0), |prefix| {
            check_prefix(prefix).map(|()| prefix.chars().count() + 1)
        })
        .map_err(|reason| name_error(key, reason))?;
    check_key_name(name, name_offset).map_err(|reason| name_error(key, reason))
}

/// Check a value against the naming grammar.
///
/// The empty value is always accepted.
///
/// # Errors
/// Returns [`SelectorError::NameValidation`] when the value is too long or
/// contains a character out of place.
///
/// # Examples
/// ```
/// use label_selector::check_value;
///
/// assert!(check_value("").is_ok());
/// assert!(check_value("bar_baz").is_ok());
/// assert!(check_value("bar_baz_").is_err());
/// ```
pub fn check_value(value: &str) -> Result<(), SelectorError> {
    let length = value.chars().count();
    if length == 0 {
        return Ok(());
    }
    if length > MAX_VALUE_LEN {
        return Err(name_error(
            value,
            NameError::TooLong {
                length,
                max: MAX_VALUE_LEN,
            },
        ));
    }
    check_name(value, VALUE_SYMBOLS, 0).map_err(|reason| name_error(value, reason))
}

fn check_prefix(prefix: &str) -> Result<(), NameError> {
    let length = prefix.chars().count();
    if length == 0 {
        return Err(NameError::EmptyPrefix);
    }
    if length > MAX_DNS_PREFIX_LEN {
        return Err(NameError::PrefixTooLong {
            length,
            max: MAX_DNS_PREFIX_LEN,
        });
    }

    let mut offset = 0;
    for segment in prefix.split('.') {
        let segment_len = segment.chars().count();
        if segment_len == 0 {
            // A trailing dot has no codepoint after it; blame the dot itself.
            let position = if offset < length {
                offset
            } else {
                offset.saturating_sub(1)
            };
            return Err(NameError::InvalidCharacter {
                character: '.',
                position,
            });
        }
        check_name(segment, PREFIX_SEGMENT_SYMBOLS, offset)?;
        offset += segment_len + 1;
    }
    Ok(())
}

fn check_key_name(name: &str, offset: usize) -> Result<(), NameError> {
    let length = name.chars().count();
    if length == 0 {
        return Err(NameError::Empty);
    }
    if length > MAX_KEY_NAME_LEN {
        return Err(NameError::TooLong {
            length,
            max: MAX_KEY_NAME_LEN,
        });
    }
    check_name(name, KEY_NAME_SYMBOLS, offset)
}

/// Run the boundary/interior machine over `name`.
///
/// The machine drops back to [`NameState::Boundary`] when two codepoints
/// remain, so the last codepoint is held to the boundary rule. `offset` is
/// added to reported positions.
fn check_name(name: &str, symbols: &[char], offset: usize) -> Result<(), NameError> {
    let last = name.chars().count().saturating_sub(1);
    let mut state = NameState::Boundary;
    for (index, character) in name.chars().enumerate() {
        let permitted = match state {
            NameState::Boundary => is_letter_or_digit(character),
            NameState::Interior => is_letter_or_digit(character) || symbols.contains(&character),
        };
        if !permitted {
            return Err(NameError::InvalidCharacter {
                character,
                position: offset + index,
            });
        }
        state = if index + 1 >= last {
            NameState::Boundary
        } else {
            NameState::Interior
        };
    }
    Ok(())
}

fn is_letter_or_digit(ch: char) -> bool {
    ch.general_category_group() == GeneralCategoryGroup::Letter
        || ch.general_category() == GeneralCategory::DecimalNumber
}
