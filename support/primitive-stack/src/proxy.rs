//! Versioned external form of a stack.
//!
//! The proxy is the only thing that ever leaves the process: a version tag
//! plus the elements in pop order. It does not depend on how
//! [`ImmutableArrayStack`] stores its elements.
//!
//! # Binary Layout
//!
//! All integers are big-endian.
//!
//! ```text
//! +----------------+-------------+-------------------------------+
//! | version: i64   | count: i32  | count x T, top element first  |
//! +----------------+-------------+-------------------------------+
//!
//! new_stack_with(&[1, 2, 3]) over i32:
//!   00000000 00000001  00000003  00000003 00000002 00000001
//! ```

use alloc::vec::Vec;

use crate::error::FormatError;
use crate::primitive::StackPrimitive;
use crate::stack::ImmutableArrayStack;

/// The only version this crate reads or writes.
pub const SERIAL_VERSION: i64 = 1;

/// Size of the `version` + `count` header.
pub const HEADER_LEN: usize = 8 + 4;

/// Transient envelope used to encode and decode a stack.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackSerializationProxy<T> {
    version: i64,
    /// Top-first.
    elements: Vec<T>,
}

impl<T: StackPrimitive> StackSerializationProxy<T> {
    pub fn encode(stack: &ImmutableArrayStack<T>) -> Self {
        Self {
            version: SERIAL_VERSION,
            elements: stack.to_vec(),
        }
    }

    /// Rebuilds a stack with the same pop order as the encoded one.
    pub fn decode(self) -> Result<ImmutableArrayStack<T>, FormatError> {
        check_version(self.version)?;
        Ok(ImmutableArrayStack::new_stack_from_top_to_bottom(
            &self.elements,
        ))
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    /// Elements in pop order.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    // ========================================================================
    // Binary codec
    // ========================================================================

    pub fn to_bytes(&self) -> Result<Vec<u8>, FormatError> {
        let len = self.elements.len();
        let count = i32::try_from(len).map_err(|_| FormatError::TooManyElements(len))?;

        let mut out = Vec::with_capacity(HEADER_LEN.saturating_add(len.saturating_mul(T::WIDTH)));
        out.extend_from_slice(&self.version.to_be_bytes());
        out.extend_from_slice(&count.to_be_bytes());
        for element in &self.elements {
            element.write_be(&mut out);
        }
        Ok(out)
    }

    /// Parses the binary layout. The whole of `bytes` must be consumed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FormatError> {
        Self::parse(bytes).inspect_err(|error| {
            tracing::debug!(%error, len = bytes.len(), "rejected serialized stack");
        })
    }

    fn parse(bytes: &[u8]) -> Result<Self, FormatError> {
        let short = FormatError::ShortHeader {
            expected: HEADER_LEN,
            actual: bytes.len(),
        };
        let (version, rest) = bytes.split_first_chunk::<8>().ok_or(short)?;
        let (count, payload) = rest.split_first_chunk::<4>().ok_or(short)?;

        let version = i64::from_be_bytes(*version);
        check_version(version)?;

        let count = i32::from_be_bytes(*count);
        let count = usize::try_from(count).map_err(|_| FormatError::NegativeCount(count))?;

        let expected = count.saturating_mul(T::WIDTH);
        let truncated = FormatError::Truncated {
            expected,
            actual: payload.len(),
        };
        if payload.len() < expected {
            return Err(truncated);
        }
        if payload.len() > expected {
            return Err(FormatError::TrailingBytes(payload.len() - expected));
        }

        let elements = payload
            .chunks_exact(T::WIDTH)
            .map(T::read_be)
            .collect::<Option<Vec<T>>>()
            .ok_or(truncated)?;
        Ok(Self { version, elements })
    }
}

fn check_version(version: i64) -> Result<(), FormatError> {
    if version != SERIAL_VERSION {
        return Err(FormatError::UnsupportedVersion(version));
    }
    Ok(())
}

// ============================================================================
// serde
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::StackSerializationProxy;
    use crate::primitive::StackPrimitive;
    use crate::stack::ImmutableArrayStack;

    /// Serializes as the proxy, never as the internal buffer.
    impl<T: StackPrimitive + Serialize> Serialize for ImmutableArrayStack<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            StackSerializationProxy::encode(self).serialize(serializer)
        }
    }

    impl<'de, T: StackPrimitive + Deserialize<'de>> Deserialize<'de> for ImmutableArrayStack<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            StackSerializationProxy::<T>::deserialize(deserializer)?
                .decode()
                .map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn one_two_three() -> ImmutableArrayStack<i32> {
        ImmutableArrayStack::new_stack_with(&[1, 2, 3])
    }

    #[test]
    fn test_encode_is_top_first() {
        let proxy = StackSerializationProxy::encode(&one_two_three());
        assert_eq!(proxy.version(), 1);
        assert_eq!(proxy.elements(), &[3, 2, 1]);
    }

    #[test]
    fn test_bytes_match_reference_block() {
        let bytes = one_two_three().to_bytes().unwrap();
        assert_eq!(
            bytes,
            [
                0, 0, 0, 0, 0, 0, 0, 1, // version
                0, 0, 0, 3, // count
                0, 0, 0, 3, 0, 0, 0, 2, 0, 0, 0, 1, // 3, 2, 1
            ]
        );
    }

    #[test]
    fn test_decode_restores_pop_order() {
        let stack = one_two_three();
        let decoded = ImmutableArrayStack::<i32>::from_bytes(&stack.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded, stack);
        assert_eq!(decoded.to_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn test_rejects_malformed_input() {
        let good = one_two_three().to_bytes().unwrap();

        assert_eq!(
            StackSerializationProxy::<i32>::from_bytes(&good[..11]),
            Err(FormatError::ShortHeader {
                expected: 12,
                actual: 11
            })
        );

        let mut wrong_version = good.clone();
        wrong_version[7] = 2;
        assert_eq!(
            StackSerializationProxy::<i32>::from_bytes(&wrong_version),
            Err(FormatError::UnsupportedVersion(2))
        );

        let mut negative = good.clone();
        negative[8..12].copy_from_slice(&(-1_i32).to_be_bytes());
        assert_eq!(
            StackSerializationProxy::<i32>::from_bytes(&negative),
            Err(FormatError::NegativeCount(-1))
        );

        assert_eq!(
            StackSerializationProxy::<i32>::from_bytes(&good[..good.len() - 1]),
            Err(FormatError::Truncated {
                expected: 12,
                actual: 11
            })
        );

        let mut trailing = good;
        trailing.push(0);
        assert_eq!(
            StackSerializationProxy::<i32>::from_bytes(&trailing),
            Err(FormatError::TrailingBytes(1))
        );
    }

    #[test]
    fn test_decode_checks_version() {
        let proxy = StackSerializationProxy::<i64> {
            version: 7,
            elements: vec![1],
        };
        assert_eq!(proxy.decode(), Err(FormatError::UnsupportedVersion(7)));
    }

    #[test]
    fn test_payload_width_follows_element_type() {
        let bytes = ImmutableArrayStack::<i8>::new_stack_with(&[-1, 2]).to_bytes().unwrap();
        assert_eq!(&bytes[8..], &[0, 0, 0, 2, 2, 0xff]);

        let bytes = ImmutableArrayStack::<f64>::new_stack_with(&[1.5]).to_bytes().unwrap();
        assert_eq!(bytes.len(), HEADER_LEN + 8);
        assert_eq!(&bytes[12..], &1.5_f64.to_be_bytes());
    }
}
