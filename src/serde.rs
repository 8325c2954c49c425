// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`GrowVec`](crate::GrowVec).
//!
//! - **Serialize**: as a sequence of elements (length `len`).
//! - **Deserialize**: from any sequence, growing as needed. The size hint, if
//!   any, is used to pre-reserve capacity; length never causes an error.
//!
//! ### Trait bounds
//!
//! - `GrowVec<T>: Serialize` whenever `T: Serialize`.
//! - `GrowVec<T>: Deserialize<'de>` whenever `T: Deserialize<'de> + Default`
//!   (`Default` is what allows the safe buffer to be allocated and grown).

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::fmt;

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl<T: Serialize> Serialize for GrowVec<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T>(core::marker::PhantomData<T>);

impl<'de, T> de::Visitor<'de> for VecVisitor<T>
where
    T: Deserialize<'de> + Default,
{
    type Value = GrowVec<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of elements")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = GrowVec::<T>::new();
        if let Some(hint) = a.size_hint() {
            out.reserve(hint);
        }
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem);
        }
        Ok(out)
    }
}

impl<'de, T> Deserialize<'de> for GrowVec<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T>(core::marker::PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::GrowVec;

    #[test]
    fn test_serde_roundtrip_json() {
        let v: GrowVec<i32> = GrowVec::from(&[1, 2, 3][..]);
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1,2,3]");
        let back: GrowVec<i32> = serde_json::from_str(&s).unwrap();
        assert_eq!(back.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let v: GrowVec<i32> = GrowVec::new();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[]");
        let back: GrowVec<i32> = serde_json::from_str(&s).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_serialize_ignores_spare_capacity() {
        let mut v: GrowVec<i32> = GrowVec::with_capacity(16);
        v.push(7);
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[7]");
    }

    #[test]
    fn test_deserialize_long_sequence_grows() {
        let json: String = {
            let items: Vec<String> = (0..100).map(|i| i.to_string()).collect();
            format!("[{}]", items.join(","))
        };
        let v: GrowVec<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(v.len(), 100);
        assert_eq!(v[0], 0);
        assert_eq!(v[99], 99);
        assert!(v.capacity() >= 100);
    }

    #[test]
    fn test_visitor_expecting_message() {
        let err = serde_json::from_str::<GrowVec<i32>>(r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(
            msg.contains("a sequence of elements"),
            "unexpected error message: {msg}"
        );
    }
}
