use std::cmp;
use std::fmt::{self, Formatter};
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::ArrayList;
use crate::collections::traits::Element;

const MAX_PREALLOCATION: usize = 4096;

/// Only the `len` live elements are written, never the spare capacity.
impl<T: Serialize> Serialize for ArrayList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len))?;
        for element in self.iter() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

struct ArrayListVisitor<T> {
    marker: PhantomData<T>,
}

impl<'de, T> Visitor<'de> for ArrayListVisitor<T>
where
    T: Element + Deserialize<'de>,
{
    type Value = ArrayList<T>;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        // The hint comes from the input, so it only pre-sizes up to a fixed bound.
        let hint = seq.size_hint().unwrap_or(0);
        let mut values = Vec::with_capacity(cmp::min(hint, MAX_PREALLOCATION));
        while let Some(element) = seq.next_element()? {
            values.push(element);
        }
        // Converting through a boxed slice leaves no spare capacity behind.
        Ok(ArrayList::from(values))
    }
}

impl<'de, T> Deserialize<'de> for ArrayList<T>
where
    T: Element + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(ArrayListVisitor {
            marker: PhantomData,
        })
    }
}
