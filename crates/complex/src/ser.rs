//! [`Complex`] serialization, as a 2 element `[re, im]` sequence.
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::Complex;

impl Serialize for Complex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(&self.re())?;
        seq.serialize_element(&self.im())?;
        seq.end()
    }
}
