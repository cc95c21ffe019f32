//! Password-protected data package.

use std::fmt;
use std::io::Write;

use uuid::uuid;
use vital_xml::{Element, ParseResult, WriteResult, XmlWriter, require_field};

use crate::ThingType;
use crate::text;
use crate::type_id::TypeId;
use crate::vocab::{Coded, PasswordProtectAlgorithm};

/// An opaque payload protected by a password-derived key.
///
/// The algorithm name is a coded vocabulary with the forward-compatible
/// fallback: packages written by newer clients with algorithms this code does
/// not know still parse, carry the original algorithm literal, and write it
/// back unchanged. Decryption of such packages is up to the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordProtectedPackage {
    /// The key-derivation/encryption scheme. Mandatory.
    pub algorithm: Option<Coded<PasswordProtectAlgorithm>>,
    /// Base64 salt fed to the key-derivation function.
    pub salt: Option<String>,
    /// Key-derivation iteration count.
    pub iteration_count: Option<u32>,
    /// The base64 payload. Mandatory.
    pub data: Option<String>,
}

impl PasswordProtectedPackage {
    pub fn new(algorithm: Coded<PasswordProtectAlgorithm>, data: impl Into<String>) -> Self {
        Self {
            algorithm: Some(algorithm),
            data: Some(data.into()),
            ..Self::default()
        }
    }
}

impl ThingType for PasswordProtectedPackage {
    const TYPE_ID: TypeId = TypeId::new(uuid!("c9287326-bb43-4194-858c-8b60768f000f"));
    const ROOT: &'static str = "password-protected-package";

    fn parse_xml(node: &Element) -> ParseResult<Self> {
        let iteration_count = match node.opt_int_child("iteration-count")? {
            Some(raw) => Some(u32::try_from(raw).map_err(|_| {
                node.invalid(format!("iteration-count {raw} is out of range"))
            })?),
            None => None,
        };
        Ok(Self {
            algorithm: Some(Coded::from_element(node.require("algorithm-name")?)),
            salt: node.opt_text_child("salt"),
            iteration_count,
            data: Some(node.require("data")?.text().to_owned()),
        })
    }

    fn write_xml<W: Write>(&self, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        let algorithm = require_field(&self.algorithm, Self::ROOT, "algorithm-name")?;
        let data = require_field(&self.data, Self::ROOT, "data")?;
        writer.element(Self::ROOT, |w| {
            w.text_element("algorithm-name", algorithm.wire_value())?;
            w.opt_text_element("salt", self.salt.as_deref())?;
            w.opt_int_element("iteration-count", self.iteration_count.map(i64::from))?;
            w.text_element("data", data)
        })
    }
}

impl fmt::Display for PasswordProtectedPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(text::lookup("label.encrypted-package"))?;
        if let Some(algorithm) = &self.algorithm {
            write!(f, " ({})", algorithm)?;
        }
        Ok(())
    }
}
