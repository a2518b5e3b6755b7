//! Arbitration identifiers attached to bridge frames.
//! Identifiers are taken from a static table indexed by the frame position in
//! the cycle; they carry no structure of their own.
use embedded_can::{ExtendedId, Id, StandardId};

//==================================================================================ARBITRATION_ID
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// CAN arbitration identifier, 11-bit standard or 29-bit extended.
pub struct ArbitrationId(Id);

impl ArbitrationId {
    /// Standard (11-bit) identifier. `None` when `raw > 0x7FF`.
    pub const fn standard(raw: u16) -> Option<Self> {
        match StandardId::new(raw) {
            Some(id) => Some(Self(Id::Standard(id))),
            None => None,
        }
    }

    /// Extended (29-bit) identifier. `None` when `raw > 0x1FFF_FFFF`.
    pub const fn extended(raw: u32) -> Option<Self> {
        match ExtendedId::new(raw) {
            Some(id) => Some(Self(Id::Extended(id))),
            None => None,
        }
    }

    /// Standard identifier for `const` tables.
    ///
    /// # Panics
    /// When `raw > 0x7FF`. In a `const` context this is a compile error.
    pub const fn standard_const(raw: u16) -> Self {
        match Self::standard(raw) {
            Some(id) => id,
            None => panic!("standard CAN identifier out of range"),
        }
    }

    /// Raw numeric value, regardless of the identifier format.
    pub fn raw(&self) -> u32 {
        match self.0 {
            Id::Standard(id) => id.as_raw() as u32,
            Id::Extended(id) => id.as_raw(),
        }
    }

    /// True for 29-bit identifiers.
    pub fn is_extended(&self) -> bool {
        matches!(self.0, Id::Extended(_))
    }

    /// Identifier in the `embedded-can` representation expected by HAL drivers.
    pub fn id(&self) -> Id {
        self.0
    }
}

impl From<StandardId> for ArbitrationId {
    fn from(id: StandardId) -> Self {
        Self(Id::Standard(id))
    }
}

impl From<ExtendedId> for ArbitrationId {
    fn from(id: ExtendedId) -> Self {
        Self(Id::Extended(id))
    }
}

impl From<Id> for ArbitrationId {
    fn from(id: Id) -> Self {
        Self(id)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ArbitrationId {
    fn format(&self, f: defmt::Formatter) {
        if self.is_extended() {
            defmt::write!(f, "ext:{=u32:#x}", self.raw())
        } else {
            defmt::write!(f, "std:{=u32}", self.raw())
        }
    }
}
