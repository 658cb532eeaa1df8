//! Vehicle list identifiers and their packed `u32` form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CompanyId, VehicleListType, VehicleType};

const COMPANY_SHIFT: u32 = 28;
const VTYPE_SHIFT: u32 = 26;
const LTYPE_SHIFT: u32 = 23;
const INDEX_BITS: u32 = 20;

/// Errors packing or unpacking a [`VehicleListId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentError {
    /// Company does not fit in 4 bits.
    #[error("company {0} does not fit in a packed list id")]
    CompanyOverflow(CompanyId),
    /// Scope index does not fit in 20 bits.
    #[error("scope index {0} does not fit in a packed list id")]
    IndexOverflow(u32),
    /// Packed list type is not a known discriminant.
    #[error("unknown list type {0} in packed list id")]
    UnknownListType(u32),
    /// Bit 22 is reserved and must be clear.
    #[error("reserved bits set in packed list id {0:#010x}")]
    Reserved(u32),
}

/// Describes which logical vehicle list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleListId {
    /// Scope of the list.
    pub list_type: VehicleListType,
    /// Vehicle category shown.
    pub vehicle_type: VehicleType,
    /// Company owning the vehicles.
    pub company: CompanyId,
    /// Scope-dependent index (station, depot, group, or first shared vehicle).
    pub index: u32,
}

impl VehicleListId {
    /// Creates a new identifier.
    pub const fn new(
        list_type: VehicleListType,
        vehicle_type: VehicleType,
        company: CompanyId,
        index: u32,
    ) -> Self {
        Self {
            list_type,
            vehicle_type,
            company,
            index,
        }
    }

    /// Packs into `company:4 | vtype:2 | type:3 | reserved:3 | index:20`.
    pub fn pack(&self) -> Result<u32, IdentError> {
        if self.company >= 16 {
            return Err(IdentError::CompanyOverflow(self.company));
        }
        if self.index >= 1 << INDEX_BITS {
            return Err(IdentError::IndexOverflow(self.index));
        }
        Ok(u32::from(self.company) << COMPANY_SHIFT
            | (self.vehicle_type as u32) << VTYPE_SHIFT
            | (self.list_type as u32) << LTYPE_SHIFT
            | self.index)
    }

    /// Inverse of [`VehicleListId::pack`].
    pub fn unpack(data: u32) -> Result<Self, IdentError> {
        if data & (0b111 << INDEX_BITS) != 0 {
            return Err(IdentError::Reserved(data));
        }
        let ltype = (data >> LTYPE_SHIFT) & 0b111;
        let list_type = *VehicleListType::ALL
            .get(ltype as usize)
            .ok_or(IdentError::UnknownListType(ltype))?;
        let vehicle_type = VehicleType::ALL[((data >> VTYPE_SHIFT) & 0b11) as usize];
        Ok(Self {
            list_type,
            vehicle_type,
            company: (data >> COMPANY_SHIFT) as CompanyId,
            index: data & ((1 << INDEX_BITS) - 1),
        })
    }
}
