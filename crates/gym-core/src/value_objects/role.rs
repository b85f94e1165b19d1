//! Actor roles and the authenticated caller

use bitflags::bitflags;

use super::choice::string_enum;
use super::Snowflake;

string_enum! {
    /// Role column of an actor
    pub enum Role {
        Admin => "admin",
        Trainer => "trainer",
        Member => "member",
    }
}

impl Role {
    /// Flag for this role in a [`RoleSet`]
    #[inline]
    pub fn flag(self) -> RoleSet {
        match self {
            Self::Admin => RoleSet::ADMIN,
            Self::Trainer => RoleSet::TRAINER,
            Self::Member => RoleSet::MEMBER,
        }
    }
}

bitflags! {
    /// Set of roles allowed to perform an action
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RoleSet: u8 {
        /// Super-admin flag, orthogonal to the role column
        const SUPER   = 1 << 0;
        const ADMIN   = 1 << 1;
        const TRAINER = 1 << 2;
        const MEMBER  = 1 << 3;

        const ADMINS   = Self::SUPER.bits() | Self::ADMIN.bits();
        const STAFF    = Self::ADMINS.bits() | Self::TRAINER.bits();
        const EVERYONE = Self::STAFF.bits() | Self::MEMBER.bits();
    }
}

impl RoleSet {
    /// Whether the caller holds any role in this set
    pub fn admits(self, caller: &Caller) -> bool {
        self.intersects(caller.roles())
    }
}

/// Identity and role of whoever issued the current request
///
/// `role` is `None` when the stored role is not one this service knows; such
/// callers see nothing and may do nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub id: Snowflake,
    pub role: Option<Role>,
    pub is_super: bool,
}

impl Caller {
    pub fn new(id: Snowflake, role: Option<Role>, is_super: bool) -> Self {
        Self { id, role, is_super }
    }

    pub fn roles(&self) -> RoleSet {
        let mut set = self.role.map_or(RoleSet::empty(), Role::flag);
        if self.is_super {
            set |= RoleSet::SUPER;
        }
        set
    }

    /// Super-admins and admins
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.is_super || self.role == Some(Role::Admin)
    }

    #[inline]
    pub fn is_trainer(&self) -> bool {
        self.role == Some(Role::Trainer)
    }

    #[inline]
    pub fn is_member(&self) -> bool {
        self.role == Some(Role::Member)
    }
}
