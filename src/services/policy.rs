//! Authorization policy: pure decision functions applied by every route.
//!
//! The rules, system-wide:
//! - `admin` is allowed every action on every resource.
//! - Self-service actions (own profile, own bookings) are allowed when the
//!   caller's id equals the resource owner's id, regardless of role.
//! - Hotel/chambre/image mutation is admin only; reading them is public.
//! - User listing: `employee` sees everyone, everyone else sees only
//!   themselves. Admin is deliberately not special-cased here (observed
//!   behavior of the deployed system, preserved for compatibility).

use crate::types::internal::auth::{Identity, Role};

/// Scope of a listing: everything, or just the caller's own records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingScope {
    All,
    OwnOnly,
}

/// May the caller create, update, or delete hotels, chambres, or images?
pub fn can_manage_catalog(caller: &Identity) -> bool {
    caller.role == Role::Admin
}

/// May the caller mutate a resource owned by `owner_id` (a user profile or
/// a booking)? Owners always may; admins may for anyone.
pub fn can_act_on_owned(caller: &Identity, owner_id: i32) -> bool {
    caller.role == Role::Admin || caller.id == owner_id
}

/// What slice of the user table may the caller list?
pub fn user_listing_scope(caller: &Identity) -> ListingScope {
    match caller.role {
        Role::Employee => ListingScope::All,
        _ => ListingScope::OwnOnly,
    }
}

/// What slice of the bookings may the caller list?
pub fn booking_listing_scope(caller: &Identity) -> ListingScope {
    match caller.role {
        Role::Admin => ListingScope::All,
        _ => ListingScope::OwnOnly,
    }
}
