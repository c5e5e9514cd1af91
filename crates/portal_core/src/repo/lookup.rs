//! Linear id lookups over small, unindexed collections.

use crate::model::{
    Announcement, ChangelogEntry, Event, GlossaryTerm, Member, Practice, PracticeDependency,
    Profession, Rfc,
};

/// A record addressable by a stable string id.
pub trait Identified {
    fn id(&self) -> &str;
}

macro_rules! identified_by_id {
    ($($ty:ty),+ $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })+
    };
}

identified_by_id!(
    Member,
    Profession,
    Practice,
    Rfc,
    Event,
    ChangelogEntry,
    GlossaryTerm,
    Announcement,
);

impl Identified for PracticeDependency {
    fn id(&self) -> &str {
        &self.practice
    }
}

/// Returns the first record whose id equals `id`.
///
/// An absent collection behaves like an empty one. With duplicated ids the
/// earliest record in collection order wins.
pub fn find_by_id<'a, T, C>(collection: C, id: &str) -> Option<&'a T>
where
    T: Identified + 'a,
    C: Into<Option<&'a [T]>>,
{
    collection.into()?.iter().find(|record| record.id() == id)
}

pub fn find_member<'a>(members: &'a [Member], id: &str) -> Option<&'a Member> {
    find_by_id(members, id)
}

pub fn find_profession<'a>(professions: &'a [Profession], id: &str) -> Option<&'a Profession> {
    find_by_id(professions, id)
}

pub fn find_practice<'a>(practices: &'a [Practice], id: &str) -> Option<&'a Practice> {
    find_by_id(practices, id)
}

/// Resolves an RFC from a URL fragment: `rfc-007` or the raw id.
pub fn find_rfc_by_hash<'a>(rfcs: &'a [Rfc], hash: &str) -> Option<&'a Rfc> {
    rfcs.iter()
        .find(|rfc| rfc.hash_id() == hash || rfc.id == hash)
}

/// Resolves an optional soft reference.
pub fn resolve<'a, T: Identified>(collection: &'a [T], id: Option<&str>) -> Option<&'a T> {
    id.and_then(|id| find_by_id(collection, id))
}
